//! String utility functions for line-oriented text processing

/// Remove leading space characters from a string
///
/// Only `' '` is stripped; tabs and other whitespace are kept, as are
/// trailing spaces.
///
/// # Arguments
///
/// * `s` - The input string
///
/// # Returns
///
/// The input without its leading spaces
pub fn trim_leading_spaces(s: &str) -> &str {
    s.trim_start_matches(' ')
}

/// Split a raw line into its content and its line terminator
///
/// Recognized terminators are `"\r\n"` and `"\n"`. A line without a
/// terminator (the last line of a file) yields an empty terminator.
///
/// # Arguments
///
/// * `line` - The raw line, possibly ending with a terminator
///
/// # Returns
///
/// A `(content, terminator)` pair
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Strip the line terminator from a raw line
pub fn strip_line_ending(line: &str) -> &str {
    split_line_ending(line).0
}
