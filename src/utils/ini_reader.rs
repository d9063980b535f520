//! INI file reader implementation
//!
//! `IniReader` keeps every physical line of the source document instead of
//! parsing it into maps, so that a `set` leaves comments, blank lines,
//! ordering and unrelated sections exactly as they were. Sections are never
//! materialized: the section a line belongs to is recovered by walking the
//! lines forward and remembering the last header seen.
//!
//! Lines before the first header belong to no section and are never matched.

use std::fmt;
use std::io;
use std::path::Path;

use log::debug;

use crate::models::{split_lines, IniLine, LineKind};
use crate::utils::file::{read_lines, write_lines};

/// Structural change performed by [`IniReader::set`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The first matching `key=value` line was rewritten in place
    Updated,
    /// The key was inserted right after the first header of the section
    Inserted,
    /// A new section header and entry were appended at the end
    SectionAppended,
}

/// Line-preserving INI document with section/key lookup and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniReader {
    /// Physical lines in file order, terminators included
    lines: Vec<IniLine>,
}

/// Result of a single forward scan for `section`/`key`
struct ScanResult {
    /// Index of the first `[section]` header
    section_index: Option<usize>,
    /// Index of the last `key=value` line in the block opened by that header
    last_item_index: Option<usize>,
    /// Index of the first matching `key=value` line inside that section
    key_index: Option<usize>,
}

impl IniReader {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<IniLine>) -> Self {
        IniReader { lines }
    }

    /// Split INI content into lines
    pub fn parse(content: &str) -> Self {
        IniReader::from_lines(split_lines(content))
    }

    /// Load an INI file
    ///
    /// A missing file is returned as an error with `io::ErrorKind::NotFound`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(IniReader::from_lines(read_lines(path)?))
    }

    /// Overwrite `path` with the current lines
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        write_lines(path, &self.lines)
    }

    pub fn lines(&self) -> &[IniLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the value of `key` in `section`
    ///
    /// Only the first matching entry is considered; later duplicates in the
    /// same section are ignored. The value is returned as written, minus its
    /// leading spaces. No unquoting is performed.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let mut current_section: Option<&str> = None;

        for line in &self.lines {
            match line.kind() {
                LineKind::Section(name) => current_section = Some(name),
                LineKind::Item { key: k, value }
                    if current_section == Some(section) && k == key =>
                {
                    return Some(value);
                }
                _ => {}
            }
        }

        None
    }

    /// Set `key` to `value` in `section`, creating the section or key if needed
    ///
    /// An existing entry is rewritten in place as `key=value`. A new key goes
    /// after the last entry of the section's first block; a new section is
    /// appended at the end, separated from previous content by a blank line.
    ///
    /// # Arguments
    ///
    /// * `section` - Section name, without brackets
    /// * `key` - Key to create or update
    /// * `value` - New value; must not contain a newline
    ///
    /// # Returns
    ///
    /// Which structural change was made
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> SetOutcome {
        let scan = self.scan(section, key);

        let outcome = match (scan.key_index, scan.section_index) {
            (Some(index), _) => {
                self.lines[index] = IniLine::item(key, value);
                SetOutcome::Updated
            }
            (None, Some(header)) => {
                let anchor = scan.last_item_index.unwrap_or(header);
                self.lines[anchor].terminate();
                self.lines.insert(anchor + 1, IniLine::item(key, value));
                SetOutcome::Inserted
            }
            (None, None) => {
                if let Some(last) = self.lines.last_mut() {
                    last.terminate();
                    self.lines.push(IniLine::blank());
                }
                self.lines.push(IniLine::section(section));
                self.lines.push(IniLine::item(key, value));
                SetOutcome::SectionAppended
            }
        };

        debug!("set [{}] {}: {:?}", section, key, outcome);
        outcome
    }

    /// Check if a `[section]` header exists
    pub fn section_exist(&self, section: &str) -> bool {
        self.lines
            .iter()
            .any(|line| line.section_name() == Some(section))
    }

    /// Check if an item exists in the given section
    pub fn item_exist(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Section names in file order, each listed once
    pub fn section_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.lines.iter().filter_map(IniLine::section_name) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    fn scan(&self, section: &str, key: &str) -> ScanResult {
        let mut current_section: Option<&str> = None;
        let mut in_first_block = false;
        let mut result = ScanResult {
            section_index: None,
            last_item_index: None,
            key_index: None,
        };

        for (index, line) in self.lines.iter().enumerate() {
            match line.kind() {
                LineKind::Section(name) => {
                    current_section = Some(name);
                    in_first_block = name == section && result.section_index.is_none();
                    if in_first_block {
                        result.section_index = Some(index);
                    }
                }
                LineKind::Item { key: k, .. } => {
                    if in_first_block {
                        result.last_item_index = Some(index);
                    }
                    if current_section == Some(section) && k == key {
                        result.key_index = Some(index);
                        break;
                    }
                }
                LineKind::Other => {}
            }
        }

        result
    }
}

impl fmt::Display for IniReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "; global comment
[General]
api_mode=false
  default_url = http://example.com/?a=1

[Servers]
primary=example.com,443
primary=shadowed
";

    #[test]
    fn test_set_on_empty_document() {
        let mut reader = IniReader::new();
        assert_eq!(
            reader.set("database", "host", "localhost"),
            SetOutcome::SectionAppended
        );
        assert_eq!(reader.to_string(), "[database]\nhost=localhost\n");
    }

    #[test]
    fn test_set_reuses_section() {
        let mut reader = IniReader::new();
        reader.set("database", "host", "localhost");
        assert_eq!(
            reader.set("database", "port", "5432"),
            SetOutcome::Inserted
        );
        assert_eq!(
            reader.to_string(),
            "[database]\nhost=localhost\nport=5432\n"
        );
        assert_eq!(reader.get("database", "host"), Some("localhost"));
        assert_eq!(reader.get("database", "missing"), None);
    }

    #[test]
    fn test_get_values() {
        let reader = IniReader::parse(SAMPLE);
        assert_eq!(reader.get("General", "api_mode"), Some("false"));
        assert_eq!(reader.get("Servers", "primary"), Some("example.com,443"));
        assert_eq!(reader.get("Servers", "api_mode"), None);
        assert_eq!(reader.get("general", "api_mode"), None);
    }

    #[test]
    fn test_get_keeps_trailing_key_spaces() {
        let reader = IniReader::parse(SAMPLE);
        assert_eq!(reader.get("General", "default_url"), None);
        assert_eq!(
            reader.get("General", "default_url "),
            Some("http://example.com/?a=1")
        );
    }

    #[test]
    fn test_entries_before_first_header_have_no_section() {
        let reader = IniReader::parse("orphan=1\n[a]\nk=v\n");
        assert_eq!(reader.get("", "orphan"), None);
        assert_eq!(reader.get("a", "orphan"), None);
    }

    #[test]
    fn test_update_rewrites_first_match_only() {
        let mut reader = IniReader::parse(SAMPLE);
        assert_eq!(reader.set("Servers", "primary", "new"), SetOutcome::Updated);
        assert_eq!(
            reader.to_string(),
            SAMPLE.replace("primary=example.com,443", "primary=new")
        );
        assert!(reader.to_string().contains("primary=shadowed\n"));
    }

    #[test]
    fn test_update_normalizes_padding() {
        let mut reader = IniReader::parse("[s]\n  k =  old value\n");
        reader.set("s", "k ", "new");
        assert_eq!(reader.to_string(), "[s]\nk =new\n");
    }

    #[test]
    fn test_insert_into_first_section_block() {
        let mut reader = IniReader::parse("[a]\nx=1\n[b]\ny=2\n[a]\nz=3\n");
        assert_eq!(reader.set("a", "w", "0"), SetOutcome::Inserted);
        assert_eq!(reader.to_string(), "[a]\nx=1\nw=0\n[b]\ny=2\n[a]\nz=3\n");
    }

    #[test]
    fn test_insert_keeps_section_separator() {
        let mut reader = IniReader::parse("[a]\nx=1\n; trailing note\n\n[b]\ny=2\n");
        reader.set("a", "w", "0");
        assert_eq!(
            reader.to_string(),
            "[a]\nx=1\nw=0\n; trailing note\n\n[b]\ny=2\n"
        );
    }

    #[test]
    fn test_insert_into_section_without_items() {
        let mut reader = IniReader::parse("[a]\n; nothing yet\n[b]\ny=2\n");
        reader.set("a", "w", "0");
        assert_eq!(reader.to_string(), "[a]\nw=0\n; nothing yet\n[b]\ny=2\n");
    }

    #[test]
    fn test_key_in_repeated_section_is_updated() {
        let mut reader = IniReader::parse("[a]\nx=1\n[b]\ny=2\n[a]\nz=3\n");
        assert_eq!(reader.get("a", "z"), Some("3"));
        assert_eq!(reader.set("a", "z", "4"), SetOutcome::Updated);
        assert_eq!(reader.to_string(), "[a]\nx=1\n[b]\ny=2\n[a]\nz=4\n");
    }

    #[test]
    fn test_append_section_after_content() {
        let mut reader = IniReader::parse(SAMPLE);
        assert_eq!(reader.set("New", "k", "v"), SetOutcome::SectionAppended);
        assert_eq!(reader.to_string(), format!("{}\n[New]\nk=v\n", SAMPLE));
    }

    #[test]
    fn test_append_terminates_last_line() {
        let mut reader = IniReader::parse("[a]\nx=1");
        reader.set("b", "y", "2");
        assert_eq!(reader.to_string(), "[a]\nx=1\n\n[b]\ny=2\n");
    }

    #[test]
    fn test_insert_after_unterminated_header() {
        let mut reader = IniReader::parse("[a]");
        reader.set("a", "x", "1");
        assert_eq!(reader.to_string(), "[a]\nx=1\n");
    }

    #[test]
    fn test_update_unterminated_last_line() {
        let mut reader = IniReader::parse("[a]\nx=1");
        reader.set("a", "x", "2");
        assert_eq!(reader.to_string(), "[a]\nx=2\n");
    }

    #[test]
    fn test_crlf_lines() {
        let mut reader = IniReader::parse("[a]\r\nx = 1\r\n[b]\r\ny=2\r\n");
        assert_eq!(reader.get("a", "x "), Some("1"));
        assert_eq!(reader.get("b", "y"), Some("2"));
        reader.set("b", "y", "3");
        assert_eq!(reader.to_string(), "[a]\r\nx = 1\r\n[b]\r\ny=3\n");
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once = IniReader::parse(SAMPLE);
        once.set("General", "enable_insert", "true");
        let mut twice = once.clone();
        twice.set("General", "enable_insert", "true");
        assert_eq!(once, twice);

        let mut fresh = IniReader::new();
        fresh.set("x", "y", "z");
        let snapshot = fresh.clone();
        fresh.set("x", "y", "z");
        assert_eq!(fresh, snapshot);
    }

    #[test]
    fn test_set_leaves_other_lines_untouched() {
        let mut reader = IniReader::parse(SAMPLE);
        reader.set("General", "api_mode", "true");

        let before = split_lines(SAMPLE);
        let after = reader.lines();
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after) {
            if old.as_str() != "api_mode=false\n" {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_round_trip_values() {
        let mut reader = IniReader::parse(SAMPLE);
        for value in ["", "a=b=c", "  padded", "with spaces  ", "\"quoted\"", "[x]"] {
            reader.set("General", "api_mode", value);
            assert_eq!(
                reader.get("General", "api_mode"),
                Some(value.trim_start_matches(' '))
            );
        }
    }

    #[test]
    fn test_value_looking_like_header_stays_an_item() {
        let mut reader = IniReader::new();
        reader.set("s", "k", "[not a section]");
        assert_eq!(reader.section_names(), vec!["s"]);
        assert_eq!(reader.get("s", "k"), Some("[not a section]"));
    }

    #[test]
    fn test_section_queries() {
        let reader = IniReader::parse("[a]\nx=1\n[b]\n[a]\ny=2\n");
        assert!(reader.section_exist("a"));
        assert!(reader.section_exist("b"));
        assert!(!reader.section_exist("c"));
        assert!(reader.item_exist("a", "y"));
        assert!(!reader.item_exist("b", "x"));
        assert_eq!(reader.section_names(), vec!["a", "b"]);
        assert_eq!(reader.len(), 5);
        assert!(!reader.is_empty());
    }
}
