use std::fmt;

use crate::utils::string::{split_line_ending, strip_line_ending, trim_leading_spaces};

/// One physical line of an INI file, stored with its original terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniLine {
    raw: String,
}

/// What a line means to the section/key scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `[name]` header; everything after the first `]` is ignored
    Section(&'a str),
    /// `key=value` entry, split at the first `=`
    Item { key: &'a str, value: &'a str },
    /// Blank lines, comments and anything else the scanner passes through
    Other,
}

impl IniLine {
    pub fn new(raw: impl Into<String>) -> Self {
        IniLine { raw: raw.into() }
    }

    /// Build a `[section]` header line terminated with `\n`
    pub fn section(name: &str) -> Self {
        IniLine::new(format!("[{}]\n", name))
    }

    /// Build a `key=value` line terminated with `\n`
    pub fn item(key: &str, value: &str) -> Self {
        IniLine::new(format!("{}={}\n", key, value))
    }

    pub fn blank() -> Self {
        IniLine::new("\n")
    }

    /// Raw text, terminator included
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Text without the line terminator
    pub fn content(&self) -> &str {
        strip_line_ending(&self.raw)
    }

    pub fn is_terminated(&self) -> bool {
        !split_line_ending(&self.raw).1.is_empty()
    }

    /// Append `\n` if the line has no terminator yet
    pub fn terminate(&mut self) {
        if !self.is_terminated() {
            self.raw.push('\n');
        }
    }

    pub fn kind(&self) -> LineKind<'_> {
        let content = self.content();

        if let Some(rest) = content.strip_prefix('[') {
            let name = match rest.find(']') {
                Some(end) => &rest[..end],
                None => rest,
            };
            return LineKind::Section(name);
        }

        match content.find('=') {
            Some(eq) if eq > 0 => LineKind::Item {
                key: trim_leading_spaces(&content[..eq]),
                value: trim_leading_spaces(&content[eq + 1..]),
            },
            _ => LineKind::Other,
        }
    }

    pub fn section_name(&self) -> Option<&str> {
        match self.kind() {
            LineKind::Section(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for IniLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for IniLine {
    fn from(raw: &str) -> Self {
        IniLine::new(raw)
    }
}

impl From<String> for IniLine {
    fn from(raw: String) -> Self {
        IniLine::new(raw)
    }
}

/// Split text into lines, each keeping its `\n` terminator
pub fn split_lines(text: &str) -> Vec<IniLine> {
    text.split_inclusive('\n').map(IniLine::from).collect()
}
