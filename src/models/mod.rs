//! Core data models for the application
//!
//! An INI document is modelled as the ordered list of its physical lines.
//! Each [`IniLine`] keeps its raw text, and [`LineKind`] tells the scanner
//! whether that text is a section header, a `key=value` entry or opaque.
//!
//! ```rust
//! use cpc_conf::models::{IniLine, LineKind};
//!
//! let line = IniLine::from("  host = localhost\n");
//! assert_eq!(
//!     line.kind(),
//!     LineKind::Item { key: "host ", value: "localhost" }
//! );
//! ```

pub mod ini_line;

pub use ini_line::{split_lines, IniLine, LineKind};
