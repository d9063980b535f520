pub mod file;
pub mod ini_reader;
pub mod string;

// Re-export common utilities
pub use file::{read_lines, write_lines};
pub use ini_reader::{IniReader, SetOutcome};
