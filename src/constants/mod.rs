pub mod help;
pub mod log_level;

pub use help::{DESCRIPTION, HELP_NOTES, LONG_VERSION, PROGRAM_NAME, USAGE};
pub use log_level::DEFAULT_LOG_FILTER;
