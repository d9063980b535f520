pub mod constants;
pub mod interfaces;
pub mod models;
pub mod utils;

// Re-export the request handlers and their error type
pub use interfaces::{get_value, set_value, ConfError};

// Re-export the document model
pub use models::{IniLine, LineKind};
pub use utils::ini_reader::{IniReader, SetOutcome};
