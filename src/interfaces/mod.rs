pub mod conf;

use std::io;

use thiserror::Error;

pub use conf::{get_value, set_value};

#[derive(Error, Debug)]
pub enum ConfError {
    #[error("Configuration file '{file}' not found.")]
    FileNotFound { file: String },

    #[error("Could not read file '{file}': {source}")]
    ReadFailure {
        file: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not create or write to file '{file}'.")]
    WriteFailure {
        file: String,
        #[source]
        source: io::Error,
    },

    #[error("Key '{key}' not found in section '[{section}]' of file '{file}'.")]
    KeyNotFound {
        file: String,
        section: String,
        key: String,
    },

    #[error("{0}")]
    MissingArgument(String),

    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),

    #[error("{0}")]
    InvalidArguments(String),
}

impl ConfError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the usage reminder should follow the error message
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            ConfError::MissingArgument(_)
                | ConfError::UnknownCommand(_)
                | ConfError::InvalidArguments(_)
        )
    }
}
