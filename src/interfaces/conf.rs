//! `get` and `set` request handlers
//!
//! Each handler runs one full load, resolve and (for `set`) save cycle
//! against the file on disk.

use std::io;

use log::{debug, info};

use crate::interfaces::ConfError;
use crate::utils::ini_reader::{IniReader, SetOutcome};

/// Read the value of `key` in `section` from `file`
///
/// # Arguments
/// * `file` - Path to the INI configuration file
/// * `section` - Section name, without brackets
/// * `key` - Key to look up
///
/// # Returns
/// * `Ok(String)` - The value, leading spaces removed
/// * `Err(ConfError)` - `FileNotFound`, `ReadFailure` or `KeyNotFound`
pub fn get_value(file: &str, section: &str, key: &str) -> Result<String, ConfError> {
    let reader = IniReader::from_file(file).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfError::FileNotFound {
            file: file.to_string(),
        },
        _ => ConfError::ReadFailure {
            file: file.to_string(),
            source,
        },
    })?;

    match reader.get(section, key) {
        Some(value) => {
            debug!("Found [{}] {} in '{}'", section, key, file);
            Ok(value.to_string())
        }
        None => Err(ConfError::KeyNotFound {
            file: file.to_string(),
            section: section.to_string(),
            key: key.to_string(),
        }),
    }
}

/// Set `key` to `value` in `section` of `file`, creating whatever is missing
///
/// A missing file is treated as empty and created on save. The whole file
/// is rewritten on success.
///
/// # Arguments
/// * `file` - Path to the INI configuration file
/// * `section` - Section name, without brackets
/// * `key` - Key to create or update
/// * `value` - Value to assign
///
/// # Returns
/// * `Ok(SetOutcome)` - The structural change that was written
/// * `Err(ConfError)` - `ReadFailure` or `WriteFailure`
pub fn set_value(
    file: &str,
    section: &str,
    key: &str,
    value: &str,
) -> Result<SetOutcome, ConfError> {
    let mut reader = match IniReader::from_file(file) {
        Ok(reader) => reader,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Configuration file '{}' not found, creating it", file);
            IniReader::new()
        }
        Err(source) => {
            return Err(ConfError::ReadFailure {
                file: file.to_string(),
                source,
            });
        }
    };

    let outcome = reader.set(section, key, value);

    reader
        .to_file(file)
        .map_err(|source| ConfError::WriteFailure {
            file: file.to_string(),
            source,
        })?;

    Ok(outcome)
}
