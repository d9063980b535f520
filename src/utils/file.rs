//! Line-oriented file access for INI documents

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::models::{split_lines, IniLine};

/// Read a file into an ordered sequence of lines
///
/// Each line keeps its original terminator, so writing the sequence back
/// reproduces the file byte for byte.
///
/// # Arguments
///
/// * `path` - The file to read
///
/// # Returns
///
/// The lines of the file, or an `io::Error`. A missing file is reported
/// with `io::ErrorKind::NotFound`; deciding whether that is fatal is up to
/// the caller.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<IniLine>> {
    let content = fs::read_to_string(path.as_ref())?;
    let lines = split_lines(&content);
    debug!(
        "Read {} lines from '{}'",
        lines.len(),
        path.as_ref().display()
    );
    Ok(lines)
}

/// Truncate `path` and write every line's raw text to it, in order
///
/// # Arguments
///
/// * `path` - The file to create or overwrite
/// * `lines` - The lines to write
pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[IniLine]) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_str().as_bytes())?;
    }
    writer.flush()?;
    debug!(
        "Wrote {} lines to '{}'",
        lines.len(),
        path.as_ref().display()
    );
    Ok(())
}
