//! Text I/O for pointer files

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read a file's text content, treating a missing or unreadable file as
/// absent.
///
/// The reconciler compares desired content against whatever is on disk;
/// any read failure simply means "write it fresh", so errors are folded
/// into `None` here.
pub fn read_text_or_absent(path: &NormalizedPath) -> Option<String> {
    fs::read_to_string(path.to_native()).ok()
}

/// Write text content to a file, creating parent directories as needed.
///
/// Overwrites the full content of an existing file.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    let native = path.to_native();
    if let Some(parent) = native.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(&native, content).map_err(|e| Error::io(&native, e))
}
