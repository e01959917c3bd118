//! Text file reading
//!
//! Markdown sources are read strictly: content that is not valid UTF-8 is
//! reported as an error rather than converted lossily.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a file could not be read as text
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Read a file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
