//! Raw file persistence
//!
//! Whole-file reads and writes with parent-directory auto-creation. Writes
//! are not atomic and there is no rollback: a failed write may leave a
//! truncated file behind.


use std::fs;
use std::path::Path;

use crate::error::{PersistError, Result};

/// File content, selecting text or raw-byte handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

impl Payload {
    /// Raw bytes of the payload regardless of kind.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Bytes(bytes) => bytes,
        }
    }
}

/// How [`read`] should interpret file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    Text,
    Bytes,
}

/// Write the entire payload to `path`.
pub fn write(path: &Path, payload: &Payload) -> Result<()> {
    fs::write(path, payload.as_bytes()).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "Failed to write file");
        PersistError::Io {
            path: path.to_path_buf(),
            hint: "Check that the file is writable.",
            source,
        }
    })
}

/// Read the full contents of `path` per the requested mode.
pub fn read(path: &Path, mode: ReadMode) -> Result<Payload> {
    match mode {
        ReadMode::Text => read_to_string(path).map(Payload::Text),
        ReadMode::Bytes => fs::read(path)
            .map(Payload::Bytes)
            .map_err(|source| read_error(path, source)),
    }
}

/// Read the full contents of `path` as text.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| read_error(path, source))
}

/// Recursively create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| {
                tracing::error!(path = %parent.display(), error = %source, "Failed to create directory");
                PersistError::Io {
                    path: parent.to_path_buf(),
                    hint: "Check that the directory can be created.",
                    source,
                }
            })?;
        }
    }
    Ok(())
}

fn read_error(path: &Path, source: std::io::Error) -> PersistError {
    let hint = match source.kind() {
        std::io::ErrorKind::NotFound => "Check that the file exists.",
        std::io::ErrorKind::PermissionDenied => "Check permissions.",
        _ => "Check that the file is readable.",
    };
    tracing::error!(path = %path.display(), error = %source, hint, "Failed to read file");
    PersistError::Io {
        path: path.to_path_buf(),
        hint,
        source,
    }
}
