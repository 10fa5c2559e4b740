//! Error types for statekeep
//!
//! One crate-wide error enum mirroring the failure kinds a persistence
//! operation can hit: file I/O, serialization, parsing, and missing
//! capabilities. Errors are constructed at the boundary where the failure
//! is detected, after the diagnostic has been logged there.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for statekeep operations
pub type Result<T> = std::result::Result<T, PersistError>;

/// Main error type for statekeep
#[derive(Error, Debug)]
pub enum PersistError {
    /// The file could not be read or written.
    #[error("Failed to access file {path:?}. {hint} Error: {source}")]
    Io {
        path: PathBuf,
        /// Cause-specific guidance, e.g. "Check that the file exists."
        hint: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded in the target representation.
    #[error("Failed to serialize data to {format}. {reason}")]
    Serialization { format: &'static str, reason: String },

    /// Input text is not valid for the selected format.
    #[error("Failed to deserialize data from {format}. {reason}")]
    Parse { format: &'static str, reason: String },

    /// A capability this operation needs does not exist (e.g. the TOML
    /// encoder, which is deliberately absent).
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl PersistError {
    /// Check if this error came from the filesystem layer
    pub fn is_io(&self) -> bool {
        matches!(self, PersistError::Io { .. })
    }

    /// Check if this error reports a missing capability
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, PersistError::NotImplemented(_))
    }
}
