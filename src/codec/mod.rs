//! Serialization codecs
//!
//! Paired encode/decode functions for each supported text format, plus the
//! format-level dispatchers an entity uses. JSON and YAML are full codecs;
//! TOML is read-only — there is no TOML encoder, and selecting
//! [`Format::Toml`] for an encode reports the gap instead of guessing.

mod json;
mod toml;
mod yaml;


pub use json::{decode_json, encode_json};
pub use toml::decode_toml;
pub use yaml::{decode_yaml, encode_yaml};

use crate::error::{PersistError, Result};
use crate::record::StructuredRecord;

/// Serialization format bound to an entity. Exactly one per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    /// Decode-only; encoding is not available.
    Toml,
}

impl Format {
    /// Human-readable format name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Encode a record in the given format.
pub fn encode(record: &StructuredRecord, format: Format) -> Result<String> {
    match format {
        Format::Json => encode_json(record),
        Format::Yaml => encode_yaml(record),
        Format::Toml => {
            tracing::error!("TOML encoding requested but the TOML codec is read-only");
            Err(PersistError::NotImplemented(
                "TOML encoding is not available; the TOML codec is read-only",
            ))
        }
    }
}

/// Decode text in the given format into a record.
pub fn decode(text: &str, format: Format) -> Result<StructuredRecord> {
    match format {
        Format::Json => decode_json(text),
        Format::Yaml => decode_yaml(text),
        Format::Toml => decode_toml(text),
    }
}

/// Shared check that a decoded document is a mapping at the top level.
fn into_record(value: serde_json::Value, format: Format) -> Result<StructuredRecord> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => {
            tracing::error!(format = format.name(), "Decoded document is not a mapping");
            Err(PersistError::Parse {
                format: format.name(),
                reason: "The document must be a mapping at the top level.".to_string(),
            })
        }
    }
}
