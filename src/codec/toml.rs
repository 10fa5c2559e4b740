//! TOML codec (read-only)
//!
//! There is deliberately no `encode_toml`; the dispatcher in the parent
//! module reports the gap when TOML encoding is requested.

use super::{into_record, Format};
use crate::error::{PersistError, Result};
use crate::record::StructuredRecord;

/// Decode TOML text into a record.
pub fn decode_toml(text: &str) -> Result<StructuredRecord> {
    let table: toml::Table = text.parse().map_err(|e: toml::de::Error| {
        tracing::error!(error = %e, "Failed to deserialize data from TOML");
        PersistError::Parse {
            format: Format::Toml.name(),
            reason: format!("Ensure that the data is a valid TOML. Error: {e}"),
        }
    })?;
    let value = serde_json::to_value(table).map_err(|e| PersistError::Parse {
        format: Format::Toml.name(),
        reason: format!("Ensure that the data is a valid TOML. Error: {e}"),
    })?;
    into_record(value, Format::Toml)
}
