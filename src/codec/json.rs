//! JSON codec
//!
//! Pretty-printed output with 4-space indentation (the default pretty
//! printer uses 2), UTF-8 throughout.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{into_record, Format};
use crate::error::{PersistError, Result};
use crate::record::StructuredRecord;

/// Encode a record as pretty-printed JSON text.
pub fn encode_json(record: &StructuredRecord) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut serializer).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize data to JSON");
        PersistError::Serialization {
            format: Format::Json.name(),
            reason: format!("Ensure that all data types are serializable. Error: {e}"),
        }
    })?;
    String::from_utf8(buf).map_err(|e| PersistError::Serialization {
        format: Format::Json.name(),
        reason: format!("Encoded output is not valid UTF-8. Error: {e}"),
    })
}

/// Decode JSON text into a record.
pub fn decode_json(text: &str) -> Result<StructuredRecord> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        tracing::error!(error = %e, "Failed to deserialize data from JSON");
        PersistError::Parse {
            format: Format::Json.name(),
            reason: format!("Ensure that the data is a valid JSON string. Error: {e}"),
        }
    })?;
    into_record(value, Format::Json)
}
