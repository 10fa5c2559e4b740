//! YAML codec
//!
//! Dumps with mapping key order as encountered. Loading resolves only the
//! standard scalar and collection tags; arbitrary object construction is
//! not possible.

use super::{into_record, Format};
use crate::error::{PersistError, Result};
use crate::record::StructuredRecord;

/// Encode a record as YAML text.
pub fn encode_yaml(record: &StructuredRecord) -> Result<String> {
    serde_yaml::to_string(record).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize data to YAML");
        PersistError::Serialization {
            format: Format::Yaml.name(),
            reason: format!("Ensure that all data types are serializable. Error: {e}"),
        }
    })
}

/// Decode YAML text into a record.
pub fn decode_yaml(text: &str) -> Result<StructuredRecord> {
    let value: serde_json::Value = serde_yaml::from_str(text).map_err(|e| {
        tracing::error!(error = %e, "Failed to deserialize data from YAML");
        PersistError::Parse {
            format: Format::Yaml.name(),
            reason: format!("Ensure that the data is a valid YAML. Error: {e}"),
        }
    })?;
    into_record(value, Format::Yaml)
}
