//! Structured record snapshots and the shared-state merge entry point
//!
//! A [`StructuredRecord`] is the format-agnostic shape every codec speaks:
//! an ordered mapping from field name to dynamic value. Any serializable
//! value can be flattened into one, whether it is a derived struct with a
//! fixed field set or a dynamic key/value bag (a record is itself
//! flattenable). All propagation of loaded data into live state goes
//! through [`merge_record`] / [`merge_into`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{PersistError, Result};

/// Ordered field-name to value snapshot of a structured object.
///
/// Key order follows insertion order (declaration order for derived
/// structs), so repeated encodes of unchanged data are byte-identical.
pub type StructuredRecord = serde_json::Map<String, Value>;

/// Uniform extraction of a [`StructuredRecord`] from a structured value.
///
/// Implemented for every `Serialize` type. Extraction fails when the value
/// does not serialize to a key/value mapping (e.g. a bare scalar or
/// sequence) or contains unrepresentable data.
pub trait Flatten {
    /// Derive the record snapshot of this value's fields.
    fn flatten(&self) -> Result<StructuredRecord>;
}

impl<T: Serialize> Flatten for T {
    fn flatten(&self) -> Result<StructuredRecord> {
        let value = serde_json::to_value(self).map_err(|e| {
            tracing::error!(error = %e, "Failed to flatten value into a structured record");
            PersistError::Serialization {
                format: "structured record",
                reason: format!("Ensure that all data types are serializable. Error: {e}"),
            }
        })?;
        match value {
            Value::Object(map) => Ok(map),
            other => {
                tracing::error!(kind = value_kind(&other), "Value does not flatten to a mapping");
                Err(PersistError::Serialization {
                    format: "structured record",
                    reason: format!(
                        "The value must expose a field mapping, got a {}.",
                        value_kind(&other)
                    ),
                })
            }
        }
    }
}

/// Shallow field-level merge: every key of `incoming` overwrites the
/// same-named key in `target`; keys absent from `incoming` are untouched.
pub fn merge_record(target: &mut StructuredRecord, incoming: &StructuredRecord) {
    for (key, value) in incoming {
        target.insert(key.clone(), value.clone());
    }
}

/// Merge a loaded record into a typed value in place.
///
/// The target is flattened, overlaid with `incoming` via [`merge_record`],
/// and rebuilt. Keys the target's schema does not declare are dropped by
/// the rebuild; on any failure the target is left unchanged.
pub fn merge_into<T>(target: &mut T, incoming: &StructuredRecord) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = target.flatten()?;
    merge_record(&mut merged, incoming);
    let rebuilt = serde_json::from_value(Value::Object(merged)).map_err(|e| {
        tracing::error!(error = %e, "Loaded fields are not compatible with the target value");
        PersistError::Serialization {
            format: "structured record",
            reason: format!("Loaded fields are not compatible with the target value. Error: {e}"),
        }
    })?;
    *target = rebuilt;
    Ok(())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn flatten_derives_fields_in_declaration_order() {
        let sample = Sample {
            name: "alpha".to_string(),
            count: 3,
        };
        let record = sample.flatten().unwrap();
        let keys: Vec<&String> = record.keys().collect();
        assert_eq!(keys, ["name", "count"]);
        assert_eq!(record["count"], json!(3));
    }

    #[test]
    fn flatten_of_a_record_is_identity() {
        let mut record = StructuredRecord::new();
        record.insert("a".to_string(), json!(1));
        record.insert("b".to_string(), json!([1, 2]));
        assert_eq!(record.flatten().unwrap(), record);
    }

    #[test]
    fn flatten_rejects_non_mapping_values() {
        let err = 42u32.flatten().unwrap_err();
        assert!(matches!(err, PersistError::Serialization { .. }));
    }

    #[test]
    fn merge_record_overwrites_and_extends() {
        let mut target = StructuredRecord::new();
        target.insert("a".to_string(), json!(1));
        target.insert("b".to_string(), json!(2));

        let mut incoming = StructuredRecord::new();
        incoming.insert("b".to_string(), json!(3));
        incoming.insert("c".to_string(), json!(4));

        merge_record(&mut target, &incoming);

        assert_eq!(target["a"], json!(1));
        assert_eq!(target["b"], json!(3));
        assert_eq!(target["c"], json!(4));
        assert_eq!(target.len(), 3);
    }

    #[test]
    fn merge_into_overwrites_typed_fields() {
        let mut sample = Sample {
            name: "alpha".to_string(),
            count: 3,
        };
        let mut incoming = StructuredRecord::new();
        incoming.insert("count".to_string(), json!(9));

        merge_into(&mut sample, &incoming).unwrap();

        assert_eq!(sample.name, "alpha");
        assert_eq!(sample.count, 9);
    }

    #[test]
    fn merge_into_rejects_mismatched_types_and_keeps_target() {
        let mut sample = Sample {
            name: "alpha".to_string(),
            count: 3,
        };
        let mut incoming = StructuredRecord::new();
        incoming.insert("count".to_string(), json!("not a number"));

        let err = merge_into(&mut sample, &incoming).unwrap_err();
        assert!(matches!(err, PersistError::Serialization { .. }));
        assert_eq!(sample.count, 3);
    }
}
