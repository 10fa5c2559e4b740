//! Tests for persistable entities

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use super::*;
use crate::codec::Format;
use crate::error::{PersistError, Result};
use crate::record::StructuredRecord;

fn init_logs() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Subject that records hook invocations.
struct RecordingSubject {
    fields: StructuredRecord,
    saved_calls: usize,
    loaded_calls: usize,
    last_loaded: Option<StructuredRecord>,
}

impl RecordingSubject {
    fn new() -> Self {
        let mut fields = StructuredRecord::new();
        fields.insert("name".to_string(), json!("subject"));
        fields.insert("count".to_string(), json!(1));
        Self {
            fields,
            saved_calls: 0,
            loaded_calls: 0,
            last_loaded: None,
        }
    }
}

impl Persistable for RecordingSubject {
    fn snapshot(&self) -> Result<StructuredRecord> {
        Ok(self.fields.clone())
    }

    fn on_saved_file(&mut self) {
        self.saved_calls += 1;
    }

    fn on_loaded_file(&mut self, data: &StructuredRecord) -> Result<()> {
        self.loaded_calls += 1;
        self.last_loaded = Some(data.clone());
        Ok(())
    }
}

/// Subject whose snapshot always fails.
#[derive(Debug)]
struct BrokenSubject;

impl Persistable for BrokenSubject {
    fn snapshot(&self) -> Result<StructuredRecord> {
        Err(PersistError::Serialization {
            format: "structured record",
            reason: "broken on purpose".to_string(),
        })
    }

    fn on_saved_file(&mut self) {
        panic!("hook must not run after a failed snapshot");
    }

    fn on_loaded_file(&mut self, _data: &StructuredRecord) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_construction_creates_missing_parent_dirs() {
    init_logs();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("deep").join("nested").join("state.json");

    let entity = FileEntity::new(RecordingSubject::new(), &path, Format::Json).unwrap();

    assert!(path.parent().unwrap().is_dir());
    assert_eq!(entity.data()["name"], json!("subject"));
}

#[test]
fn test_save_writes_file_and_invokes_hook() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");
    let mut entity = FileEntity::new(RecordingSubject::new(), &path, Format::Json).unwrap();

    entity.save().unwrap();

    assert!(path.is_file());
    assert_eq!(entity.subject().saved_calls, 1);
}

#[test]
fn test_save_twice_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.yaml");
    let mut entity = FileEntity::new(RecordingSubject::new(), &path, Format::Yaml).unwrap();

    entity.save().unwrap();
    let first = fs::read(&path).unwrap();
    entity.save().unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_save_rederives_snapshot_from_subject() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");
    let mut entity = FileEntity::new(RecordingSubject::new(), &path, Format::Json).unwrap();

    entity
        .subject_mut()
        .fields
        .insert("count".to_string(), json!(7));
    entity.save().unwrap();

    assert_eq!(entity.data()["count"], json!(7));
    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("\"count\": 7"));
}

#[test]
fn test_save_toml_fails_before_write_and_hook() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.toml");
    let mut entity = FileEntity::new(RecordingSubject::new(), &path, Format::Toml).unwrap();

    let err = entity.save().unwrap_err();

    assert!(err.is_not_implemented());
    assert!(!path.exists(), "no file may be written after a failed encode");
    assert_eq!(entity.subject().saved_calls, 0);
}

#[test]
fn test_construction_surfaces_snapshot_failure() {
    // Construction derives the initial snapshot, so a broken subject fails
    // here rather than at the first save.
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");

    let err = FileEntity::new(BrokenSubject, &path, Format::Json).unwrap_err();

    assert!(matches!(err, PersistError::Serialization { .. }));
}

#[test]
fn test_load_replaces_snapshot_and_invokes_hook() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");
    fs::write(&path, "{\"count\": 42}").unwrap();

    let mut entity = FileEntity::new(RecordingSubject::new(), &path, Format::Json).unwrap();
    entity.load().unwrap();

    assert_eq!(entity.data().len(), 1);
    assert_eq!(entity.data()["count"], json!(42));
    assert_eq!(entity.subject().loaded_calls, 1);
    assert_eq!(
        entity.subject().last_loaded.as_ref().unwrap()["count"],
        json!(42)
    );
}

#[test]
fn test_load_missing_file_leaves_data_and_skips_hook() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");
    let mut entity = FileEntity::new(RecordingSubject::new(), &path, Format::Json).unwrap();
    let before = entity.data().clone();

    let err = entity.load().unwrap_err();

    assert!(err.is_io());
    assert_eq!(entity.data(), &before);
    assert_eq!(entity.subject().loaded_calls, 0);
}

#[test]
fn test_load_malformed_file_leaves_data_and_skips_hook() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");
    fs::write(&path, "{ definitely not json").unwrap();

    let mut entity = FileEntity::new(RecordingSubject::new(), &path, Format::Json).unwrap();
    let before = entity.data().clone();

    let err = entity.load().unwrap_err();

    assert!(matches!(err, PersistError::Parse { .. }));
    assert_eq!(entity.data(), &before);
    assert_eq!(entity.subject().loaded_calls, 0);
}

#[test]
fn test_save_then_load_round_trips_through_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.yaml");
    let mut entity = FileEntity::new(RecordingSubject::new(), &path, Format::Yaml).unwrap();

    entity.save().unwrap();
    let saved = entity.data().clone();
    entity.load().unwrap();

    assert_eq!(entity.data(), &saved);
    assert_eq!(entity.subject().saved_calls, 1);
    assert_eq!(entity.subject().loaded_calls, 1);
}
