//! statekeep - file-backed persistence for structured application state
//!
//! This crate provides a thin load/save layer over text serialization
//! formats:
//! - Per-format codecs (JSON, YAML, read-only TOML) speaking one ordered
//!   record shape
//! - Raw file I/O with parent-directory auto-creation
//! - File-bound entities running the save/load pipelines with lifecycle
//!   hooks
//! - Application configuration persistence with in-place field merging
//!
//! All I/O is synchronous and blocking; there is no locking or atomic file
//! replacement, and concurrent writers to the same path race at the
//! filesystem level.

pub mod codec;
pub mod config;
pub mod error;
pub mod fsio;
pub mod persist;
pub mod record;

// Re-export commonly used items
pub use codec::Format;
pub use config::{default_config_path, AppConfig, ConfigPersistence, GeneralConfig, WindowConfig};
pub use error::{PersistError, Result};
pub use fsio::{Payload, ReadMode};
pub use persist::{FileEntity, Persistable};
pub use record::{merge_into, merge_record, Flatten, StructuredRecord};
