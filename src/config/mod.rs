//! Application configuration persistence
//!
//! Provides the live [`AppConfig`] settings value and
//! [`ConfigPersistence`], which binds it to a YAML file on disk. Loading
//! merges the decoded fields back into the bound config in place; the
//! config value itself is never replaced wholesale.

mod persistence;
mod settings;


pub use persistence::ConfigPersistence;
pub use settings::{default_config_path, AppConfig, GeneralConfig, WindowConfig};
