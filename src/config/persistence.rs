//! Config-bound persistence entity

use std::path::{Path, PathBuf};

use super::settings::AppConfig;
use crate::codec::Format;
use crate::error::Result;
use crate::persist::{FileEntity, Persistable};
use crate::record::{merge_into, Flatten, StructuredRecord};

/// Binds a live [`AppConfig`] to a YAML file.
///
/// The format is YAML unconditionally; callers do not choose. Saving
/// snapshots the bound config; loading shallow-merges every decoded key
/// back into it through the single merge entry point, overwriting
/// same-named fields and leaving others untouched.
pub struct ConfigPersistence<'a> {
    entity: FileEntity<ConfigBinding<'a>>,
}

struct ConfigBinding<'a> {
    config: &'a mut AppConfig,
}

impl Persistable for ConfigBinding<'_> {
    fn snapshot(&self) -> Result<StructuredRecord> {
        self.config.flatten()
    }

    fn on_saved_file(&mut self) {}

    fn on_loaded_file(&mut self, data: &StructuredRecord) -> Result<()> {
        merge_into(self.config, data)
    }
}

impl<'a> ConfigPersistence<'a> {
    /// Bind `config` to the file at `path`, creating the parent directory
    /// if it is missing.
    pub fn new(path: impl Into<PathBuf>, config: &'a mut AppConfig) -> Result<Self> {
        let entity = FileEntity::new(ConfigBinding { config }, path, Format::Yaml)?;
        Ok(Self { entity })
    }

    /// Write the bound config to disk as YAML.
    pub fn save(&mut self) -> Result<()> {
        self.entity.save()
    }

    /// Reload the file and merge its fields into the bound config.
    ///
    /// On failure at any step the bound config is left unchanged.
    pub fn load(&mut self) -> Result<()> {
        self.entity.load()
    }

    /// Snapshot from the last save or load.
    pub fn data(&self) -> &StructuredRecord {
        self.entity.data()
    }

    /// Bound file path.
    pub fn path(&self) -> &Path {
        self.entity.path()
    }

    /// Bound format (always [`Format::Yaml`]).
    pub fn format(&self) -> Format {
        self.entity.format()
    }
}
