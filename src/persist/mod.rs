//! Persistable entities
//!
//! A [`FileEntity`] binds a subject value to a file path and a single
//! serialization format, and runs the save/load pipelines:
//!
//! - save: re-derive snapshot → encode → write → `on_saved_file`
//! - load: read → decode → replace snapshot → `on_loaded_file`
//!
//! Each pipeline exits at the first failed step; later steps (including the
//! lifecycle hooks) are not reached. The hooks are required by the
//! [`Persistable`] trait, so a subject without them cannot exist.

mod entity;

#[cfg(test)]
mod tests;

pub use entity::FileEntity;

use crate::error::Result;
use crate::record::StructuredRecord;

/// Subject of a [`FileEntity`]: supplies the state snapshot and the
/// lifecycle hooks invoked after a successful save or load.
pub trait Persistable {
    /// Snapshot of the current in-memory state. Re-derived on every save.
    fn snapshot(&self) -> Result<StructuredRecord>;

    /// Called after the encoded snapshot has been written to disk.
    fn on_saved_file(&mut self);

    /// Called after a load has replaced the entity's snapshot with `data`.
    ///
    /// Propagation into shared state may fail (e.g. loaded fields that do
    /// not fit a typed target); the error propagates out of
    /// [`FileEntity::load`].
    fn on_loaded_file(&mut self, data: &StructuredRecord) -> Result<()>;
}
