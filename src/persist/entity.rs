//! File-bound entity implementation

use std::path::{Path, PathBuf};

use super::Persistable;
use crate::codec::{self, Format};
use crate::error::Result;
use crate::fsio::{self, Payload};
use crate::record::StructuredRecord;

/// A subject bound to a file path and exactly one serialization format.
///
/// Owns the subject and a [`StructuredRecord`] snapshot of it. The snapshot
/// is replaced wholesale on every save (re-derived from the subject) and on
/// every load (replaced by the decoded document).
#[derive(Debug)]
pub struct FileEntity<S: Persistable> {
    subject: S,
    data: StructuredRecord,
    path: PathBuf,
    format: Format,
}

impl<S: Persistable> FileEntity<S> {
    /// Bind `subject` to `path` with the given format.
    ///
    /// Ensures the parent directory of `path` exists (created recursively)
    /// before any save or load, and derives the initial snapshot.
    pub fn new(subject: S, path: impl Into<PathBuf>, format: Format) -> Result<Self> {
        let path = path.into();
        fsio::ensure_parent_dir(&path)?;
        let data = subject.snapshot()?;
        Ok(Self {
            subject,
            data,
            path,
            format,
        })
    }

    /// Serialize the subject's current state and write it to the bound path.
    ///
    /// Invokes `on_saved_file` only after a successful write. With
    /// [`Format::Toml`] this fails at the encode step, since no TOML
    /// encoder exists.
    pub fn save(&mut self) -> Result<()> {
        self.data = self.subject.snapshot()?;
        let text = codec::encode(&self.data, self.format)?;
        fsio::write(&self.path, &Payload::Text(text))?;
        tracing::debug!(path = %self.path.display(), format = %self.format, "Saved entity state");
        self.subject.on_saved_file();
        Ok(())
    }

    /// Read the bound path, decode it, and replace the snapshot.
    ///
    /// On read or decode failure the snapshot is left unchanged and
    /// `on_loaded_file` is not invoked.
    pub fn load(&mut self) -> Result<()> {
        let text = fsio::read_to_string(&self.path)?;
        let record = codec::decode(&text, self.format)?;
        self.data = record;
        tracing::debug!(path = %self.path.display(), format = %self.format, "Loaded entity state");
        self.subject.on_loaded_file(&self.data)
    }

    /// Current snapshot.
    pub fn data(&self) -> &StructuredRecord {
        &self.data
    }

    /// Bound file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bound serialization format.
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    /// Consume the entity and return the subject.
    pub fn into_subject(self) -> S {
        self.subject
    }
}
