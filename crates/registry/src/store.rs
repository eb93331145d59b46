//! Flat-record JSON store backing each collection repository.
//!
//! One [`RecordStore`] owns one file holding a pretty-printed JSON array of
//! flat objects. Reads tolerate absent and corrupt files so a damaged
//! collection degrades to empty instead of wedging every operation on it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the store. Callers degrade these rather than
/// propagating them past the repository layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unreadable store content: {0}")]
    Unreadable(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// File-backed store for one ordered collection of flat records.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection as raw JSON values.
    ///
    /// A missing file is an empty collection, not an error. Content that is
    /// not a JSON array comes back as [`StoreError::Unreadable`].
    pub fn read(&self) -> Result<Vec<serde_json::Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)?;
        let records: Vec<serde_json::Value> =
            serde_json::from_str(&json).map_err(|e| StoreError::Unreadable(e.to_string()))?;

        tracing::debug!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );

        Ok(records)
    }

    /// Overwrite the file with the full collection.
    ///
    /// Serializes everything first, writes to a temp file, then renames over
    /// the target so a failed write never leaves a half-written collection.
    pub fn write<T: Serialize>(&self, records: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "Saved {} records to {}",
            records.len(),
            self.path.display()
        );

        Ok(())
    }
}
