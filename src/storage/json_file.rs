//! JSON file store.

use super::RecordStore;
use crate::error::StorageResult;
use crate::models::RecordEntry;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Stores records as a single JSON array in one file.
///
/// Writes truncate and rewrite the file in place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn read(&self) -> StorageResult<Vec<RecordEntry>> {
        let file = File::open(&self.path)?;
        let entries: Vec<RecordEntry> = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Read address book file"
        );
        Ok(entries)
    }

    fn write(&self, entries: &[RecordEntry]) -> StorageResult<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, entries)?;
        writer.flush()?;
        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Wrote address book file"
        );
        Ok(())
    }
}
