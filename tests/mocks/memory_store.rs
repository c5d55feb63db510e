use address_book::error::StorageResult;
use address_book::{RecordEntry, RecordStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory record store for testing.
///
/// Holds entries in memory and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    entries: Arc<Mutex<Vec<RecordEntry>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw entries.
    pub fn with_entries(entries: Vec<RecordEntry>) -> Self {
        let store = Self::new();
        *store.entries.lock().unwrap() = entries;
        store
    }

    /// Snapshot of the stored entries.
    pub fn entries(&self) -> Vec<RecordEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RecordStore for MemoryRecordStore {
    fn read(&self) -> StorageResult<Vec<RecordEntry>> {
        self.track_call("read");
        Ok(self.entries())
    }

    fn write(&self, entries: &[RecordEntry]) -> StorageResult<()> {
        self.track_call("write");
        *self.entries.lock().unwrap() = entries.to_vec();
        Ok(())
    }
}
