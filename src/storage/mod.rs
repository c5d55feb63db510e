//! Persistence of address book records.
//!
//! Stores exchange [`RecordEntry`] values, the plain JSON shape of a
//! record. Validation back into [`crate::models::Record`] happens in the
//! address book, so every store gets the same load semantics.

mod json_file;

pub use json_file::JsonFileStore;

use crate::error::StorageResult;
use crate::models::RecordEntry;

/// Backing storage for an address book.
///
/// Enables different implementations (JSON file, in-memory for tests).
pub trait RecordStore {
    /// Read every persisted entry, in stored order.
    fn read(&self) -> StorageResult<Vec<RecordEntry>>;

    /// Replace the stored contents with `entries`.
    fn write(&self, entries: &[RecordEntry]) -> StorageResult<()>;
}
