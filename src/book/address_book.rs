//! AddressBook: records keyed by name, kept in insertion order.

use super::pages::Pages;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::storage::{JsonFileStore, RecordStore};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io;
use std::num::NonZeroUsize;
use std::path::Path;

/// A collection of contact records keyed by name.
///
/// Iteration, pagination and search all follow insertion order. Re-adding a
/// name replaces the record in place without moving it.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut alice = Record::new("Alice");
/// alice.add_phone("0501234567").unwrap();
/// book.add_record(alice);
///
/// assert!(book.find("Alice").is_some());
/// assert_eq!(book.search("050").len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the book persisted at `path`, or an empty book if the file does
    /// not exist yet.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let mut book = Self::new();
        match book.load(path.as_ref()) {
            Ok(_) => Ok(book),
            Err(StorageError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.as_ref().display(),
                    "No address book file yet, starting empty"
                );
                Ok(book)
            }
            Err(e) => Err(e),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Insert `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&pos) => {
                tracing::debug!(name = %key, "Replacing record");
                Some(std::mem::replace(&mut self.records[pos], record))
            }
            None => {
                tracing::debug!(name = %key, "Adding record");
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    /// Look up a record by name for in-place edits of its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&pos) => Some(&mut self.records[pos]),
            None => None,
        }
    }

    /// Remove the record named `name`.
    ///
    /// Deleting a missing name is not an error. The `None` return is the
    /// advisory callers should surface; a warning is also logged, which the
    /// default `warn` filter shows on stderr.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let Some(pos) = self.index.remove(name) else {
            tracing::warn!("Contact '{}' does not exist in the address book.", name);
            return None;
        };

        let removed = self.records.remove(pos);
        for (offset, record) in self.records[pos..].iter().enumerate() {
            self.index
                .insert(record.name().as_str().to_string(), pos + offset);
        }
        tracing::debug!(name = %name, "Deleted record");
        Some(removed)
    }

    /// Split the records into pages of `page_size`.
    pub fn paginate(&self, page_size: NonZeroUsize) -> Pages<'_> {
        Pages::new(&self.records, page_size)
    }

    /// Records whose name, or any phone, contains `query` (case-sensitive).
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.matches(query)).collect()
    }

    /// Records with a birthday within `within_days` of `today`, soonest first.
    ///
    /// Each record is paired with its days-to-birthday. Ties keep insertion
    /// order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: u32) -> Vec<(&Record, u32)> {
        let mut upcoming: Vec<(&Record, u32)> = self
            .records
            .iter()
            .filter_map(|r| r.days_to_birthday_from(today).map(|days| (r, days)))
            .filter(|&(_, days)| days <= within_days)
            .collect();
        upcoming.sort_by_key(|&(_, days)| days);
        upcoming
    }

    /// Write every record to `store`.
    pub fn save_to(&self, store: &impl RecordStore) -> StorageResult<()> {
        let entries: Vec<_> = self.records.iter().map(Record::to_entry).collect();
        store.write(&entries)?;
        tracing::info!(records = entries.len(), "Address book saved");
        Ok(())
    }

    /// Add every record held by `store`, returning how many were read.
    ///
    /// All entries are validated before any is added: one malformed entry
    /// fails the whole load and leaves the book unchanged.
    pub fn load_from(&mut self, store: &impl RecordStore) -> StorageResult<usize> {
        let records = store
            .read()?
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                Record::try_from(entry).map_err(|source| StorageError::Validation { index, source })
            })
            .collect::<StorageResult<Vec<_>>>()?;

        let count = records.len();
        for record in records {
            self.add_record(record);
        }
        tracing::info!(records = count, "Address book loaded");
        Ok(count)
    }

    /// Overwrite the JSON file at `path` with every record.
    ///
    /// The file is rewritten in place; an interrupted write can leave it
    /// truncated.
    pub fn save(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Add every record from the JSON file at `path`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StorageResult<usize> {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
