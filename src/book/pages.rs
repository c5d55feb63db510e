//! Lazy pagination over an address book.

use crate::models::Record;
use std::num::NonZeroUsize;
use std::slice;

/// Iterator over consecutive pages of records.
///
/// Every page holds `page_size` records except possibly the last. The
/// iterator is consumed once; call [`crate::AddressBook::paginate`] again
/// to start over.
#[derive(Debug)]
pub struct Pages<'a> {
    records: slice::Chunks<'a, Record>,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: &'a [Record], page_size: NonZeroUsize) -> Self {
        Self {
            records: records.chunks(page_size.get()),
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|page| page.iter().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}
