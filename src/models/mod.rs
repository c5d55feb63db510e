//! Data models for the address book.
//!
//! This module contains the contact record and its persisted JSON shape.

pub mod record;

pub use record::{Record, RecordEntry};
