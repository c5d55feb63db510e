//! Address Book - a contact book with validated fields and JSON persistence.
//!
//! Contacts are [`Record`]s holding a name, any number of ten-digit phone
//! numbers and an optional birthday. An [`AddressBook`] keys records by
//! name and supports lookup, substring search, pagination and saving to or
//! loading from a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: The contact record and its persisted shape
//! - **book**: The name-keyed collection and its paginator
//! - **storage**: JSON file persistence
//! - **repl**: Command parsing and execution for the interactive binary
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{Record, RecordEntry};
pub use repl::{Command, CommandHandler, Outcome};
pub use storage::{JsonFileStore, RecordStore};
