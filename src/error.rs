//! Error types for the address book.
//!
//! Field validation failures live in [`crate::domain::ValidationError`];
//! this module defines the errors of the layers around it, using
//! `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while saving or loading an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON array of records
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A persisted entry failed field validation
    #[error("Invalid record at index {index}: {source}")]
    Validation {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors reported to the user by the REPL.
///
/// The REPL prints these and keeps running.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command word is not recognised
    #[error("Invalid command. Please try again.")]
    Unknown(String),

    /// Wrong number of arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The named contact does not exist
    #[error("Contact '{0}' does not exist in the address book.")]
    ContactNotFound(String),

    /// Field validation failed
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Saving the address book failed
    #[error("{0}")]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
