//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

const DEFAULT_BOOK_FILE: &str = "address_book.json";
const DEFAULT_PAGE_SIZE: usize = 5;

/// Configuration for the address book REPL.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file the book is loaded from and saved to
    pub book_path: PathBuf,

    /// Records per page for `show all` (default: 5)
    pub page_size: NonZeroUsize,

    /// Save after every mutating command (default: true)
    pub autosave: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: persistence file (default: `address_book.json`)
    /// - `ADDRESS_BOOK_PAGE_SIZE`: records per page (default: 5)
    /// - `ADDRESS_BOOK_AUTOSAVE`: `true`/`false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a broken one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let book_path = env::var("ADDRESS_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_FILE));

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_page_size("ADDRESS_BOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let autosave = Self::parse_env_bool("ADDRESS_BOOK_AUTOSAVE", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            page_size,
            autosave,
            log_level,
        })
    }

    /// Parse an environment variable as a non-zero page size with a default value.
    fn parse_env_page_size(var_name: &str, default: usize) -> ConfigResult<NonZeroUsize> {
        let value = match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            })?,
            Err(_) => default,
        };

        NonZeroUsize::new(value).ok_or_else(|| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: "Must be greater than 0".to_string(),
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_FILE),
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
            autosave: true,
            log_level: "warn".to_string(),
        }
    }
}
