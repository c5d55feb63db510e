//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided phone number is not a string (JSON input only).
    PhoneNotString,

    /// The provided birthday does not parse as `YYYY-MM-DD`.
    InvalidBirthday(String),

    /// An edit referenced a phone number the record does not hold.
    PhoneNotFound(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Invalid phone number format"),
            Self::PhoneNotString => write!(f, "Phone number must be a string"),
            Self::InvalidBirthday(_) => {
                write!(f, "Invalid date format, please use YYYY-MM-DD")
            }
            Self::PhoneNotFound(phone) => write!(f, "Phone number '{}' does not exist.", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
