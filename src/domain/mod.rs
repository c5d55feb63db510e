//! Domain value objects.
//!
//! The validated fields a contact record is built from. Each value object
//! validates at construction time, so an invalid name, phone or birthday
//! can never be held by a [`crate::models::Record`].

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;

use std::fmt::Display;

/// A validated single-value wrapper.
///
/// Stringifying a field with `Display` produces the textual form of the
/// stored value.
pub trait Field: Display {
    /// The stored value type.
    type Value: ?Sized;

    /// Borrow the stored value.
    fn value(&self) -> &Self::Value;
}
