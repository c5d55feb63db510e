//! Interactive command loop support.
//!
//! [`Command`] turns an input line into a typed command and
//! [`CommandHandler`] runs it against an [`crate::AddressBook`]. Errors come
//! back as [`crate::error::CommandError`] for the loop to print; nothing
//! here reads stdin or writes stdout.

mod command;
mod handler;

pub use command::Command;
pub use handler::{CommandHandler, Outcome};
