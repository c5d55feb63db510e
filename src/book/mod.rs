//! The name-keyed contact collection.

mod address_book;
mod pages;

pub use address_book::AddressBook;
pub use pages::Pages;
