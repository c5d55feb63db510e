//! Shared fixtures for integration tests.

use address_book::{AddressBook, Record};

/// Create a record with the given phones and optional birthday.
///
/// # Panics
/// Panics if any field is invalid; fixtures are expected to be valid.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = match birthday {
        Some(date) => Record::with_birthday(name, date).expect("fixture birthday is valid"),
        None => Record::new(name),
    };
    for phone in phones {
        record.add_phone(phone).expect("fixture phone is valid");
    }
    record
}

/// The Alice record used throughout the scenarios.
pub fn alice() -> Record {
    sample_record("Alice", &["0501234567"], Some("1990-05-15"))
}

/// A small book: Alice, Bob and Carol, in that order.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(alice());
    book.add_record(sample_record("Bob", &["0671112233", "0939998877"], None));
    book.add_record(sample_record("Carol", &[], Some("2000-02-29")));
    book
}

/// A book of `count` generated contacts named `contact-000`, `contact-001`, ...
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        let phone = format!("{:010}", i);
        book.add_record(sample_record(&format!("contact-{:03}", i), &[phone.as_str()], None));
    }
    book
}

/// (name, sorted phones, birthday) for every record, in iteration order.
#[allow(dead_code)]
pub fn snapshot(book: &AddressBook) -> Vec<(String, Vec<String>, Option<String>)> {
    book.iter()
        .map(|r| {
            let mut phones: Vec<String> =
                r.phones().iter().map(|p| p.as_str().to_string()).collect();
            phones.sort();
            (
                r.name().as_str().to_string(),
                phones,
                r.birthday().map(|b| b.to_string()),
            )
        })
        .collect()
}
