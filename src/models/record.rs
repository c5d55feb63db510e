//! Record model: one contact's name, phones and optional birthday.

use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// repeat; every stored phone has passed [`Phone`] validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// Persisted JSON shape of a [`Record`].
///
/// `{"name": "...", "phones": ["..."], "birthday": "YYYY-MM-DD" | null}`
///
/// Phones are kept as raw JSON values so that a non-string phone is reported
/// as a validation failure rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordEntry {
    /// Contact name
    pub name: String,

    /// Phone numbers, in insertion order
    pub phones: Vec<serde_json::Value>,

    /// Birthday as `YYYY-MM-DD`, or null. The key itself is required.
    #[serde(deserialize_with = "deserialize_required_birthday")]
    pub birthday: Option<String>,
}

/// Deserialize a nullable birthday without serde's implicit `None` for a
/// missing key.
fn deserialize_required_birthday<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with a birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `birthday` is not a
    /// valid `YYYY-MM-DD` date.
    pub fn with_birthday(name: impl Into<Name>, birthday: &str) -> Result<Self, ValidationError> {
        let birthday = Birthday::new(birthday)?;
        Ok(Self {
            birthday: Some(birthday),
            ..Self::new(name)
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The stored phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Replace the birthday. The current birthday is kept on failure.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        tracing::debug!(name = %self.name, birthday = %birthday, "Birthday set");
        Ok(())
    }

    /// Validate and append a phone.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone is not ten digits.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Removing an absent phone is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace `old` with `new`.
    ///
    /// All copies of `old` are removed and `new` is appended. Both arguments
    /// are checked before anything changes, so a failed edit leaves the
    /// record as it was.
    ///
    /// # Errors
    ///
    /// - `ValidationError::PhoneNotFound` if the record has no phone `old`.
    /// - `ValidationError::InvalidPhone` if `new` is not ten digits.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if self.find_phone(old).is_none() {
            return Err(ValidationError::PhoneNotFound(old.to_string()));
        }
        let new = Phone::new(new)?;

        self.remove_phone(old);
        tracing::debug!(name = %self.name, old = %old, new = %new, "Phone edited");
        self.phones.push(new);
        Ok(())
    }

    /// The first stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Days from the local current date to the next birthday.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<u32> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` to the next birthday (0 when it is today).
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<u32> {
        self.birthday.as_ref()?.days_until(today)
    }

    /// Whether the name or any phone contains `query` (case-sensitive).
    pub fn matches(&self, query: &str) -> bool {
        self.name.value().contains(query) || self.phones.iter().any(|p| p.value().contains(query))
    }

    /// Build the persisted shape of this record.
    pub fn to_entry(&self) -> RecordEntry {
        RecordEntry {
            name: self.name.as_str().to_string(),
            phones: self
                .phones
                .iter()
                .map(|p| serde_json::Value::String(p.as_str().to_string()))
                .collect(),
            birthday: self.birthday.map(|b| b.to_string()),
        }
    }
}

impl TryFrom<RecordEntry> for Record {
    type Error = ValidationError;

    /// Rebuild a record from its persisted shape, validating every field.
    ///
    /// An empty birthday string is treated the same as `null`.
    fn try_from(entry: RecordEntry) -> Result<Self, Self::Error> {
        let mut record = match entry.birthday.as_deref() {
            Some(birthday) if !birthday.is_empty() => {
                Record::with_birthday(entry.name, birthday)?
            }
            _ => Record::new(entry.name),
        };

        for value in &entry.phones {
            record.phones.push(Phone::from_json(value)?);
        }

        Ok(record)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alice() -> Record {
        let mut record = Record::with_birthday("Alice", "1990-05-15").unwrap();
        record.add_phone("0501234567").unwrap();
        record
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("Bob");
        assert_eq!(record.name().as_str(), "Bob");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_with_invalid_birthday_fails() {
        let err = Record::with_birthday("Bob", "15.05.1990").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidBirthday(_)));
    }

    #[test]
    fn test_record_summary() {
        assert_eq!(
            alice().to_string(),
            "Contact name: Alice, phones: 0501234567, birthday: 1990-05-15"
        );
    }

    #[test]
    fn test_record_summary_without_birthday() {
        let mut record = Record::new("Bob");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Bob, phones: 1111111111; 2222222222, birthday: N/A"
        );
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = alice();
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err.to_string(), "Invalid phone number format");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = alice();
        record.add_phone("0501234567").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_removes_all_copies() {
        let mut record = alice();
        record.add_phone("0671112233").unwrap();
        record.add_phone("0501234567").unwrap();

        record.remove_phone("0501234567");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "0671112233");

        // absent phone is a no-op
        record.remove_phone("9999999999");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut record = alice();
        record.add_phone("0671112233").unwrap();

        record.edit_phone("0501234567", "0939998877").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0671112233", "0939998877"]);
    }

    #[test]
    fn test_edit_missing_phone_fails() {
        let mut record = alice();
        let err = record.edit_phone("1111111111", "2222222222").unwrap_err();
        assert_eq!(err.to_string(), "Phone number '1111111111' does not exist.");
        assert_eq!(record, alice());
    }

    #[test]
    fn test_edit_phone_to_invalid_leaves_record_unchanged() {
        let mut record = alice();
        let err = record.edit_phone("0501234567", "bad").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhone(_)));
        assert_eq!(record, alice());
    }

    #[test]
    fn test_find_phone() {
        let record = alice();
        assert_eq!(
            record.find_phone("0501234567").map(Phone::as_str),
            Some("0501234567")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_set_birthday_keeps_old_value_on_failure() {
        let mut record = alice();
        assert!(record.set_birthday("1990-02-31").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "1990-05-15");

        record.set_birthday("1991-06-01").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "1991-06-01");
    }

    #[test]
    fn test_days_to_birthday() {
        let record = alice();
        assert_eq!(record.days_to_birthday_from(date(2026, 5, 14)), Some(1));
        assert_eq!(record.days_to_birthday_from(date(2026, 5, 15)), Some(0));
        assert_eq!(record.days_to_birthday_from(date(2026, 12, 31)), Some(135));
        assert!(Record::new("Bob").days_to_birthday().is_none());
    }

    #[test]
    fn test_days_to_birthday_is_bounded() {
        let days = alice().days_to_birthday().unwrap();
        assert!(days <= 366);
    }

    #[test]
    fn test_matches() {
        let record = alice();
        assert!(record.matches("Ali"));
        assert!(record.matches("050"));
        assert!(record.matches("4567"));
        assert!(!record.matches("alice"));
        assert!(!record.matches("Bob"));
    }

    #[test]
    fn test_to_entry() {
        let entry = alice().to_entry();
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"name": "Alice", "phones": ["0501234567"], "birthday": "1990-05-15"})
        );

        let entry = Record::new("Bob").to_entry();
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"name": "Bob", "phones": [], "birthday": null})
        );
    }

    #[test]
    fn test_try_from_entry() {
        let entry: RecordEntry = serde_json::from_value(
            json!({"name": "Alice", "phones": ["0501234567"], "birthday": "1990-05-15"}),
        )
        .unwrap();
        assert_eq!(Record::try_from(entry).unwrap(), alice());
    }

    #[test]
    fn test_try_from_entry_empty_birthday_is_absent() {
        let entry = RecordEntry {
            name: "Bob".to_string(),
            phones: vec![],
            birthday: Some(String::new()),
        };
        assert!(Record::try_from(entry).unwrap().birthday().is_none());
    }

    #[test]
    fn test_try_from_entry_rejects_bad_fields() {
        let entry = RecordEntry {
            name: "Bob".to_string(),
            phones: vec![json!(1234567890)],
            birthday: None,
        };
        assert_eq!(
            Record::try_from(entry).unwrap_err(),
            ValidationError::PhoneNotString
        );

        let entry = RecordEntry {
            name: "Bob".to_string(),
            phones: vec![],
            birthday: Some("yesterday".to_string()),
        };
        assert!(matches!(
            Record::try_from(entry).unwrap_err(),
            ValidationError::InvalidBirthday(_)
        ));
    }

    #[test]
    fn test_entry_requires_birthday_key() {
        let result: Result<RecordEntry, _> =
            serde_json::from_value(json!({"name": "Alice", "phones": ["0501234567"]}));
        assert!(result.is_err());

        let entry: RecordEntry =
            serde_json::from_value(json!({"name": "Alice", "phones": [], "birthday": null}))
                .unwrap();
        assert!(entry.birthday.is_none());
    }

    #[test]
    fn test_entry_rejects_unknown_fields() {
        let result: Result<RecordEntry, _> = serde_json::from_value(
            json!({"name": "Bob", "phones": [], "birthday": null, "email": "b@x.io"}),
        );
        assert!(result.is_err());
    }
}
