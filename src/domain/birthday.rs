//! Birthday value object.

use super::errors::ValidationError;
use super::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format accepted and produced by [`Birthday`].
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile birthday regex")
});

/// A validated calendar date of birth.
///
/// Input must be `YYYY-MM-DD` and name a real calendar date. The value is
/// stored as a [`NaiveDate`], so the textual form is always zero-padded.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-15").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-15");
/// assert!(Birthday::new("1990-02-30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday by parsing `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not in
    /// `YYYY-MM-DD` form or is not a valid calendar date.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        Self::parse(value)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthday(value.to_string()))
    }

    fn parse(value: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_REGEX.is_match(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
    }

    /// Replace the stored date, re-validating the new text.
    ///
    /// On failure the current date is left unchanged.
    pub fn set(&mut self, value: &str) -> Result<(), ValidationError> {
        *self = Self::new(value)?;
        Ok(())
    }

    /// Get the stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month/day in `year`.
    ///
    /// February 29th falls back to February 28th in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The first occurrence on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year >= today {
            return Some(this_year);
        }
        self.occurrence_in(today.year() + 1)
    }

    /// Whole days from `today` until the next occurrence (0 on the day itself).
    pub fn days_until(&self, today: NaiveDate) -> Option<u32> {
        let next = self.next_occurrence(today)?;
        u32::try_from((next - today).num_days()).ok()
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

// Serde support - serialize as YYYY-MM-DD
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(birthday.date(), date(1990, 5, 15));
        assert_eq!(birthday.to_string(), "1990-05-15");
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("15-05-1990").is_err());
        assert!(Birthday::new("1990/05/15").is_err());
        assert!(Birthday::new("1990-5-15").is_err());
        assert!(Birthday::new("1990-05-15T00:00").is_err());
        assert!(Birthday::new(" 1990-05-15").is_err());
        assert!(Birthday::new("1990-13-01").is_err());
        assert!(Birthday::new("1990-02-30").is_err());
        assert!(Birthday::new("1991-02-29").is_err());
        assert!(Birthday::new("1992-02-29").is_ok());
    }

    #[test]
    fn test_birthday_error_message() {
        let err = Birthday::new("tomorrow").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format, please use YYYY-MM-DD");
    }

    #[test]
    fn test_birthday_set_keeps_prior_value_on_failure() {
        let mut birthday = Birthday::new("1990-05-15").unwrap();
        assert!(birthday.set("not a date").is_err());
        assert_eq!(birthday.to_string(), "1990-05-15");

        birthday.set("2001-01-31").unwrap();
        assert_eq!(birthday.to_string(), "2001-01-31");
    }

    #[test]
    fn test_days_until_later_this_year() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(birthday.days_until(date(2026, 5, 10)), Some(5));
    }

    #[test]
    fn test_days_until_today_is_zero() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(birthday.days_until(date(2026, 5, 15)), Some(0));
    }

    #[test]
    fn test_days_until_wraps_to_next_year() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2026, 5, 16)),
            Some(date(2027, 5, 15))
        );
        assert_eq!(birthday.days_until(date(2026, 5, 16)), Some(364));
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        let birthday = Birthday::new("2000-02-29").unwrap();
        assert_eq!(birthday.occurrence_in(2026), Some(date(2026, 2, 28)));
        assert_eq!(birthday.occurrence_in(2028), Some(date(2028, 2, 29)));
        assert_eq!(birthday.days_until(date(2026, 2, 28)), Some(0));
        assert_eq!(
            birthday.next_occurrence(date(2027, 3, 1)),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn test_birthday_serde() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"1990-05-15\"");

        let result: Result<Birthday, _> = serde_json::from_str("\"1990-99-99\"");
        assert!(result.is_err());
    }
}
