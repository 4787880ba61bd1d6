//! Core data types: the validated fields and the contact [`Record`].
//!
//! Every field is a constructor-validated value type. `Name::new`,
//! `Phone::new` and `Birthday::new` are the only way to obtain one, and
//! deserialization goes through the same constructors, so a value held in
//! memory or read back from disk has always passed validation.

use crate::error::{AddrBookError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The one date format used to validate, store, render and compute birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// Validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Name is empty or whitespace only
    EmptyName,
    /// Phone is not exactly ten ASCII digits
    InvalidPhone(String),
    /// Birthday is not a real date written as YYYY-MM-DD
    InvalidBirthday(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::EmptyName => write!(f, "Contact name cannot be empty"),
            FieldError::InvalidPhone(value) => {
                write!(f, "Invalid phone number format: {}", value)
            }
            FieldError::InvalidBirthday(value) => {
                write!(f, "Invalid birthday format: {}. Use YYYY-MM-DD.", value)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Serialize as the canonical string, deserialize back through `new`.
macro_rules! string_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                $ty::new(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A contact name. Used as the store key, so it must not be blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Surrounding whitespace is dropped; anything else is kept as typed.
    pub fn new(raw: &str) -> std::result::Result<Self, FieldError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FieldError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

string_serde!(Name);

/// A phone number: exactly ten ASCII decimal digits, stored as typed.
///
/// ```
/// use addrbook::model::Phone;
///
/// assert_eq!(Phone::new("5551234567").unwrap().as_str(), "5551234567");
/// assert!(Phone::new("555-123-4567").is_err());
/// assert!(Phone::new("555123456").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> std::result::Result<Self, FieldError> {
        if !Self::is_valid(raw) {
            return Err(FieldError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

string_serde!(Phone);

/// A birthday written as `YYYY-MM-DD`.
///
/// The input must be exactly the canonical rendering of the date it parses
/// to, so `2020-1-5` is rejected and the stored text always round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> std::result::Result<Self, FieldError> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.format(BIRTHDAY_FORMAT).to_string() == raw)
            .map(Self)
            .ok_or_else(|| FieldError::InvalidBirthday(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` until the next occurrence of this month/day.
    ///
    /// Today counts as day 0. A Feb 29 birthday is celebrated on Feb 28 in
    /// non-leap years.
    pub fn days_until_next(&self, today: NaiveDate) -> Option<i64> {
        let this_year = self.occurrence_in(today.year())?;
        let next = if this_year < today {
            self.occurrence_in(today.year() + 1)?
        } else {
            this_year
        };
        Some((next - today).num_days())
    }

    fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

string_serde!(Birthday);

/// One contact: an immutable name, an ordered list of unique phones and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default, deserialize_with = "unique_phones")]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

/// Reads a phone list, keeping the first copy of any repeated number.
fn unique_phones<'de, D>(deserializer: D) -> std::result::Result<Vec<Phone>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Vec::<Phone>::deserialize(deserializer)?;
    let mut phones: Vec<Phone> = Vec::with_capacity(stored.len());
    for phone in stored {
        if !phones.contains(&phone) {
            phones.push(phone);
        }
    }
    Ok(phones)
}

impl Record {
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: birthday.map(Birthday::new).transpose()?,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Adding a number the record already has is a no-op.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::new(raw)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Removes every phone equal to `value`; absent values are ignored.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|phone| phone.as_str() != value);
    }

    /// Replaces `old` with `new`, keeping its position in the list.
    ///
    /// `new` is validated before anything is looked up. If `new` is already
    /// present elsewhere, `old` is dropped instead so numbers stay unique.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = Phone::new(new)?;
        let position = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| AddrBookError::PhoneNotFound(old.to_string()))?;

        if old == new {
            return Ok(());
        }
        if self.phones.contains(&replacement) {
            self.phones.remove(position);
        } else {
            self.phones[position] = replacement;
        }
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until_next(today)
    }

    /// Phones joined by `"; "` in insertion order.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Case-insensitive substring match on the name, or plain substring
    /// match on any phone.
    pub fn matches(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.name.as_str().to_lowercase().contains(&query_lower)
            || self.phones.iter().any(|phone| phone.as_str().contains(query))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phone_list()
        )
    }
}
