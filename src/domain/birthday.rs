//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display/parse format for birthdays: `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// Strict shape check: two-digit day, two-digit month, four-digit year.
// chrono alone would also accept `1.1.2000`.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid date pattern"));

/// A type-safe wrapper for birthdays.
///
/// A birthday is a real calendar date parsed from the strict `DD.MM.YYYY`
/// form. Both the shape and the calendar validity are checked at
/// construction time, so `31.02.2000` is rejected the same way `1.1.2000`
/// is. Years are not range-restricted.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let bday = Birthday::new("05.03.1990").unwrap();
/// assert_eq!(bday.to_string(), "05.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY` exactly (two-digit day and month,
    ///   four-digit year, `.` separators)
    /// - Must be a valid calendar date
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if either check fails.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !DATE_PATTERN.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        use chrono::Datelike;
        self.0.day()
    }

    /// Month of year (1-12).
    pub fn month(&self) -> u32 {
        use chrono::Datelike;
        self.0.month()
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
