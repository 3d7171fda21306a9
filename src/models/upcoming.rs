//! Upcoming-birthday query result entry.

use crate::domain::DATE_FORMAT;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// One entry returned by the upcoming-birthdays query: who to greet and on
/// which date.
///
/// The greeting date is the birthday mapped onto the current year, already
/// shifted off weekends, so it may differ from the actual anniversary by a
/// day or two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// The contact's name, verbatim.
    pub name: String,

    /// The (possibly shifted) date on which to congratulate.
    #[serde(serialize_with = "serialize_greeting_date")]
    pub greeting_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The greeting date formatted as `DD.MM.YYYY`.
    pub fn greeting_date_string(&self) -> String {
        self.greeting_date.format(DATE_FORMAT).to_string()
    }
}

fn serialize_greeting_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    date.format(DATE_FORMAT).to_string().serialize(serializer)
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.greeting_date_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_date_string() {
        let entry = UpcomingBirthday {
            name: "John".to_string(),
            greeting_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };
        assert_eq!(entry.greeting_date_string(), "15.03.2024");
    }

    #[test]
    fn test_display() {
        let entry = UpcomingBirthday {
            name: "John".to_string(),
            greeting_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };
        assert_eq!(entry.to_string(), "John: 02.01.2024");
    }

    #[test]
    fn test_serialization_uses_display_format() {
        let entry = UpcomingBirthday {
            name: "John".to_string(),
            greeting_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"John","greeting_date":"15.03.2024"}"#);
    }
}
