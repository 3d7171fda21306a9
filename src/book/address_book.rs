//! Name-keyed, insertion-ordered collection of contact records.

use crate::domain::DateComputationError;
use crate::models::{ContactRecord, UpcomingBirthday};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashMap;

/// Inclusive width of the upcoming-birthdays window, in days from today.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// The address book: a mapping from contact name to record.
///
/// At most one record exists per name; inserting under an existing name
/// replaces the whole record (last-write-wins, never a merge). Iteration
/// follows insertion order, and an overwritten name keeps its original
/// position. The internal table is never exposed; all access goes through
/// the methods below.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert `record` under its name, replacing any existing record with
    /// the same name.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().as_str().to_string();
        if !self.records.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.records.insert(name, record);
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Exact-match lookup by name, for in-place record mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Compute which contacts should be greeted within the next week.
    ///
    /// For every record with a birthday set, the birthday's month/day is
    /// mapped onto `today`'s year; the record is included when that date
    /// falls inside `[today, today + 7]` (both ends inclusive, plain
    /// calendar comparison). A Saturday or Sunday greeting date is shifted
    /// forward to the following Monday; weekdays are reported unchanged.
    /// Entries come back in the book's insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DateComputationError` when a birthday's month/day does not
    /// exist in `today`'s year (a Feb 29 birthday in a non-leap year). The
    /// error fires before the window check, so such a record poisons the
    /// whole query regardless of season.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<UpcomingBirthday>, DateComputationError> {
        let window_end = today + Duration::days(UPCOMING_WINDOW_DAYS);
        let mut upcoming = Vec::new();

        for record in self.iter() {
            if let Some(birthday) = record.birthday() {
                let bday_this_year =
                    NaiveDate::from_ymd_opt(today.year(), birthday.month(), birthday.day())
                        .ok_or(DateComputationError::NonexistentInYear {
                            day: birthday.day(),
                            month: birthday.month(),
                            year: today.year(),
                        })?;

                if today <= bday_this_year && bday_this_year <= window_end {
                    let greeting_date = match bday_this_year.weekday() {
                        Weekday::Sat => bday_this_year + Duration::days(2),
                        Weekday::Sun => bday_this_year + Duration::days(1),
                        _ => bday_this_year,
                    };

                    upcoming.push(UpcomingBirthday {
                        name: record.name().as_str().to_string(),
                        greeting_date,
                    });
                }
            }
        }

        Ok(upcoming)
    }
}
