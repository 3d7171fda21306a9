//! Contact record model: one named entry in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A single contact: a name, zero or more phone numbers, and an optional
/// birthday.
///
/// The name is set at creation and never changes. Phones form an ordered
/// sequence in which duplicates may coexist; the birthday is absent until
/// explicitly set and may be overwritten afterwards. All mutation goes
/// through methods so every stored value has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a new record with the given name, no phones, and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The phone sequence, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `phone` and append it to the phone sequence.
    ///
    /// Duplicate values are allowed to coexist.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not a valid
    /// phone number; the record is unchanged in that case.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone entry whose value equals `phone`.
    ///
    /// A no-op if nothing matches.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone entry equal to `old` with a freshly
    /// validated `new`.
    ///
    /// Returns `Ok(true)` on success and `Ok(false)` if no entry matches
    /// `old`. Validation of `new` happens before anything is touched, so a
    /// failed edit leaves the sequence exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is not a valid
    /// phone number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let new = PhoneNumber::new(new)?;

        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(index) => {
                self.phones[index] = new;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Validate `date` and store it as the birthday, overwriting any
    /// previously stored one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `date` is not a valid
    /// `DD.MM.YYYY` calendar date; the record is unchanged in that case.
    pub fn set_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(date)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}
