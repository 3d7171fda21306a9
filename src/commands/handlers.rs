//! Command handlers: the bridge between parsed user input and the book.
//!
//! Each handler takes the pre-split arguments and the address book, and
//! returns either a printable response or a typed `CommandError`. Handlers
//! never print; rendering (including the `Error: …` prefix for failures)
//! belongs to the REPL.

use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::ContactRecord;
use chrono::NaiveDate;

/// `add <name> <phone>`: add a contact, or another phone to an existing one.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let name = args.first().ok_or(CommandError::MissingArgument("name"))?;
    let phone = args.get(1).ok_or(CommandError::MissingArgument("phone"))?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    // A new contact is registered before its phone is validated, so a bad
    // phone still leaves the (phoneless) contact in the book.
    book.add_record(ContactRecord::new(name.clone()));
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace a contact's phone number.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let name = args.first().ok_or(CommandError::MissingArgument("name"))?;
    let old_phone = args.get(1).ok_or(CommandError::MissingArgument("old phone"))?;
    let new_phone = args.get(2).ok_or(CommandError::MissingArgument("new phone"))?;

    if let Some(record) = book.find_mut(name) {
        if record.edit_phone(old_phone, new_phone)? {
            return Ok("Phone updated.".to_string());
        }
    }
    Ok("Contact or phone not found.".to_string())
}

/// `phone <name>`: list a contact's phone numbers.
pub fn show_phones(args: &[String], book: &AddressBook) -> CommandResult {
    let name = args.first().ok_or(CommandError::MissingArgument("name"))?;

    match book.find(name) {
        Some(record) => {
            let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
            Ok(phones.join(", "))
        }
        None => Ok("Contact not found.".to_string()),
    }
}

/// `all`: list every contact, one line each, in insertion order.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Address book is empty.".to_string();
    }

    let lines: Vec<String> = book
        .iter()
        .map(|record| {
            let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
            let bday = match record.birthday() {
                Some(birthday) => format!(", birthday: {}", birthday),
                None => String::new(),
            };
            format!("{}: {}{}", record.name(), phones.join(", "), bday)
        })
        .collect();
    lines.join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: set a contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult {
    let name = args.first().ok_or(CommandError::MissingArgument("name"))?;
    let date = args.get(1).ok_or(CommandError::MissingArgument("date"))?;

    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(date)?;
            Ok("Birthday added.".to_string())
        }
        None => Ok("Contact not found.".to_string()),
    }
}

/// `show-birthday <name>`: show a contact's birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult {
    let name = args.first().ok_or(CommandError::MissingArgument("name"))?;

    match book.find(name).and_then(|record| record.birthday()) {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok("Birthday not set or contact not found.".to_string()),
    }
}

/// `birthdays`: greeting dates for the next 7 days, relative to `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult {
    let upcoming = book.upcoming_birthdays(today)?;
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    let lines: Vec<String> = upcoming.iter().map(|entry| entry.to_string()).collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_add_contact_then_update() {
        let mut book = AddressBook::new();

        let response = add_contact(&args(&["John", "1112223333"]), &mut book).unwrap();
        assert_eq!(response, "Contact added.");

        let response = add_contact(&args(&["John", "4445556666"]), &mut book).unwrap();
        assert_eq!(response, "Contact updated.");

        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_missing_args() {
        let mut book = AddressBook::new();

        let err = add_contact(&args(&[]), &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Missing argument: name");

        let err = add_contact(&args(&["John"]), &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Missing argument: phone");
    }

    #[test]
    fn test_add_contact_bad_phone_still_registers_contact() {
        let mut book = AddressBook::new();

        let result = add_contact(&args(&["John", "bad"]), &mut book);
        assert!(result.is_err());

        let record = book.find("John").unwrap();
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_change_contact() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1112223333"]), &mut book).unwrap();

        let response =
            change_contact(&args(&["John", "1112223333", "4445556666"]), &mut book).unwrap();
        assert_eq!(response, "Phone updated.");

        let response =
            change_contact(&args(&["John", "1112223333", "7778889999"]), &mut book).unwrap();
        assert_eq!(response, "Contact or phone not found.");

        let response =
            change_contact(&args(&["Jane", "1112223333", "7778889999"]), &mut book).unwrap();
        assert_eq!(response, "Contact or phone not found.");
    }

    #[test]
    fn test_change_contact_invalid_new_phone_errors() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1112223333"]), &mut book).unwrap();

        let result = change_contact(&args(&["John", "1112223333", "bad"]), &mut book);
        assert!(result.is_err());

        let phones: Vec<&str> = book
            .find("John")
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(phones, vec!["1112223333"]);
    }

    #[test]
    fn test_show_phones() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1112223333"]), &mut book).unwrap();
        add_contact(&args(&["John", "4445556666"]), &mut book).unwrap();

        let response = show_phones(&args(&["John"]), &book).unwrap();
        assert_eq!(response, "1112223333, 4445556666");

        let response = show_phones(&args(&["Jane"]), &book).unwrap();
        assert_eq!(response, "Contact not found.");
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book), "Address book is empty.");

        add_contact(&args(&["John", "1112223333"]), &mut book).unwrap();
        add_contact(&args(&["Jane", "4445556666"]), &mut book).unwrap();
        add_birthday(&args(&["Jane", "15.03.1990"]), &mut book).unwrap();

        let listing = show_all(&book);
        assert_eq!(
            listing,
            "John: 1112223333\nJane: 4445556666, birthday: 15.03.1990"
        );
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1112223333"]), &mut book).unwrap();

        let response = add_birthday(&args(&["John", "15.03.1990"]), &mut book).unwrap();
        assert_eq!(response, "Birthday added.");

        let response = show_birthday(&args(&["John"]), &book).unwrap();
        assert_eq!(response, "15.03.1990");

        let response = add_birthday(&args(&["Jane", "15.03.1990"]), &mut book).unwrap();
        assert_eq!(response, "Contact not found.");

        let response = show_birthday(&args(&["Jane"]), &book).unwrap();
        assert_eq!(response, "Birthday not set or contact not found.");
    }

    #[test]
    fn test_add_birthday_invalid_date_errors() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1112223333"]), &mut book).unwrap();

        let result = add_birthday(&args(&["John", "31.02.2000"]), &mut book);
        assert!(result.is_err());
        assert!(book.find("John").unwrap().birthday().is_none());
    }

    #[test]
    fn test_birthdays_command() {
        let mut book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();

        let response = birthdays(&book, today).unwrap();
        assert_eq!(response, "No upcoming birthdays.");

        add_contact(&args(&["John", "1112223333"]), &mut book).unwrap();
        add_birthday(&args(&["John", "15.03.1990"]), &mut book).unwrap();
        add_contact(&args(&["Sat", "4445556666"]), &mut book).unwrap();
        add_birthday(&args(&["Sat", "16.03.1990"]), &mut book).unwrap();

        let response = birthdays(&book, today).unwrap();
        assert_eq!(response, "John: 15.03.2024\nSat: 18.03.2024");
    }
}
