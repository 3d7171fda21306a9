//! Contact Book - a command-line address book with birthday reminders.
//!
//! This library implements an in-memory contact book: validated names,
//! phone numbers, and birthdays, record-level phone mutation, and the
//! upcoming-birthdays query that shifts weekend greeting dates to the
//! following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday) and
//!   domain errors
//! - **models**: The contact record and query result types
//! - **book**: The insertion-ordered, name-keyed address book
//! - **commands**: Input parsing and command handlers
//! - **repl**: The interactive stdin loop
//! - **config**: Configuration management from environment variables
//! - **error**: Application-boundary error types

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, ContactName, DateComputationError, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::{ContactRecord, UpcomingBirthday};
