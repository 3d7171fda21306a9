//! Error types for the contact book application.
//!
//! Domain validation errors live in `crate::domain::errors`; this module
//! defines the application-boundary errors using `thiserror`.

use crate::domain::{DateComputationError, ValidationError};
use thiserror::Error;

/// Errors that can occur while handling a user command.
///
/// The core never catches these; handlers raise them and the REPL turns
/// them into a printable `Error: …` line.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A phone or birthday argument failed its format contract
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A birthday could not be mapped onto the current year
    #[error("{0}")]
    Date(#[from] DateComputationError),

    /// The command was called with too few arguments
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for command handler results.
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
