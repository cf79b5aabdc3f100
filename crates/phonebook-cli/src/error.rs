use anyhow::Error;
use phonebook_config::ConfigError;
use phonebook_core::BookError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

/// Failure of a single command. Never ends the loop.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid input: {0}")]
    Format(String),
    #[error("contact not found: {0}")]
    ContactNotFound(String),
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("{0}")]
    Unexpected(String),
}

pub type CommandResult = std::result::Result<String, CommandError>;

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::InvalidPhone(raw) => CommandError::Format(raw),
            BookError::ContactNotFound(name) => CommandError::ContactNotFound(name),
            BookError::PhoneNotFound(raw) => CommandError::PhoneNotFound(raw),
            other @ BookError::EmptyName => CommandError::Unexpected(other.to_string()),
        }
    }
}

pub fn user_message(err: &CommandError) -> String {
    match err {
        CommandError::Format(_) => "Give me name and phone please.".to_string(),
        CommandError::ContactNotFound(_) => "There is no contact with this name.".to_string(),
        CommandError::PhoneNotFound(_) => "There is no such phone for this contact.".to_string(),
        CommandError::MissingArgument(_) => "Give me name.".to_string(),
        CommandError::Unexpected(message) => {
            format!("An unexpected error occurred: {}", message)
        }
    }
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if cause.downcast_ref::<ConfigError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}
