use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("contact name is required")]
    EmptyName,
    #[error("invalid phone number (expected 10 digits): {0}")]
    InvalidPhone(String),
    #[error("contact not found: {0}")]
    ContactNotFound(String),
    #[error("phone not found in record: {0}")]
    PhoneNotFound(String),
}

pub type Result<T> = std::result::Result<T, BookError>;
