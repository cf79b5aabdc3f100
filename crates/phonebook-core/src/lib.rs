pub mod book;
pub mod domain;
pub mod error;

pub use book::AddressBook;
pub use domain::*;
pub use error::BookError;
