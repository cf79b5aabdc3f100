use crate::domain::name::Name;
use crate::domain::phone::Phone;
use crate::error::BookError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn named(raw: &str) -> Result<Self, BookError> {
        Ok(Self::new(Name::new(raw)?))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), BookError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<(), BookError> {
        let index = self.position(raw)?;
        self.phones.remove(index);
        Ok(())
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), BookError> {
        // validate before lookup so a malformed `new` never reports a missing phone
        let replacement = Phone::new(new)?;
        let index = self.position(old)?;
        self.phones[index] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Result<&Phone, BookError> {
        self.phones
            .iter()
            .find(|phone| phone.as_str() == raw)
            .ok_or_else(|| BookError::PhoneNotFound(raw.to_string()))
    }

    pub fn set_phone(&mut self, raw: &str) -> Result<(), BookError> {
        let phone = Phone::new(raw)?;
        self.phones.clear();
        self.phones.push(phone);
        Ok(())
    }

    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position(&self, raw: &str) -> Result<usize, BookError> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == raw)
            .ok_or_else(|| BookError::PhoneNotFound(raw.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )
    }
}
