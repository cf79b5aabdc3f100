use crate::domain::Record;
use crate::error::BookError;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // first-insertion order of names
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, BookError> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }
}
