//! In-memory storage backend, used by tests and native hosts.

use std::cell::RefCell;
use std::collections::HashMap;

use super::KeyValueStorage;
use crate::domain::StorageError;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. with data from a previous session
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.slots.borrow_mut().insert(key.into(), value.into());
        storage
    }

    /// Raw slot contents
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
