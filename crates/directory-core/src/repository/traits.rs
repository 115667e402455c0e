//! Repository Layer - Storage Trait
//!
//! Abstract key-value slot the record store persists into.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::StorageError;

/// String key-value storage with the shape of the Web Storage API
///
/// Both operations take `&self`; backends that mutate own their interior
/// mutability, as `window.localStorage` does.
pub trait KeyValueStorage {
    /// Read a slot. `Ok(None)` means the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
