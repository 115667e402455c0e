//! Store Configuration

use serde::Deserialize;

/// Storage slot used when no configuration is supplied
pub const DEFAULT_STORAGE_KEY: &str = "employees";

/// How the record store talks to its storage slot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key of the single slot holding the JSON record array
    pub storage_key: String,
    /// Write the list even when it is empty. Off by default, so deleting the
    /// last record leaves the previous contents of the slot in place.
    pub persist_empty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_empty: false,
        }
    }
}

impl StoreConfig {
    /// Parse an embedded JSON config; absent fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_persist_empty(mut self, persist_empty: bool) -> Self {
        self.persist_empty = persist_empty;
        self
    }
}
