//! Record Store
//!
//! Owns the authoritative employee list and mirrors it into a single
//! storage slot after every mutation.

use log::{debug, info, warn};

use super::seed::seed_employees;
use super::KeyValueStorage;
use crate::config::StoreConfig;
use crate::domain::{Employee, EmployeeDraft, EmployeeId, StorageError};

/// Employee list backed by a key-value slot
///
/// Storage is best effort: a failed read falls back to the seed set and a
/// failed write is logged, while the in-memory list stays authoritative.
#[derive(Debug)]
pub struct RecordStore<S: KeyValueStorage> {
    storage: S,
    config: StoreConfig,
    records: Vec<Employee>,
    /// Next id to hand out; always greater than every id in `records`.
    /// `None` once the sequence has run past `u64::MAX`.
    next_id: Option<u64>,
}

impl<S: KeyValueStorage> RecordStore<S> {
    /// Load the persisted list, or the seed set when the slot is absent,
    /// unreadable or malformed. The loaded list is written back once.
    pub fn load(storage: S, config: StoreConfig) -> Self {
        let records = match read_records(&storage, &config.storage_key) {
            Ok(Some(records)) => {
                info!("[STORE] Loaded {} records from '{}'", records.len(), config.storage_key);
                records
            }
            Ok(None) => {
                info!("[STORE] No stored records under '{}', using seed data", config.storage_key);
                seed_employees()
            }
            Err(e) => {
                warn!("[STORE] {}; falling back to seed data", e);
                seed_employees()
            }
        };

        let next_id = next_id_after(&records);
        let store = Self {
            storage,
            config,
            records,
            next_id,
        };
        store.persist();
        store
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a record under a fresh id
    pub fn add(&mut self, draft: EmployeeDraft) -> EmployeeId {
        let id = self.allocate_id();
        self.records.push(Employee::from_draft(id, draft));
        debug!("[STORE] Added employee {}", id);
        self.persist();
        id
    }

    /// Replace the record with `id`, keeping the id. Returns `false` and
    /// changes nothing when no such record exists.
    pub fn update(&mut self, id: EmployeeId, draft: EmployeeDraft) -> bool {
        let Some(slot) = self.records.iter_mut().find(|e| e.id == id) else {
            debug!("[STORE] Update ignored, no employee {}", id);
            return false;
        };
        *slot = Employee::from_draft(id, draft);
        debug!("[STORE] Updated employee {}", id);
        self.persist();
        true
    }

    /// Delete the record with `id`. Returns `false` when no such record exists.
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        let before = self.records.len();
        self.records.retain(|e| e.id != id);
        let removed = self.records.len() != before;
        if removed {
            debug!("[STORE] Removed employee {}", id);
            self.persist();
        } else {
            debug!("[STORE] Remove ignored, no employee {}", id);
        }
        removed
    }

    /// Take the next sequence id, or the lowest free id once the sequence
    /// is exhausted.
    fn allocate_id(&mut self) -> EmployeeId {
        match self.next_id {
            Some(id) => {
                self.next_id = id.checked_add(1);
                EmployeeId(id)
            }
            None => EmployeeId(lowest_free_id(&self.records)),
        }
    }

    /// Write the current list to the slot. An empty list is skipped unless
    /// `persist_empty` is set.
    pub fn persist(&self) {
        if self.records.is_empty() && !self.config.persist_empty {
            debug!("[STORE] List empty, leaving '{}' untouched", self.config.storage_key);
            return;
        }
        if let Err(e) = self.write_records() {
            warn!("[STORE] {}; keeping in-memory records", e);
        }
    }

    fn write_records(&self) -> Result<(), StorageError> {
        let text = serde_json::to_string(&self.records).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.storage.set(&self.config.storage_key, &text)
    }
}

/// `Ok(None)` for an absent slot; malformed JSON is reported as a read error.
fn read_records<S: KeyValueStorage>(storage: &S, key: &str) -> Result<Option<Vec<Employee>>, StorageError> {
    let Some(text) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| StorageError::Read(format!("malformed records under '{}': {}", key, e)))
}

fn next_id_after(records: &[Employee]) -> Option<u64> {
    match records.iter().map(|e| e.id.0).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Smallest id >= 1 not held by any record
fn lowest_free_id(records: &[Employee]) -> u64 {
    let mut ids: Vec<u64> = records.iter().map(|e| e.id.0).collect();
    ids.sort_unstable();
    let mut candidate = 1;
    for id in ids {
        if id == candidate {
            candidate += 1;
        } else if id > candidate {
            break;
        }
    }
    candidate
}
