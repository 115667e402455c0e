//! Employee Directory Core
//!
//! State and data rules for the directory UI: the record store and its
//! storage slot, the filtered/sorted view, and the controller driving the
//! add/edit form and delete confirmation.

pub mod config;
pub mod controller;
pub mod domain;
pub mod repository;
pub mod view;


pub use config::StoreConfig;
pub use controller::{Directory, Modal};
pub use domain::{
    DirectoryError, DirectoryResult, Employee, EmployeeDraft, EmployeeId, SortDirection, SortField, SortSpec,
    StorageError,
};
pub use repository::{KeyValueStorage, MemoryStorage, RecordStore};
pub use view::ViewState;
