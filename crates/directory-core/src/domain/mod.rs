//! Domain Layer
//!
//! Employee records, sort vocabulary and error types.
//! No storage or UI dependencies live here.

mod employee;
mod error;
mod sort;

pub use employee::{Employee, EmployeeDraft, EmployeeId};
pub use error::{DirectoryError, DirectoryResult, StorageError};
pub use sort::{SortDirection, SortField, SortSpec};
