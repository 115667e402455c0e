//! Domain Layer - Errors
//!
//! Error types shared by the store and the controller.

use thiserror::Error;

use super::EmployeeId;

/// Common result type for controller operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failures of the key-value storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage is missing or disabled (e.g. private browsing)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    /// Records could not be serialized
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Rejected user intents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The intent is not valid from the current modal state
    #[error("cannot {intent} while {state}")]
    InvalidTransition {
        intent: &'static str,
        state: &'static str,
    },
    #[error("employee {0} not found")]
    NotFound(EmployeeId),
}
