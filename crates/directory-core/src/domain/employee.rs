//! Employee Entity
//!
//! A single directory record and the form payload used to create or replace it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique record identifier, stored as a plain JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An employee record as persisted and displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl Employee {
    /// Build a record from form data under the given id
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            role: draft.role,
            email: draft.email,
            phone: draft.phone,
        }
    }

    /// Copy the editable fields back out, e.g. to prefill the edit form
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            role: self.role.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Form payload for add and update. Fields are accepted as-is, empty included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
