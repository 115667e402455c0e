//! Sort Vocabulary
//!
//! Which column the list is ordered by, and in which direction.

use serde::{Deserialize, Serialize};

use super::Employee;

/// Sortable employee column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Role,
    Email,
    Phone,
}

impl SortField {
    /// All columns in display order
    pub const ALL: [SortField; 4] = [SortField::Name, SortField::Role, SortField::Email, SortField::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Role => "role",
            SortField::Email => "email",
            SortField::Phone => "phone",
        }
    }

    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Role => "Role",
            SortField::Email => "Email",
            SortField::Phone => "Phone",
        }
    }

    /// The field's value on a record
    pub fn value<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            SortField::Name => &employee.name,
            SortField::Role => &employee.role,
            SortField::Email => &employee.email,
            SortField::Phone => &employee.phone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Current ordering of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }
}
