//! UI Components
//!
//! Leptos components for the directory page.

mod delete_confirmation;
mod employee_form;
mod employee_table;
mod search_bar;

pub use delete_confirmation::DeleteConfirmation;
pub use employee_form::EmployeeForm;
pub use employee_table::EmployeeTable;
pub use search_bar::SearchBar;
