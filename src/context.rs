//! Application Context
//!
//! The directory state container, shared via Leptos Context API.

use leptos::prelude::*;

use directory_core::{Directory, DirectoryResult, Employee, EmployeeDraft, EmployeeId, Modal, SortField, ViewState};

use crate::storage::BrowserStorage;

/// App-wide handle to the directory state
///
/// Every intent is a single update of one signal, so views re-derive from a
/// consistent snapshot.
#[derive(Clone, Copy)]
pub struct AppContext {
    directory: RwSignal<Directory<BrowserStorage>>,
}

impl AppContext {
    pub fn new(directory: Directory<BrowserStorage>) -> Self {
        Self {
            directory: RwSignal::new(directory),
        }
    }

    // ========================
    // Reads
    // ========================

    pub fn modal(&self) -> Modal {
        self.directory.with(|d| d.modal())
    }

    pub fn visible(&self) -> Vec<Employee> {
        self.directory.with(|d| d.visible())
    }

    pub fn view_state(&self) -> ViewState {
        self.directory.with(|d| d.view().clone())
    }

    pub fn summary(&self) -> String {
        self.directory.with(|d| d.summary())
    }

    /// Form prefill: the edited record's fields, or blanks when adding
    pub fn form_draft(&self) -> EmployeeDraft {
        self.directory
            .with(|d| d.editing_record().map(Employee::to_draft))
            .unwrap_or_default()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.modal(), Modal::FormOpen { editing: Some(_) })
    }

    pub fn pending_delete_name(&self) -> Option<String> {
        self.directory.with(|d| d.pending_delete().map(|e| e.name.clone()))
    }

    // ========================
    // Intents
    // ========================

    pub fn set_search_term(&self, term: String) {
        self.directory.update(|d| d.set_search_term(term));
    }

    pub fn toggle_sort(&self, field: SortField) {
        self.directory.update(|d| d.toggle_sort(field));
    }

    pub fn start_add(&self) {
        self.dispatch(|d| d.start_add());
    }

    pub fn start_edit(&self, id: EmployeeId) {
        self.dispatch(|d| d.start_edit(id));
    }

    pub fn close_form(&self) {
        self.dispatch(|d| d.close_form());
    }

    pub fn submit(&self, draft: EmployeeDraft) {
        self.dispatch(|d| d.submit(draft));
    }

    pub fn request_delete(&self, id: EmployeeId) {
        self.dispatch(|d| d.request_delete(id));
    }

    pub fn confirm_delete(&self) {
        self.dispatch(|d| d.confirm_delete());
    }

    pub fn cancel_delete(&self) {
        self.dispatch(|d| d.cancel_delete());
    }

    /// Run a modal intent; rejected intents were already logged by the
    /// controller and leave the state as it was.
    fn dispatch<T>(&self, intent: impl FnOnce(&mut Directory<BrowserStorage>) -> DirectoryResult<T>) {
        if let Some(Err(e)) = self.directory.try_update(intent) {
            log::debug!("[APP] Intent ignored: {}", e);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
