//! Interaction Controller
//!
//! Maps user intents onto the record store, the list settings and the
//! modal workflow.

use log::{debug, warn};

use crate::domain::{DirectoryError, DirectoryResult, Employee, EmployeeDraft, EmployeeId, SortField};
use crate::repository::{KeyValueStorage, RecordStore};
use crate::view::{self, ViewState};

/// Which modal is showing. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Idle,
    /// Add form when `editing` is `None`, edit form otherwise
    FormOpen { editing: Option<EmployeeId> },
    ConfirmingDelete { id: EmployeeId },
}

impl Modal {
    pub fn name(&self) -> &'static str {
        match self {
            Modal::Idle => "idle",
            Modal::FormOpen { .. } => "form open",
            Modal::ConfirmingDelete { .. } => "confirming delete",
        }
    }
}

/// Application state container: records, list settings and modal state
#[derive(Debug)]
pub struct Directory<S: KeyValueStorage> {
    store: RecordStore<S>,
    view: ViewState,
    modal: Modal,
}

impl<S: KeyValueStorage> Directory<S> {
    pub fn new(store: RecordStore<S>) -> Self {
        Self {
            store,
            view: ViewState::default(),
            modal: Modal::Idle,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn records(&self) -> &[Employee] {
        self.store.records()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    /// Rows to display for the current search and sort
    pub fn visible(&self) -> Vec<Employee> {
        view::project(self.store.records(), &self.view)
    }

    pub fn summary(&self) -> String {
        let count = view::filter(self.store.records(), &self.view.search_term).count();
        view::summary(count, &self.view.search_term)
    }

    /// Record being edited, if the edit form is open
    pub fn editing_record(&self) -> Option<&Employee> {
        match self.modal {
            Modal::FormOpen { editing: Some(id) } => self.store.get(id),
            _ => None,
        }
    }

    /// Record awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<&Employee> {
        match self.modal {
            Modal::ConfirmingDelete { id } => self.store.get(id),
            _ => None,
        }
    }

    // ========================
    // List settings
    // ========================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.view.search_term.clear();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.view.sort.toggle(field);
        debug!(
            "[DIRECTORY] Sort by {} {}",
            self.view.sort.field.as_str(),
            self.view.sort.direction.as_str()
        );
    }

    // ========================
    // Modal workflow
    // ========================

    pub fn start_add(&mut self) -> DirectoryResult<()> {
        self.require_idle("start add")?;
        self.modal = Modal::FormOpen { editing: None };
        Ok(())
    }

    pub fn start_edit(&mut self, id: EmployeeId) -> DirectoryResult<()> {
        self.require_idle("start edit")?;
        self.require_record(id)?;
        self.modal = Modal::FormOpen { editing: Some(id) };
        Ok(())
    }

    pub fn close_form(&mut self) -> DirectoryResult<()> {
        self.editing_target("close form")?;
        self.modal = Modal::Idle;
        Ok(())
    }

    /// Save the form: add when creating, replace when editing. Returns the
    /// id of the saved record and closes the form.
    pub fn submit(&mut self, draft: EmployeeDraft) -> DirectoryResult<EmployeeId> {
        let id = match self.editing_target("submit")? {
            None => self.store.add(draft),
            Some(id) => {
                self.store.update(id, draft);
                id
            }
        };
        self.modal = Modal::Idle;
        Ok(id)
    }

    pub fn request_delete(&mut self, id: EmployeeId) -> DirectoryResult<()> {
        self.require_idle("request delete")?;
        self.require_record(id)?;
        self.modal = Modal::ConfirmingDelete { id };
        Ok(())
    }

    /// Remove the pending record. Returns its id.
    pub fn confirm_delete(&mut self) -> DirectoryResult<EmployeeId> {
        let id = self.delete_target("confirm delete")?;
        self.store.remove(id);
        self.modal = Modal::Idle;
        Ok(id)
    }

    pub fn cancel_delete(&mut self) -> DirectoryResult<()> {
        self.delete_target("cancel delete")?;
        self.modal = Modal::Idle;
        Ok(())
    }

    fn require_idle(&self, intent: &'static str) -> DirectoryResult<()> {
        match self.modal {
            Modal::Idle => Ok(()),
            other => Err(self.reject(intent, other)),
        }
    }

    fn editing_target(&self, intent: &'static str) -> DirectoryResult<Option<EmployeeId>> {
        match self.modal {
            Modal::FormOpen { editing } => Ok(editing),
            other => Err(self.reject(intent, other)),
        }
    }

    fn delete_target(&self, intent: &'static str) -> DirectoryResult<EmployeeId> {
        match self.modal {
            Modal::ConfirmingDelete { id } => Ok(id),
            other => Err(self.reject(intent, other)),
        }
    }

    fn require_record(&self, id: EmployeeId) -> DirectoryResult<()> {
        if self.store.get(id).is_some() {
            Ok(())
        } else {
            warn!("[DIRECTORY] No employee {}", id);
            Err(DirectoryError::NotFound(id))
        }
    }

    fn reject(&self, intent: &'static str, state: Modal) -> DirectoryError {
        warn!("[DIRECTORY] Rejected '{}' while {}", intent, state.name());
        DirectoryError::InvalidTransition {
            intent,
            state: state.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::domain::{SortDirection, SortSpec};
    use crate::repository::{seed_employees, MemoryStorage};

    fn directory() -> Directory<MemoryStorage> {
        Directory::new(RecordStore::load(MemoryStorage::new(), StoreConfig::default()))
    }

    fn zoe() -> EmployeeDraft {
        EmployeeDraft::new("Zoe Adams", "Intern", "z@x.com", "000")
    }

    #[test]
    fn test_starts_idle_with_default_view() {
        let dir = directory();
        assert_eq!(dir.modal(), Modal::Idle);
        assert_eq!(dir.view(), &ViewState::default());
        assert_eq!(dir.visible().len(), 6);
    }

    #[test]
    fn test_add_flow() {
        let mut dir = directory();
        dir.start_add().unwrap();
        assert_eq!(dir.modal(), Modal::FormOpen { editing: None });
        assert!(dir.editing_record().is_none());

        let id = dir.submit(zoe()).unwrap();

        assert_eq!(dir.modal(), Modal::Idle);
        assert_eq!(dir.records().len(), 7);
        assert_eq!(dir.store().get(id).unwrap().name, "Zoe Adams");
    }

    #[test]
    fn test_edit_flow_replaces_record() {
        let mut dir = directory();
        dir.start_edit(EmployeeId(2)).unwrap();
        assert_eq!(dir.editing_record().unwrap().name, "Michael Chen");

        let mut draft = dir.editing_record().unwrap().to_draft();
        draft.role = "Director of Product".to_string();
        let id = dir.submit(draft).unwrap();

        assert_eq!(id, EmployeeId(2));
        assert_eq!(dir.modal(), Modal::Idle);
        assert_eq!(dir.records().len(), 6);
        assert_eq!(dir.store().get(id).unwrap().role, "Director of Product");
    }

    #[test]
    fn test_close_form_discards() {
        let mut dir = directory();
        dir.start_edit(EmployeeId(1)).unwrap();
        dir.close_form().unwrap();
        assert_eq!(dir.modal(), Modal::Idle);
        assert_eq!(dir.records(), seed_employees().as_slice());
    }

    #[test]
    fn test_submit_accepts_empty_fields() {
        let mut dir = directory();
        dir.start_add().unwrap();
        let id = dir.submit(EmployeeDraft::default()).unwrap();
        assert_eq!(dir.store().get(id).unwrap().name, "");
    }

    #[test]
    fn test_delete_confirm_and_cancel() {
        let mut dir = directory();
        dir.request_delete(EmployeeId(3)).unwrap();
        assert_eq!(dir.pending_delete().unwrap().name, "Emily Rodriguez");
        dir.cancel_delete().unwrap();
        assert_eq!(dir.records().len(), 6);

        dir.request_delete(EmployeeId(3)).unwrap();
        assert_eq!(dir.confirm_delete().unwrap(), EmployeeId(3));
        assert_eq!(dir.modal(), Modal::Idle);
        assert_eq!(dir.records().len(), 5);
        assert!(dir.store().get(EmployeeId(3)).is_none());
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut dir = directory();
        assert_eq!(dir.start_edit(EmployeeId(99)), Err(DirectoryError::NotFound(EmployeeId(99))));
        assert_eq!(dir.request_delete(EmployeeId(99)), Err(DirectoryError::NotFound(EmployeeId(99))));
        assert_eq!(dir.modal(), Modal::Idle);
    }

    #[test]
    fn test_form_cannot_open_while_delete_pending() {
        let mut dir = directory();
        dir.request_delete(EmployeeId(1)).unwrap();

        assert!(matches!(dir.start_add(), Err(DirectoryError::InvalidTransition { .. })));
        assert!(dir.start_edit(EmployeeId(2)).is_err());
        assert!(dir.submit(zoe()).is_err());
        assert_eq!(dir.modal(), Modal::ConfirmingDelete { id: EmployeeId(1) });
        assert_eq!(dir.records().len(), 6);
    }

    #[test]
    fn test_delete_intents_rejected_while_form_open() {
        let mut dir = directory();
        dir.start_add().unwrap();

        assert_eq!(
            dir.request_delete(EmployeeId(1)),
            Err(DirectoryError::InvalidTransition {
                intent: "request delete",
                state: "form open",
            })
        );
        assert!(dir.confirm_delete().is_err());
        assert!(dir.cancel_delete().is_err());
        assert_eq!(dir.modal(), Modal::FormOpen { editing: None });
    }

    #[test]
    fn test_idle_rejects_close_and_submit() {
        let mut dir = directory();
        assert!(dir.close_form().is_err());
        assert!(dir.submit(zoe()).is_err());
        assert!(dir.confirm_delete().is_err());
        assert_eq!(dir.records().len(), 6);
    }

    #[test]
    fn test_view_intents() {
        let mut dir = directory();
        dir.set_search_term("manager");
        assert_eq!(dir.summary(), "2 employees found matching \"manager\"");
        dir.clear_search();
        assert_eq!(dir.summary(), "6 employees found");

        dir.toggle_sort(SortField::Role);
        dir.toggle_sort(SortField::Role);
        assert_eq!(dir.view().sort, SortSpec::new(SortField::Role, SortDirection::Desc));
    }
}
