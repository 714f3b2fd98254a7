//! EmployeeManager - dialog/form controller
//!
//! Owns the store, the table view and the dialog state, and applies
//! [`Action`]s one at a time.
//!
//! # Action Flow
//!
//! ```text
//! dispatch(action)
//!     ├─ 1. Apply the transition (form, delete confirmation or table)
//!     ├─ 2. Submit: validate draft → store add/update → notify
//!     ├─ 3. Re-apply pending post-insert navigation
//!     └─ 4. Return Outcome
//! ```

mod action;
mod dialog;

pub use action::{Action, Outcome};
pub use dialog::{Dialog, FormMode};

use crate::core::Config;
use crate::form::{EmployeeDraft, Field, FieldErrors, validate};
use crate::notify::{EMPLOYEE_ADDED, EMPLOYEE_DELETED, EMPLOYEE_UPDATED, Notifier, ToastQueue};
use crate::store::EmployeeStore;
use crate::table::{
    History, MemoryHistory, PageIndicator, PageLimit, SortKey, TableView, visible_pages,
};
use serde_json::json;
use shared::PaginatedResponse;
use shared::message::NotificationPayload;
use shared::models::{Employee, EmployeeId};
use std::time::Duration;

/// Employee manager
pub struct EmployeeManager<H: History = MemoryHistory, N: Notifier = ToastQueue> {
    store: EmployeeStore,
    view: TableView,
    form: FormMode,
    draft: EmployeeDraft,
    errors: FieldErrors,
    /// Awaiting confirmation; independent of the form
    pending_delete: Option<EmployeeId>,
    history: H,
    notifier: N,
}

impl<H: History, N: Notifier> std::fmt::Debug for EmployeeManager<H, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeManager")
            .field("employees", &self.store.len())
            .field("view", &self.view)
            .field("form", &self.form)
            .field("pending_delete", &self.pending_delete)
            .field("location", &self.history.location())
            .finish()
    }
}

impl EmployeeManager {
    /// In-memory history starting at the configured location, toasts with the
    /// configured lifetime
    pub fn new(config: &Config) -> Self {
        Self::with_parts(
            MemoryHistory::new(config.location.clone()),
            ToastQueue::new(Duration::from_millis(config.toast_ttl_ms)),
        )
    }
}

impl<H: History, N: Notifier> EmployeeManager<H, N> {
    /// Initial page/limit are read from the history's current location
    pub fn with_parts(history: H, notifier: N) -> Self {
        let view = TableView::from_location(history.location());
        tracing::debug!(
            location = history.location(),
            page = view.page(),
            limit = view.limit().get(),
            "employee manager initialised"
        );
        Self {
            store: EmployeeStore::new(),
            view,
            form: FormMode::Closed,
            draft: EmployeeDraft::default(),
            errors: FieldErrors::new(),
            pending_delete: None,
            history,
            notifier,
        }
    }

    /// Apply one action to completion
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::OpenAdd => self.open_add(),
            Action::OpenEdit(id) => self.open_edit(id),
            Action::FieldChanged(field, value) => self.change_field(field, value),
            Action::Submit => self.submit(),
            Action::CloseForm => self.close_form(),
            Action::RequestDelete(id) => self.request_delete(id),
            Action::ConfirmDelete => self.confirm_delete(),
            Action::CancelDelete => self.cancel_delete(),
            Action::Escape => self.escape(),
            Action::ToggleSort(key) => {
                self.view.toggle_sort(key);
                Outcome::Applied
            }
            Action::SetPage(page) => {
                self.view.set_page(page, &mut self.history);
                Outcome::Applied
            }
            Action::SetLimit(limit) => {
                self.view.set_limit(limit, &mut self.history);
                Outcome::Applied
            }
        };

        self.view.follow_reveal(self.store.all(), &mut self.history);
        outcome
    }

    // ========== Form ==========

    fn open_add(&mut self) -> Outcome {
        self.draft = EmployeeDraft::default();
        self.errors.clear();
        self.form = FormMode::Adding;
        Outcome::Applied
    }

    fn open_edit(&mut self, id: EmployeeId) -> Outcome {
        let Some(employee) = self.store.find_by_id(id) else {
            tracing::debug!(id, "edit requested for unknown employee");
            return Outcome::Ignored;
        };
        self.draft = EmployeeDraft::from(employee);
        self.errors.clear();
        self.form = FormMode::Editing(id);
        Outcome::Applied
    }

    fn change_field(&mut self, field: Field, value: String) -> Outcome {
        if !self.form.is_open() {
            return Outcome::Ignored;
        }
        self.draft.apply(field, value);
        self.errors.remove(field);
        Outcome::Applied
    }

    fn submit(&mut self) -> Outcome {
        let mode = self.form;
        if !mode.is_open() {
            return Outcome::Ignored;
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            tracing::debug!(error = %errors.clone().into_error(), "submit blocked by validation");
            self.errors = errors.clone();
            return Outcome::Rejected(errors);
        }

        let outcome = match mode {
            FormMode::Adding => {
                let data = match self.draft.to_create() {
                    Ok(data) => data,
                    Err(err) => return self.reject(err),
                };
                let id = self.store.add(data);
                tracing::info!(id, "employee created");
                self.view.reveal(id);
                self.notify_success(EMPLOYEE_ADDED, id);
                Outcome::Added(id)
            }
            FormMode::Editing(id) => {
                let data = match self.draft.to_update() {
                    Ok(data) => data,
                    Err(err) => return self.reject(err),
                };
                if let Err(err) = self.store.update(id, data) {
                    tracing::debug!(id, error = %err, "edited employee no longer exists");
                    return Outcome::Ignored;
                }
                tracing::info!(id, "employee updated");
                self.notify_success(EMPLOYEE_UPDATED, id);
                Outcome::Updated(id)
            }
            FormMode::Closed => return Outcome::Ignored,
        };

        self.reset_form();
        outcome
    }

    /// Draft passed validation yet did not convert; surface it on the date field
    fn reject(&mut self, err: shared::AppError) -> Outcome {
        tracing::warn!(error = %err, "draft could not be converted");
        self.errors.insert(Field::DateOfBirth, err.message);
        Outcome::Rejected(self.errors.clone())
    }

    fn notify_success(&mut self, message: &str, id: EmployeeId) {
        let payload = NotificationPayload::success("Success", message).with_data(json!({ "id": id }));
        self.notifier.notify(payload);
    }

    fn close_form(&mut self) -> Outcome {
        if !self.form.is_open() {
            return Outcome::Ignored;
        }
        self.reset_form();
        Outcome::Cancelled
    }

    fn reset_form(&mut self) {
        self.form = FormMode::Closed;
        self.draft = EmployeeDraft::default();
        self.errors.clear();
    }

    // ========== Delete ==========

    fn request_delete(&mut self, id: EmployeeId) -> Outcome {
        if !self.store.contains(id) {
            tracing::debug!(id, "delete requested for unknown employee");
            return Outcome::Ignored;
        }
        self.pending_delete = Some(id);
        Outcome::Applied
    }

    fn confirm_delete(&mut self) -> Outcome {
        let Some(id) = self.pending_delete.take() else {
            return Outcome::Ignored;
        };
        if !self.store.remove(id) {
            tracing::debug!(id, "employee already removed");
            return Outcome::Ignored;
        }
        tracing::info!(id, "employee deleted");
        if self.form.editing_id() == Some(id) {
            self.reset_form();
        }
        self.notify_success(EMPLOYEE_DELETED, id);
        Outcome::Deleted(id)
    }

    fn cancel_delete(&mut self) -> Outcome {
        match self.pending_delete.take() {
            Some(_) => Outcome::Cancelled,
            None => Outcome::Ignored,
        }
    }

    fn escape(&mut self) -> Outcome {
        match self.active_dialog() {
            Some(Dialog::ConfirmDelete(_)) => self.cancel_delete(),
            Some(Dialog::Form(_)) => self.close_form(),
            None => Outcome::Ignored,
        }
    }

    // ========== Snapshot ==========

    /// Topmost open dialog
    pub fn active_dialog(&self) -> Option<Dialog> {
        match (self.pending_delete, self.form) {
            (Some(id), _) => Some(Dialog::ConfirmDelete(id)),
            (None, FormMode::Closed) => None,
            (None, mode) => Some(Dialog::Form(mode)),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        self.store.all()
    }

    pub fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.store.find_by_id(id)
    }

    pub fn total(&self) -> usize {
        self.store.len()
    }

    /// Visible page in display order
    pub fn page(&self) -> PaginatedResponse<&Employee> {
        self.view.paginate(self.store.all())
    }

    pub fn page_indicators(&self) -> Vec<PageIndicator> {
        let page = self.page();
        visible_pages(page.page, page.total_pages)
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn sort_direction(&self, key: SortKey) -> Option<bool> {
        self.view.sort_direction(key)
    }

    pub fn limit(&self) -> PageLimit {
        self.view.limit()
    }

    pub fn form(&self) -> FormMode {
        self.form
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn pending_delete(&self) -> Option<EmployeeId> {
        self.pending_delete
    }

    pub fn location(&self) -> &str {
        self.history.location()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

#[cfg(test)]
mod tests;
