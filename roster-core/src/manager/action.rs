use crate::form::{Field, FieldErrors};
use crate::table::{PageLimit, SortKey};
use shared::models::EmployeeId;

/// Everything the shell can ask the manager to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Form ──
    OpenAdd,
    OpenEdit(EmployeeId),
    FieldChanged(Field, String),
    Submit,
    CloseForm,

    // ── Delete confirmation ──
    RequestDelete(EmployeeId),
    ConfirmDelete,
    CancelDelete,

    /// Cancel/close whichever dialog is on top
    Escape,

    // ── Table ──
    ToggleSort(SortKey),
    SetPage(u32),
    SetLimit(PageLimit),
}

/// Result of a dispatched action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed without touching the store
    Applied,
    /// Not applicable in the current state; nothing changed
    Ignored,
    /// Submit blocked by validation
    Rejected(FieldErrors),
    Added(EmployeeId),
    Updated(EmployeeId),
    Deleted(EmployeeId),
    /// A dialog was dismissed
    Cancelled,
}
