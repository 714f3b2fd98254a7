//! Roster core
//!
//! In-memory employee records with add/edit/delete dialogs, client-side
//! sorting and pagination kept in sync with a location's query string.
//!
//! # Modules
//!
//! - [`store`] - record store (identity + CRUD)
//! - [`form`] - draft model and validation
//! - [`table`] - sort/paginate engine, page indicators, location sync
//! - [`manager`] - dialog/form controller driven by [`Action`]s
//! - [`notify`] - user notifications
//! - [`core`](crate::core) - configuration

pub mod core;
pub mod form;
pub mod manager;
pub mod notify;
pub mod store;
pub mod table;

pub use crate::core::Config;
pub use form::{EmployeeDraft, Field, FieldErrors};
pub use manager::{Action, Dialog, EmployeeManager, FormMode, Outcome};
pub use notify::{Notifier, ToastQueue};
pub use table::{History, MemoryHistory, PageIndicator, PageLimit, SortKey};
