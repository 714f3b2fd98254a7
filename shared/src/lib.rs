//! Shared types for the roster workspace
//!
//! Common types used by both the core and the presentational shell:
//! the employee record model, error types, notification payloads,
//! the pagination response and id/time utilities.

pub mod error;
pub mod message;
pub mod models;
pub mod pagination;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use message::{NotificationCategory, NotificationLevel, NotificationPayload};
pub use models::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate, Gender};
pub use pagination::PaginatedResponse;
