//! Employee form: draft model and validation

pub mod draft;
pub mod validation;

pub use draft::{EmployeeDraft, Field, FieldErrors};
pub use validation::{validate, validate_at};
