//! Error types shared by the roster crates
//!
//! - [`ErrorCode`]: numeric code, `E0000` in logs
//! - [`ErrorCategory`]: input vs. employee errors, by code range
//! - [`AppError`]: code + message + structured details
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::out_of_range("Rows per page must be one of 5, 10, 20, 50")
//!     .with_detail("value", 7);
//! assert_eq!(err.code, ErrorCode::ValueOutOfRange);
//! assert_eq!(err.code.to_string(), "E0008");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
