//! Data models
//!
//! Shared between roster-core and the presentational shell.
//! All IDs are `i64` (snowflake-style, generated by the record store).

pub mod employee;

// Re-exports
pub use employee::*;
