//! AppError

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Coded error with a user-facing message and optional structured details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Context for logs (field name, offending value, record id)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Constructors ====================

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValueOutOfRange, msg)
    }

    pub fn employee_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
            .with_detail("id", id)
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_accumulate() {
        let err = AppError::invalid_format("Invalid date format")
            .with_detail("field", "date_of_birth")
            .with_detail("value", "03/12/1988");

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.to_string(), "Invalid date format");
        let details = err.details.unwrap();
        assert_eq!(details["field"], "date_of_birth");
        assert_eq!(details["value"], "03/12/1988");
    }

    #[test]
    fn test_employee_not_found() {
        let err = AppError::employee_not_found(42);
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, "Employee 42 not found");
        assert_eq!(err.details.unwrap()["id"], 42);
    }
}
