//! Error category by code range

use super::codes::ErrorCode;

/// Which part of the roster an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input errors (0xxx)
    Input,
    /// Employee errors (8xxx)
    Employee,
}

impl ErrorCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Employee => "employee",
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            8000..9000 => ErrorCategory::Employee,
            _ => ErrorCategory::Input,
        }
    }
}
