//! Error codes raised by the roster
//!
//! - 0xxx: request and input errors
//! - 8xxx: employee errors

use std::fmt;

/// Numeric error code, shown as `E0006` in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Input ====================
    /// Form validation failed
    ValidationFailed = 2,
    /// Unknown command, field or sort key
    InvalidRequest = 5,
    /// Text that does not parse (dates, ids, page numbers)
    InvalidFormat = 6,
    /// Well-formed value outside the accepted set
    ValueOutOfRange = 8,

    // ==================== 8xxx: Employee ====================
    /// No record with the given id
    EmployeeNotFound = 8001,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(ErrorCode::InvalidFormat.to_string(), "E0006");
        assert_eq!(ErrorCode::EmployeeNotFound.to_string(), "E8001");
    }
}
