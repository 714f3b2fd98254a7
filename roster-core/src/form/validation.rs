//! Draft validation
//!
//! Pure checks of a draft against required-field, format and length rules.
//! Every rule is evaluated; the result maps each failing field to its message.

use super::draft::{DATE_FORMAT, EmployeeDraft, Field, FieldErrors};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

// ── Text length limits ──────────────────────────────────────────────

/// Person names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
        .expect("email pattern is valid")
});

/// Validate against today's local date
pub fn validate(draft: &EmployeeDraft) -> FieldErrors {
    validate_at(draft, shared::util::today())
}

/// Validate with an explicit current date
pub fn validate_at(draft: &EmployeeDraft, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(msg) = validate_required_text(&draft.name, Field::Name, MAX_NAME_LEN) {
        errors.insert(Field::Name, msg);
    }

    if let Err(msg) = validate_date_of_birth(&draft.date_of_birth, today) {
        errors.insert(Field::DateOfBirth, msg);
    }

    let email = validate_required_text(&draft.email, Field::Email, MAX_EMAIL_LEN)
        .and_then(|_| validate_email(&draft.email));
    if let Err(msg) = email {
        errors.insert(Field::Email, msg);
    }

    if let Err(msg) = validate_required_text(&draft.address, Field::Address, MAX_ADDRESS_LEN) {
        errors.insert(Field::Address, msg);
    }

    errors
}

/// Whether `value` looks like `local@domain.tld` with a 2-4 char TLD
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Non-empty after trimming and within the length limit.
fn validate_required_text(value: &str, field: Field, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field.label()));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(format!(
            "{} is too long ({len} chars, max {max_len})",
            field.label()
        ));
    }
    Ok(())
}

/// Matched as typed: surrounding whitespace is a format error
fn validate_email(value: &str) -> Result<(), String> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

fn validate_date_of_birth(value: &str, today: NaiveDate) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Date of Birth is required".to_string());
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| "Invalid date format".to_string())?;
    if date > today {
        return Err("Date of Birth cannot be in the future".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn valid() -> EmployeeDraft {
        EmployeeDraft {
            name: "Nguyen Van A".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            gender: None,
            email: "a@example.com".to_string(),
            address: "Ha Noi".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate_at(&valid(), today()).is_empty());
    }

    #[test]
    fn test_empty_draft_flags_all_required() {
        let errors = validate_at(&EmployeeDraft::default(), today());
        assert_eq!(
            errors.fields(),
            vec![Field::Name, Field::DateOfBirth, Field::Email, Field::Address]
        );
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::DateOfBirth), Some("Date of Birth is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Address), Some("Address is required"));
        assert!(!errors.contains(Field::Gender));
    }

    #[test]
    fn test_only_missing_fields_flagged() {
        let draft = EmployeeDraft {
            email: String::new(),
            address: "   ".to_string(),
            ..valid()
        };
        let errors = validate_at(&draft, today());
        assert_eq!(errors.fields(), vec![Field::Email, Field::Address]);
    }

    #[test]
    fn test_future_date_flagged_regardless_of_other_fields() {
        let draft = EmployeeDraft {
            date_of_birth: "2024-05-21".to_string(),
            ..valid()
        };
        let errors = validate_at(&draft, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::DateOfBirth),
            Some("Date of Birth cannot be in the future")
        );

        let draft = EmployeeDraft {
            date_of_birth: "2030-01-01".to_string(),
            ..EmployeeDraft::default()
        };
        let errors = validate_at(&draft, today());
        assert_eq!(
            errors.get(Field::DateOfBirth),
            Some("Date of Birth cannot be in the future")
        );
    }

    #[test]
    fn test_today_is_not_future() {
        let draft = EmployeeDraft {
            date_of_birth: "2024-05-20".to_string(),
            ..valid()
        };
        assert!(validate_at(&draft, today()).is_empty());
    }

    #[test]
    fn test_malformed_date() {
        let draft = EmployeeDraft {
            date_of_birth: "20/05/1990".to_string(),
            ..valid()
        };
        let errors = validate_at(&draft, today());
        assert_eq!(errors.get(Field::DateOfBirth), Some("Invalid date format"));
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["a@b.co", "first.last@mail.example.com", "x_y-z@host.info"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in ["plain", "a@b", "a@b.c", "a@b.abcde", "a b@c.com", "@b.com"] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }

        let draft = EmployeeDraft {
            email: "not-an-email".to_string(),
            ..valid()
        };
        let errors = validate_at(&draft, today());
        assert_eq!(errors.get(Field::Email), Some("Invalid email format"));
    }

    #[test]
    fn test_padded_email_is_invalid() {
        for padded in [" a@b.com", "a@b.com ", "  a@example.com "] {
            let draft = EmployeeDraft {
                email: padded.to_string(),
                ..valid()
            };
            let errors = validate_at(&draft, today());
            assert_eq!(
                errors.get(Field::Email),
                Some("Invalid email format"),
                "{padded:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_length_limits() {
        let draft = EmployeeDraft {
            name: "x".repeat(MAX_NAME_LEN + 1),
            ..valid()
        };
        let errors = validate_at(&draft, today());
        assert_eq!(
            errors.get(Field::Name),
            Some("Name is too long (201 chars, max 200)")
        );

        let draft = EmployeeDraft {
            name: "\u{1eaf}".repeat(MAX_NAME_LEN),
            ..valid()
        };
        assert!(validate_at(&draft, today()).is_empty());
    }
}
