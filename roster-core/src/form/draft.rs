//! Form draft
//!
//! The editable, string-typed copy of an employee that lives only while a
//! dialog is open.

use chrono::NaiveDate;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, Gender};
use shared::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Wire format of a date of birth in the form
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Editable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    DateOfBirth,
    Gender,
    Email,
    Address,
}

impl Field {
    /// Form order (focus cycles through this)
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::DateOfBirth,
        Field::Gender,
        Field::Email,
        Field::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DateOfBirth => "dob",
            Self::Gender => "gender",
            Self::Email => "email",
            Self::Address => "address",
        }
    }

    /// Human label, also used as the prefix of length errors
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::DateOfBirth => "Date of Birth",
            Self::Gender => "Gender",
            Self::Email => "Email",
            Self::Address => "Address",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "dob" | "date_of_birth" => Ok(Self::DateOfBirth),
            "gender" => Ok(Self::Gender),
            "email" => Ok(Self::Email),
            "address" => Ok(Self::Address),
            other => Err(AppError::invalid_request(format!("Unknown field: {other}"))
                .with_detail("field", other)),
        }
    }
}

/// Partial employee under edit
///
/// All text is kept exactly as typed; parsing happens on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    /// `YYYY-MM-DD`, empty when unset
    pub date_of_birth: String,
    /// `None` until the user picks one; committed as Male when adding
    pub gender: Option<Gender>,
    pub email: String,
    pub address: String,
}

impl EmployeeDraft {
    /// Current text of a field
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::DateOfBirth => self.date_of_birth.clone(),
            Field::Gender => self
                .gender
                .map(|g| g.as_str().to_string())
                .unwrap_or_default(),
            Field::Email => self.email.clone(),
            Field::Address => self.address.clone(),
        }
    }

    /// Merge one field. An empty or unknown gender clears the selection.
    pub fn apply(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::DateOfBirth => self.date_of_birth = value,
            Field::Gender => self.gender = value.parse().ok(),
            Field::Email => self.email = value,
            Field::Address => self.address = value,
        }
    }

    /// Parsed date of birth; `None` when blank or malformed
    pub fn parsed_date_of_birth(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_of_birth.trim(), DATE_FORMAT).ok()
    }

    /// Payload for a new record. Expects a validated draft.
    ///
    /// Name and address are stored trimmed; the email is kept as typed since
    /// validation already rejects surrounding whitespace.
    pub fn to_create(&self) -> AppResult<EmployeeCreate> {
        Ok(EmployeeCreate {
            name: self.name.trim().to_string(),
            date_of_birth: self.require_date()?,
            gender: self.gender,
            email: self.email.clone(),
            address: self.address.trim().to_string(),
        })
    }

    /// Full-field merge payload for an existing record. Expects a validated
    /// draft; text is normalised as in [`to_create`](Self::to_create).
    pub fn to_update(&self) -> AppResult<EmployeeUpdate> {
        Ok(EmployeeUpdate {
            name: Some(self.name.trim().to_string()),
            date_of_birth: Some(self.require_date()?),
            gender: self.gender,
            email: Some(self.email.clone()),
            address: Some(self.address.trim().to_string()),
        })
    }

    fn require_date(&self) -> AppResult<NaiveDate> {
        self.parsed_date_of_birth().ok_or_else(|| {
            AppError::invalid_format("Invalid date format")
                .with_detail("field", Field::DateOfBirth.as_str())
                .with_detail("value", self.date_of_birth.clone())
        })
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            date_of_birth: employee.date_of_birth.format(DATE_FORMAT).to_string(),
            gender: Some(employee.gender),
            email: employee.email.clone(),
            address: employee.address.clone(),
        }
    }
}

/// Field → message map; empty means valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Flagged fields in form order
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Fold into a single validation error carrying every message as a detail
    pub fn into_error(self) -> AppError {
        let summary = self
            .0
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join("; ");
        self.0
            .into_iter()
            .fold(AppError::validation(summary), |err, (field, msg)| {
                err.with_detail(field.as_str(), msg)
            })
    }
}
