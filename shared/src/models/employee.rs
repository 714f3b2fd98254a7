//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employee identifier (snowflake-style, see [`crate::util::snowflake_id`])
pub type EmployeeId = i64;

/// 性别
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    /// All selectable values, in display order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Next option in [`Gender::ALL`], wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Other,
            Self::Other => Self::Male,
        }
    }

    /// Previous option in [`Gender::ALL`], wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Male => Self::Other,
            Self::Female => Self::Male,
            Self::Other => Self::Female,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a gender string is not one of the known options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl fmt::Display for UnknownGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gender: {}", self.0)
    }
}

impl std::error::Error for UnknownGender {}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub email: String,
    pub address: String,
}

impl Employee {
    /// Build a record from a create payload, defaulting gender to Male
    pub fn from_create(id: EmployeeId, data: EmployeeCreate) -> Self {
        Self {
            id,
            name: data.name,
            date_of_birth: data.date_of_birth,
            gender: data.gender.unwrap_or_default(),
            email: data.email,
            address: data.address,
        }
    }

    /// Merge the present fields of an update payload. The id never changes.
    pub fn apply(&mut self, data: EmployeeUpdate) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(date_of_birth) = data.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(gender) = data.gender {
            self.gender = gender;
        }
        if let Some(email) = data.email {
            self.email = email;
        }
        if let Some(address) = data.address {
            self.address = address;
        }
    }
}

/// Create employee payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub date_of_birth: NaiveDate,
    /// Defaults to [`Gender::Male`] when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub email: String,
    pub address: String,
}

/// Update employee payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
