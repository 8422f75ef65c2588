//! History record shapes (education, work history, qualification).
//!
//! # Responsibility
//! - Define typed record structs for each repeatable collection.
//! - Expose uniform key-based field access so one collection manager can
//!   drive all shapes through a schema value.
//!
//! # Invariants
//! - `id` is assigned once at staging time and never rewritten.
//! - Required fields are plain `String`s; optional fields are `Option<String>`
//!   and a blank optional value is stored as `None`.
//! - End dates are opaque strings: a `YYYY-MM` month or `ONGOING_END_DATE`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one history record.
pub type EntryId = Uuid;

/// Sentinel stored in end-date fields for activities still in progress.
pub const ONGOING_END_DATE: &str = "現在";

pub const FIELD_SCHOOL_NAME: &str = "schoolName";
pub const FIELD_COMPANY_NAME: &str = "companyName";
pub const FIELD_QUALIFICATION_NAME: &str = "qualificationName";
pub const FIELD_DEPARTMENT: &str = "department";
pub const FIELD_POSITION: &str = "position";
pub const FIELD_START_DATE: &str = "startDate";
pub const FIELD_END_DATE: &str = "endDate";
pub const FIELD_ACQUISITION_DATE: &str = "acquisitionDate";

/// Returns whether an end-date value means "still ongoing".
pub fn is_ongoing(value: &str) -> bool {
    value.trim() == ONGOING_END_DATE
}

/// Key-based field access shared by every history record shape.
pub trait EntryRecord: Clone {
    /// Stable record identifier.
    fn id(&self) -> EntryId;

    /// Returns the current value for `key`, or `None` when the field is
    /// unset or unknown to this shape.
    fn field(&self, key: &str) -> Option<&str>;

    /// Replaces one field value.
    ///
    /// # Errors
    /// - `EntryFieldError::UnknownField` when this shape has no such key.
    fn set_field(&mut self, key: &str, value: String) -> Result<(), EntryFieldError>;
}

/// Field access error for history records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFieldError {
    UnknownField { record: &'static str, key: String },
}

impl Display for EntryFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField { record, key } => {
                write!(f, "unknown field `{key}` for {record} record")
            }
        }
    }
}

impl Error for EntryFieldError {}

fn optional_value(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn unknown_field(record: &'static str, key: &str) -> EntryFieldError {
    EntryFieldError::UnknownField {
        record,
        key: key.to_string(),
    }
}

/// One education history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntryId,
    pub school_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub start_date: String,
    /// `YYYY-MM` or `ONGOING_END_DATE`.
    pub end_date: String,
}

impl Education {
    /// Creates an empty staged entry with the given identifier.
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            school_name: String::new(),
            department: None,
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl EntryRecord for Education {
    fn id(&self) -> EntryId {
        self.id
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            FIELD_SCHOOL_NAME => Some(self.school_name.as_str()),
            FIELD_DEPARTMENT => self.department.as_deref(),
            FIELD_START_DATE => Some(self.start_date.as_str()),
            FIELD_END_DATE => Some(self.end_date.as_str()),
            _ => None,
        }
    }

    fn set_field(&mut self, key: &str, value: String) -> Result<(), EntryFieldError> {
        match key {
            FIELD_SCHOOL_NAME => self.school_name = value,
            FIELD_DEPARTMENT => self.department = optional_value(value),
            FIELD_START_DATE => self.start_date = value,
            FIELD_END_DATE => self.end_date = value,
            other => return Err(unknown_field("education", other)),
        }
        Ok(())
    }
}

/// One work history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHistory {
    pub id: EntryId,
    pub company_name: String,
    pub department: String,
    pub position: String,
    pub start_date: String,
    /// `YYYY-MM` or `ONGOING_END_DATE`.
    pub end_date: String,
}

impl WorkHistory {
    /// Creates an empty staged entry with the given identifier.
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            company_name: String::new(),
            department: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl EntryRecord for WorkHistory {
    fn id(&self) -> EntryId {
        self.id
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            FIELD_COMPANY_NAME => Some(self.company_name.as_str()),
            FIELD_DEPARTMENT => Some(self.department.as_str()),
            FIELD_POSITION => Some(self.position.as_str()),
            FIELD_START_DATE => Some(self.start_date.as_str()),
            FIELD_END_DATE => Some(self.end_date.as_str()),
            _ => None,
        }
    }

    fn set_field(&mut self, key: &str, value: String) -> Result<(), EntryFieldError> {
        match key {
            FIELD_COMPANY_NAME => self.company_name = value,
            FIELD_DEPARTMENT => self.department = value,
            FIELD_POSITION => self.position = value,
            FIELD_START_DATE => self.start_date = value,
            FIELD_END_DATE => self.end_date = value,
            other => return Err(unknown_field("work_history", other)),
        }
        Ok(())
    }
}

/// One qualification or license entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
    pub id: EntryId,
    pub qualification_name: String,
    /// `YYYY-MM`.
    pub acquisition_date: String,
}

impl Qualification {
    /// Creates an empty staged entry with the given identifier.
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            qualification_name: String::new(),
            acquisition_date: String::new(),
        }
    }
}

impl EntryRecord for Qualification {
    fn id(&self) -> EntryId {
        self.id
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            FIELD_QUALIFICATION_NAME => Some(self.qualification_name.as_str()),
            FIELD_ACQUISITION_DATE => Some(self.acquisition_date.as_str()),
            _ => None,
        }
    }

    fn set_field(&mut self, key: &str, value: String) -> Result<(), EntryFieldError> {
        match key {
            FIELD_QUALIFICATION_NAME => self.qualification_name = value,
            FIELD_ACQUISITION_DATE => self.acquisition_date = value,
            other => return Err(unknown_field("qualification", other)),
        }
        Ok(())
    }
}
