//! Student record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StudentId, ValidationError};

/// A student who can be assessed against the criteria.
///
/// Only the id and name take part in ranking; the remaining fields are
/// carried for the host's records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub class_name: String,
    /// National student number.
    pub nisn: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
}

impl Student {
    /// Creates a student with just an id and a name.
    pub fn new(id: StudentId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            class_name: String::new(),
            nisn: String::new(),
            email: String::new(),
            birth_date: None,
        })
    }

    /// Creates a student from a profile, assigning the given id.
    pub fn from_profile(id: StudentId, profile: StudentProfile) -> Result<Self, ValidationError> {
        let mut student = Self::new(id, profile.name)?;
        student.class_name = profile.class_name;
        student.nisn = profile.nisn;
        student.email = profile.email;
        student.birth_date = profile.birth_date;
        Ok(student)
    }

    /// Applies a partial update. Fields left as `None` are unchanged.
    pub fn apply(&mut self, update: StudentUpdate) -> Result<(), ValidationError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
            self.name = name;
        }
        if let Some(class_name) = update.class_name {
            self.class_name = class_name;
        }
        if let Some(nisn) = update.nisn {
            self.nisn = nisn;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(birth_date) = update.birth_date {
            self.birth_date = birth_date;
        }
        Ok(())
    }
}

/// Student fields supplied by the host when registering a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub nisn: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl StudentProfile {
    /// Creates a profile with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Partial update of a student record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub nisn: Option<String>,
    pub email: Option<String>,
    /// `None` leaves the date alone; `Some(None)` clears it.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<Option<NaiveDate>>,
}

/// Maps a present field (including `null`) to `Some`, so an absent field
/// stays distinguishable from an explicit `null`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
