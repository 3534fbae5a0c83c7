//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a student.
///
/// Identifiers are opaque strings so hosts can keep whatever keys their
/// storage already uses. New students get a random UUID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Creates a StudentId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("student_id"));
        }
        Ok(Self(id))
    }

    /// Creates a new random StudentId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Unique identifier for an evaluation criterion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionId(String);

impl CriterionId {
    /// Creates a CriterionId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion_id"));
        }
        Ok(Self(id))
    }

    /// Creates a new random CriterionId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CriterionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_id_new_accepts_non_empty() {
        let id = StudentId::new("1").unwrap();
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn student_id_new_rejects_blank() {
        assert!(StudentId::new("").is_err());
        assert!(StudentId::new("   ").is_err());
    }

    #[test]
    fn student_id_generate_is_unique() {
        let a = StudentId::generate();
        let b = StudentId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn student_id_parses_from_str() {
        let id: StudentId = "siswa-7".parse().unwrap();
        assert_eq!(id.to_string(), "siswa-7");
    }

    #[test]
    fn criterion_id_rejects_empty() {
        match CriterionId::new("") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "criterion_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn criterion_id_serializes_transparently() {
        let id = CriterionId::new("math").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"math\"");

        let back: CriterionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
