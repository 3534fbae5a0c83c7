//! Assessment Store Port - Interface for the records the engine reads.
//!
//! The host decides where students, criteria and scores live. The engine
//! only needs ordered lists and a few cascading mutations.

use crate::domain::foundation::{CriterionId, DomainError, ErrorCode, StudentId};
use crate::domain::roster::{Criterion, ScoreEntry, Student};

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("Criterion not found: {0}")]
    CriterionNotFound(CriterionId),

    #[error("Duplicate {kind} id: {id}")]
    Duplicate { kind: &'static str, id: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::StudentNotFound(_) => ErrorCode::StudentNotFound,
            StoreError::CriterionNotFound(_) => ErrorCode::CriterionNotFound,
            StoreError::Duplicate { .. } => ErrorCode::ValidationFailed,
            StoreError::LockPoisoned => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Consistent view of every record at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentSnapshot {
    pub students: Vec<Student>,
    pub criteria: Vec<Criterion>,
    pub scores: Vec<ScoreEntry>,
}

/// Port for reading and mutating assessment records
///
/// Lists are returned in insertion order; criterion order is the order
/// weights are assigned and details are reported in.
pub trait AssessmentStore: Send + Sync {
    /// Returns all students.
    fn list_students(&self) -> Result<Vec<Student>, StoreError>;

    /// Adds a student.
    ///
    /// # Errors
    /// Returns `Duplicate` if the id is taken.
    fn insert_student(&self, student: Student) -> Result<(), StoreError>;

    /// Replaces the student with the same id.
    fn update_student(&self, student: Student) -> Result<(), StoreError>;

    /// Removes a student and every score recorded for them.
    fn remove_student(&self, id: &StudentId) -> Result<Student, StoreError>;

    /// Returns all criteria in order.
    fn list_criteria(&self) -> Result<Vec<Criterion>, StoreError>;

    /// Appends a criterion.
    ///
    /// # Errors
    /// Returns `Duplicate` if the id is taken.
    fn insert_criterion(&self, criterion: Criterion) -> Result<(), StoreError>;

    /// Replaces the criterion with the same id.
    fn update_criterion(&self, criterion: Criterion) -> Result<(), StoreError>;

    /// Removes a criterion and every score referencing it.
    fn remove_criterion(&self, id: &CriterionId) -> Result<Criterion, StoreError>;

    /// Overwrites every criterion weight at once.
    ///
    /// Criteria listed get the given weight; all others lose theirs. Nothing
    /// changes if any id is unknown.
    fn assign_weights(&self, weights: &[(CriterionId, f64)]) -> Result<(), StoreError>;

    /// Returns all recorded scores.
    fn list_scores(&self) -> Result<Vec<ScoreEntry>, StoreError>;

    /// Replaces scores for the same student/criterion pairs and appends the rest.
    fn upsert_scores(&self, entries: Vec<ScoreEntry>) -> Result<(), StoreError>;

    /// Reads students, criteria and scores together.
    fn snapshot(&self) -> Result<AssessmentSnapshot, StoreError>;
}
