//! RemoveStudentHandler - Command handler for deleting students.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, StudentId};
use crate::domain::roster::Student;
use crate::ports::AssessmentStore;

/// Command to delete a student and their scores.
#[derive(Debug, Clone)]
pub struct RemoveStudentCommand {
    pub student_id: StudentId,
}

/// Handler for removing students.
pub struct RemoveStudentHandler {
    store: Arc<dyn AssessmentStore>,
}

impl RemoveStudentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: RemoveStudentCommand) -> Result<Student, DomainError> {
        let removed = self.store.remove_student(&cmd.student_id)?;
        info!(student_id = %removed.id, "Removed student and their scores");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CriterionId, ErrorCode};
    use crate::domain::roster::{Criterion, ScoreEntry};
    use crate::ports::{AssessmentSnapshot, StoreError};

    struct PoisonedStore;

    impl AssessmentStore for PoisonedStore {
        fn list_students(&self) -> Result<Vec<Student>, StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn insert_student(&self, _: Student) -> Result<(), StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn update_student(&self, _: Student) -> Result<(), StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn remove_student(&self, _: &StudentId) -> Result<Student, StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn list_criteria(&self) -> Result<Vec<Criterion>, StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn insert_criterion(&self, _: Criterion) -> Result<(), StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn update_criterion(&self, _: Criterion) -> Result<(), StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn remove_criterion(&self, _: &CriterionId) -> Result<Criterion, StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn assign_weights(&self, _: &[(CriterionId, f64)]) -> Result<(), StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn list_scores(&self) -> Result<Vec<ScoreEntry>, StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn upsert_scores(&self, _: Vec<ScoreEntry>) -> Result<(), StoreError> {
            Err(StoreError::LockPoisoned)
        }
        fn snapshot(&self) -> Result<AssessmentSnapshot, StoreError> {
            Err(StoreError::LockPoisoned)
        }
    }

    #[test]
    fn remove_student_returns_removed_record() {
        let store = Arc::new(crate::adapters::InMemoryAssessmentStore::new());
        let id = StudentId::new("s1").unwrap();
        store.insert_student(Student::new(id.clone(), "Ani").unwrap()).unwrap();
        let handler = RemoveStudentHandler::new(store.clone());

        let removed = handler.handle(RemoveStudentCommand { student_id: id }).unwrap();

        assert_eq!(removed.name, "Ani");
        assert!(store.list_students().unwrap().is_empty());
    }

    #[test]
    fn remove_student_fails_for_unknown_id() {
        let handler = RemoveStudentHandler::new(Arc::new(crate::adapters::InMemoryAssessmentStore::new()));

        let err = handler
            .handle(RemoveStudentCommand {
                student_id: StudentId::new("ghost").unwrap(),
            })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StudentNotFound);
    }

    #[test]
    fn remove_student_surfaces_storage_failure() {
        let handler = RemoveStudentHandler::new(Arc::new(PoisonedStore));

        let err = handler
            .handle(RemoveStudentCommand {
                student_id: StudentId::new("s1").unwrap(),
            })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
