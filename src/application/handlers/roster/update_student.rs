//! UpdateStudentHandler - Command handler for editing student details.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, StudentId};
use crate::domain::roster::{Student, StudentUpdate};
use crate::ports::{AssessmentStore, StoreError};

/// Command to change some of a student's fields.
#[derive(Debug, Clone)]
pub struct UpdateStudentCommand {
    pub student_id: StudentId,
    pub update: StudentUpdate,
}

/// Handler for updating students.
pub struct UpdateStudentHandler {
    store: Arc<dyn AssessmentStore>,
}

impl UpdateStudentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: UpdateStudentCommand) -> Result<Student, DomainError> {
        let mut student = self
            .store
            .list_students()?
            .into_iter()
            .find(|s| s.id == cmd.student_id)
            .ok_or(StoreError::StudentNotFound(cmd.student_id))?;

        student.apply(cmd.update)?;
        self.store.update_student(student.clone())?;

        Ok(student)
    }
}
