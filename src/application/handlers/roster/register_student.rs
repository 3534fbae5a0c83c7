//! RegisterStudentHandler - Command handler for adding students.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, StudentId};
use crate::domain::roster::{Student, StudentProfile};
use crate::ports::AssessmentStore;

/// Command to register a student.
#[derive(Debug, Clone)]
pub struct RegisterStudentCommand {
    pub profile: StudentProfile,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterStudentResult {
    pub student: Student,
}

/// Handler for registering students under a generated id.
pub struct RegisterStudentHandler {
    store: Arc<dyn AssessmentStore>,
}

impl RegisterStudentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: RegisterStudentCommand) -> Result<RegisterStudentResult, DomainError> {
        let student = Student::from_profile(StudentId::generate(), cmd.profile)?;
        self.store.insert_student(student.clone())?;

        info!(student_id = %student.id, "Registered student");
        Ok(RegisterStudentResult { student })
    }
}
