//! Roster queries.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::roster::{Criterion, Student};
use crate::ports::AssessmentStore;

/// Handler for listing students in registration order.
pub struct ListStudentsHandler {
    store: Arc<dyn AssessmentStore>,
}

impl ListStudentsHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self) -> Result<Vec<Student>, DomainError> {
        Ok(self.store.list_students()?)
    }
}

/// Handler for listing criteria in evaluation order.
pub struct ListCriteriaHandler {
    store: Arc<dyn AssessmentStore>,
}

impl ListCriteriaHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self) -> Result<Vec<Criterion>, DomainError> {
        Ok(self.store.list_criteria()?)
    }
}
