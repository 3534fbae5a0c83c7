//! UpdateCriterionHandler - Command handler for renaming criteria.

use std::sync::Arc;

use crate::domain::foundation::{CriterionId, DomainError, ValidationError};
use crate::domain::roster::Criterion;
use crate::ports::{AssessmentStore, StoreError};

/// Command to change a criterion's name or description.
#[derive(Debug, Clone)]
pub struct UpdateCriterionCommand {
    pub criterion_id: CriterionId,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Handler for updating criteria. The solved weight is left as is.
pub struct UpdateCriterionHandler {
    store: Arc<dyn AssessmentStore>,
}

impl UpdateCriterionHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: UpdateCriterionCommand) -> Result<Criterion, DomainError> {
        let mut criterion = self
            .store
            .list_criteria()?
            .into_iter()
            .find(|c| c.id == cmd.criterion_id)
            .ok_or(StoreError::CriterionNotFound(cmd.criterion_id))?;

        if let Some(name) = cmd.name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("name").into());
            }
            criterion.name = name;
        }
        if let Some(description) = cmd.description {
            criterion.description = description;
        }

        self.store.update_criterion(criterion.clone())?;
        Ok(criterion)
    }
}
