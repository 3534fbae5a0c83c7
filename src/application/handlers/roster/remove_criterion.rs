//! RemoveCriterionHandler - Command handler for deleting criteria.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CriterionId, DomainError};
use crate::domain::roster::Criterion;
use crate::ports::AssessmentStore;

/// Command to delete a criterion and every score against it.
#[derive(Debug, Clone)]
pub struct RemoveCriterionCommand {
    pub criterion_id: CriterionId,
}

/// Handler for removing criteria.
///
/// Remaining weights are not renormalized; the criterion just drops out of
/// later sums until weights are solved again.
pub struct RemoveCriterionHandler {
    store: Arc<dyn AssessmentStore>,
}

impl RemoveCriterionHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: RemoveCriterionCommand) -> Result<Criterion, DomainError> {
        let removed = self.store.remove_criterion(&cmd.criterion_id)?;
        info!(criterion_id = %removed.id, "Removed criterion and its scores");
        Ok(removed)
    }
}
