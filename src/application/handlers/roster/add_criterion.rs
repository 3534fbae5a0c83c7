//! AddCriterionHandler - Command handler for adding criteria.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CriterionId, DomainError};
use crate::domain::roster::Criterion;
use crate::ports::AssessmentStore;

/// Command to append a criterion.
///
/// A fresh id is generated when `id` is `None`.
#[derive(Debug, Clone)]
pub struct AddCriterionCommand {
    pub id: Option<CriterionId>,
    pub name: String,
    pub description: String,
}

/// Handler for adding criteria.
///
/// New criteria start unweighted until the next solve.
pub struct AddCriterionHandler {
    store: Arc<dyn AssessmentStore>,
}

impl AddCriterionHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: AddCriterionCommand) -> Result<Criterion, DomainError> {
        let id = cmd.id.unwrap_or_else(CriterionId::generate);
        let criterion = Criterion::new(id, cmd.name, cmd.description)?;
        self.store.insert_criterion(criterion.clone())?;

        info!(criterion_id = %criterion.id, name = %criterion.name, "Added criterion");
        Ok(criterion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentStore;
    use crate::domain::foundation::ErrorCode;

    fn command(id: Option<&str>, name: &str) -> AddCriterionCommand {
        AddCriterionCommand {
            id: id.map(|id| CriterionId::new(id).unwrap()),
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn add_criterion_appends_in_order() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let handler = AddCriterionHandler::new(store.clone());

        handler.handle(command(None, "Olahraga")).unwrap();
        handler.handle(command(None, "Teknologi")).unwrap();

        let names: Vec<_> = store.list_criteria().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Olahraga", "Teknologi"]);
    }

    #[test]
    fn add_criterion_keeps_explicit_id() {
        let handler = AddCriterionHandler::new(Arc::new(InMemoryAssessmentStore::new()));
        let criterion = handler.handle(command(Some("6"), "Analitis")).unwrap();
        assert_eq!(criterion.id.as_str(), "6");
        assert!(!criterion.is_weighted());
    }

    #[test]
    fn add_criterion_rejects_duplicate_id() {
        let handler = AddCriterionHandler::new(Arc::new(InMemoryAssessmentStore::new()));
        handler.handle(command(Some("6"), "Analitis")).unwrap();

        let err = handler.handle(command(Some("6"), "Olahraga")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
