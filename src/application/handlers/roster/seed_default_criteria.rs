//! SeedDefaultCriteriaHandler - Installs the default criteria set.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::roster::Criterion;
use crate::ports::AssessmentStore;

/// Handler that adds any default criterion whose id is not yet present.
pub struct SeedDefaultCriteriaHandler {
    store: Arc<dyn AssessmentStore>,
}

impl SeedDefaultCriteriaHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    /// Returns the criteria that were added.
    pub fn handle(&self) -> Result<Vec<Criterion>, DomainError> {
        let existing = self.store.list_criteria()?;
        let missing: Vec<Criterion> = Criterion::default_set()
            .into_iter()
            .filter(|d| !existing.iter().any(|c| c.id == d.id))
            .collect();

        for criterion in &missing {
            self.store.insert_criterion(criterion.clone())?;
        }

        info!(added = missing.len(), "Seeded default criteria");
        Ok(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentStore;
    use crate::domain::foundation::CriterionId;

    #[test]
    fn seed_fills_empty_store() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let added = SeedDefaultCriteriaHandler::new(store.clone()).handle().unwrap();

        assert_eq!(added.len(), 5);
        assert_eq!(store.list_criteria().unwrap()[0].name, "Kemampuan Matematika");
    }

    #[test]
    fn seed_is_idempotent() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let handler = SeedDefaultCriteriaHandler::new(store.clone());
        handler.handle().unwrap();

        let added = handler.handle().unwrap();

        assert!(added.is_empty());
        assert_eq!(store.list_criteria().unwrap().len(), 5);
    }

    #[test]
    fn seed_skips_ids_already_taken() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        store
            .insert_criterion(Criterion::new(CriterionId::new("1").unwrap(), "Olahraga", "").unwrap())
            .unwrap();

        let added = SeedDefaultCriteriaHandler::new(store.clone()).handle().unwrap();

        assert_eq!(added.len(), 4);
        assert_eq!(store.list_criteria().unwrap()[0].name, "Olahraga");
    }
}
