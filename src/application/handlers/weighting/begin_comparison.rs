//! BeginComparisonHandler - Starts a pairwise comparison over the current criteria.

use std::sync::Arc;

use crate::domain::ahp::{AhpError, PairwiseMatrixBuilder, MAX_CRITERIA};
use crate::domain::foundation::DomainError;
use crate::domain::roster::Criterion;
use crate::ports::AssessmentStore;

/// An all-equal comparison matrix and the criteria its rows refer to.
#[derive(Debug, Clone)]
pub struct ComparisonDraft {
    pub criteria: Vec<Criterion>,
    pub builder: PairwiseMatrixBuilder,
}

/// Handler that sizes a matrix builder to the stored criteria.
pub struct BeginComparisonHandler {
    store: Arc<dyn AssessmentStore>,
}

impl BeginComparisonHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self) -> Result<ComparisonDraft, DomainError> {
        let criteria = self.store.list_criteria()?;
        match criteria.len() {
            0 => return Err(AhpError::invalid_matrix("no criteria to compare").into()),
            n if n > MAX_CRITERIA => {
                return Err(AhpError::UnsupportedSize {
                    size: n,
                    max: MAX_CRITERIA,
                }
                .into())
            }
            _ => {}
        }

        let builder = PairwiseMatrixBuilder::initialize(criteria.len());
        Ok(ComparisonDraft { criteria, builder })
    }
}
