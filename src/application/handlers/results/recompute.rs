//! RecomputeHandler - Recomputes AHP results from the current store contents.

use std::sync::Arc;

use crate::domain::ahp::{AhpEngine, AhpResult, AssessmentSummary, RankedResult, Ranking};
use crate::domain::foundation::DomainError;
use crate::ports::{AssessmentSnapshot, AssessmentStore};

/// Query handler behind every results view.
///
/// Each call takes one snapshot, so every student in a batch is scored
/// against the same weights.
pub struct RecomputeHandler {
    store: Arc<dyn AssessmentStore>,
    engine: AhpEngine,
    top_n: usize,
}

impl RecomputeHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, engine: AhpEngine, top_n: usize) -> Self {
        Self { store, engine, top_n }
    }

    /// Results per scored student, in order of first score entry.
    pub fn recompute(&self) -> Result<Vec<AhpResult>, DomainError> {
        let snapshot = self.store.snapshot()?;
        self.evaluate(&snapshot)
    }

    /// Results ordered by composite score, best first.
    pub fn ranking(&self) -> Result<Vec<RankedResult>, DomainError> {
        Ok(Ranking::rank(&self.recompute()?))
    }

    /// Headline figures: counts, the top students and talent distribution.
    pub fn summary(&self) -> Result<AssessmentSummary, DomainError> {
        let snapshot = self.store.snapshot()?;
        let results = self.evaluate(&snapshot)?;
        Ok(AssessmentSummary::build(
            snapshot.students.len(),
            &results,
            self.top_n,
        ))
    }

    fn evaluate(&self, snapshot: &AssessmentSnapshot) -> Result<Vec<AhpResult>, DomainError> {
        Ok(self
            .engine
            .evaluate(&snapshot.students, &snapshot.criteria, &snapshot.scores)?)
    }
}
