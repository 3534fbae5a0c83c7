//! AHP Engine - The full recompute pipeline from records to ranked results.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::{AhpError, ScoreAggregator, TalentClassifier, WeightedDetail};
use crate::domain::foundation::{CriterionId, StudentId};
use crate::domain::roster::{Criterion, ScoreEntry, Student};

/// Final assessment of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpResult {
    pub student_id: StudentId,
    pub student_name: String,
    /// Σ weighted scores, in [0, 1] when weights sum to 1.
    pub composite_score: f64,
    pub talent: String,
    pub details: Vec<WeightedDetail>,
}

/// Score entries split by whether they point at existing records.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredScores {
    pub kept: Vec<ScoreEntry>,
    pub dropped: usize,
}

/// Stateless evaluator combining aggregation and classification.
#[derive(Debug, Clone, Default)]
pub struct AhpEngine {
    classifier: TalentClassifier,
}

impl AhpEngine {
    /// Creates an engine with the given classifier.
    pub fn new(classifier: TalentClassifier) -> Self {
        Self { classifier }
    }

    /// Returns the classifier in use.
    pub fn classifier(&self) -> &TalentClassifier {
        &self.classifier
    }

    /// Drops entries that reference a student or criterion that no longer exists.
    pub fn retain_known(
        students: &[Student],
        criteria: &[Criterion],
        scores: &[ScoreEntry],
    ) -> FilteredScores {
        let student_ids: HashSet<&StudentId> = students.iter().map(|s| &s.id).collect();
        let criterion_ids: HashSet<&CriterionId> = criteria.iter().map(|c| &c.id).collect();

        let kept: Vec<ScoreEntry> = scores
            .iter()
            .filter(|e| student_ids.contains(&e.student_id) && criterion_ids.contains(&e.criterion_id))
            .cloned()
            .collect();
        let dropped = scores.len() - kept.len();

        FilteredScores { kept, dropped }
    }

    /// Recomputes every student's result from scratch.
    ///
    /// # Algorithm
    /// 1. Drop orphaned score entries
    /// 2. Aggregate weighted composites per student
    /// 3. Label each student by their dominant criterion
    ///
    /// # Edge Cases
    /// - Students without any remaining score entry are left out
    /// - No criteria: every entry is orphaned, so the result is empty
    pub fn evaluate(
        &self,
        students: &[Student],
        criteria: &[Criterion],
        scores: &[ScoreEntry],
    ) -> Result<Vec<AhpResult>, AhpError> {
        let filtered = Self::retain_known(students, criteria, scores);
        if filtered.dropped > 0 {
            debug!(dropped = filtered.dropped, "Dropped orphaned score entries");
        }

        let names: HashMap<&StudentId, &str> = students
            .iter()
            .map(|s| (&s.id, s.name.as_str()))
            .collect();

        let results = ScoreAggregator::aggregate(criteria, &filtered.kept)
            .into_iter()
            .map(|aggregate| {
                let talent = self.classifier.classify(&aggregate.details)?;
                let student_name = names
                    .get(&aggregate.student_id)
                    .map(|name| name.to_string())
                    .unwrap_or_default();
                Ok(AhpResult {
                    student_id: aggregate.student_id,
                    student_name,
                    composite_score: aggregate.composite_score,
                    talent,
                    details: aggregate.details,
                })
            })
            .collect::<Result<Vec<_>, AhpError>>()?;

        debug!(
            students = results.len(),
            criteria = criteria.len(),
            "Recomputed AHP results"
        );

        Ok(results)
    }
}
