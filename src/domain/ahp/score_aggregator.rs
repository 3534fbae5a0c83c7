//! Score Aggregator - Weighted composite scores per student.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::{CriterionId, RawScore, StudentId};
use crate::domain::roster::{Criterion, ScoreEntry};

/// One criterion's contribution to a student's composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedDetail {
    pub criterion_id: CriterionId,
    pub name: String,
    pub raw_score: RawScore,
    pub weight: f64,
    /// `raw_score / 100 * weight`
    pub weighted_score: f64,
}

impl WeightedDetail {
    /// Computes the weighted contribution of a raw score.
    pub fn new(criterion: &Criterion, raw_score: RawScore) -> Self {
        let weight = criterion.weight_or_zero();
        Self {
            criterion_id: criterion.id.clone(),
            name: criterion.name.clone(),
            raw_score,
            weight,
            weighted_score: raw_score.as_fraction() * weight,
        }
    }
}

/// Composite score and breakdown for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAggregate {
    pub student_id: StudentId,
    pub composite_score: f64,
    pub details: Vec<WeightedDetail>,
}

/// Combines raw scores with solved criterion weights.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Aggregates every student that appears in `scores`.
    ///
    /// # Algorithm
    /// For each student, for each criterion in list order:
    /// `weighted = raw / 100 * weight`, composite = Σ weighted.
    ///
    /// # Edge Cases
    /// - Missing score for a criterion: treated as 0
    /// - Unweighted criterion: weight treated as 0
    /// - Duplicate entries for a student/criterion pair: the first one wins
    /// - Entries for criteria not in `criteria`: ignored
    /// - Students appear in order of their first entry
    pub fn aggregate(criteria: &[Criterion], scores: &[ScoreEntry]) -> Vec<StudentAggregate> {
        let mut student_order: Vec<&StudentId> = Vec::new();
        let mut seen: HashSet<&StudentId> = HashSet::new();
        let mut lookup: HashMap<(&StudentId, &CriterionId), RawScore> = HashMap::new();

        for entry in scores {
            if seen.insert(&entry.student_id) {
                student_order.push(&entry.student_id);
            }
            lookup
                .entry((&entry.student_id, &entry.criterion_id))
                .or_insert(entry.score);
        }

        student_order
            .into_iter()
            .map(|student_id| {
                let details: Vec<WeightedDetail> = criteria
                    .iter()
                    .map(|criterion| {
                        let raw = lookup
                            .get(&(student_id, &criterion.id))
                            .copied()
                            .unwrap_or(RawScore::ZERO);
                        WeightedDetail::new(criterion, raw)
                    })
                    .collect();

                StudentAggregate {
                    student_id: student_id.clone(),
                    composite_score: Self::composite(&details),
                    details,
                }
            })
            .collect()
    }

    /// Sums weighted scores in list order.
    pub fn composite(details: &[WeightedDetail]) -> f64 {
        details.iter().fold(0.0, |sum, d| sum + d.weighted_score)
    }
}
