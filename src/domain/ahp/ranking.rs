//! Ranking - Orders results and summarizes them for display.

use serde::{Deserialize, Serialize};

use super::AhpResult;

/// Number of students the dashboard lists.
pub const DEFAULT_TOP_N: usize = 5;

/// A result with its 1-based position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub rank: usize,
    pub result: AhpResult,
}

/// How many students received a talent label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentCount {
    pub talent: String,
    pub count: usize,
}

/// Ranking functions.
pub struct Ranking;

impl Ranking {
    /// Sorts by composite score, highest first.
    ///
    /// The sort is stable: equal scores keep their input order and still
    /// receive distinct, consecutive ranks.
    pub fn rank(results: &[AhpResult]) -> Vec<RankedResult> {
        let mut sorted: Vec<&AhpResult> = results.iter().collect();
        sorted.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));

        sorted
            .into_iter()
            .enumerate()
            .map(|(index, result)| RankedResult {
                rank: index + 1,
                result: result.clone(),
            })
            .collect()
    }

    /// Returns the `n` highest-ranked results.
    pub fn top(results: &[AhpResult], n: usize) -> Vec<RankedResult> {
        let mut ranked = Self::rank(results);
        ranked.truncate(n);
        ranked
    }

    /// Counts results per talent label, in order of first appearance.
    pub fn talent_distribution(results: &[AhpResult]) -> Vec<TalentCount> {
        let mut counts: Vec<TalentCount> = Vec::new();
        for result in results {
            match counts.iter_mut().find(|c| c.talent == result.talent) {
                Some(existing) => existing.count += 1,
                None => counts.push(TalentCount {
                    talent: result.talent.clone(),
                    count: 1,
                }),
            }
        }
        counts
    }
}

/// Dashboard figures derived from a recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub total_students: usize,
    pub assessed_students: usize,
    pub top_students: Vec<RankedResult>,
    pub talent_distribution: Vec<TalentCount>,
}

impl AssessmentSummary {
    /// Builds the summary for `total_students` registered students.
    pub fn build(total_students: usize, results: &[AhpResult], top_n: usize) -> Self {
        Self {
            total_students,
            assessed_students: results.len(),
            top_students: Ranking::top(results, top_n),
            talent_distribution: Ranking::talent_distribution(results),
        }
    }
}
