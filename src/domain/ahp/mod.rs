//! AHP Module - Pure domain services for Analytic Hierarchy Process ranking.
//!
//! # Components
//!
//! - `PairwiseMatrixBuilder` - Reciprocal pairwise judgment matrix
//! - `AhpWeightSolver` - Priority weights, λmax, CI and CR
//! - `ScoreAggregator` - Weighted composite score per student
//! - `TalentClassifier` - Dominant criterion to talent label
//! - `Ranking` - Ordering, top-N and dashboard summary
//! - `AhpEngine` - Recompute pipeline tying the above together
//!
//! All functions are pure (no side effects) and stateless. No ports or
//! adapters are needed since there's no I/O.

mod engine;
mod errors;
mod pairwise_matrix;
mod ranking;
mod score_aggregator;
mod talent_classifier;
mod weight_solver;

pub use engine::{AhpEngine, AhpResult, FilteredScores};
pub use errors::{AhpError, ReferenceKind};
pub use pairwise_matrix::{
    PairwiseMatrix, PairwiseMatrixBuilder, MAX_RATIO, MIN_RATIO, RECIPROCITY_TOLERANCE,
};
pub use ranking::{AssessmentSummary, RankedResult, Ranking, TalentCount, DEFAULT_TOP_N};
pub use score_aggregator::{ScoreAggregator, StudentAggregate, WeightedDetail};
pub use talent_classifier::{canonical_talent, TalentClassifier, FALLBACK_TALENT};
pub use weight_solver::{
    random_index, AhpSolution, AhpWeightSolver, CriterionWeight, CONSISTENCY_THRESHOLD,
    MAX_CRITERIA, RANDOM_INDEX,
};
