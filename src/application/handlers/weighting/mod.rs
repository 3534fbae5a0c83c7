//! Criterion weighting handlers.

mod begin_comparison;
mod solve_weights;

pub use begin_comparison::{BeginComparisonHandler, ComparisonDraft};
pub use solve_weights::{SolveWeightsCommand, SolveWeightsHandler, SolvedWeights};
