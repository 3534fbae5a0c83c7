//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod results;
pub mod roster;
pub mod scoring;
pub mod weighting;

pub use results::RecomputeHandler;
pub use roster::{
    AddCriterionCommand, AddCriterionHandler, ListCriteriaHandler, ListStudentsHandler,
    RegisterStudentCommand, RegisterStudentHandler, RegisterStudentResult, RemoveCriterionCommand,
    RemoveCriterionHandler, RemoveStudentCommand, RemoveStudentHandler, SeedDefaultCriteriaHandler,
    UpdateCriterionCommand, UpdateCriterionHandler, UpdateStudentCommand, UpdateStudentHandler,
};
pub use scoring::{SaveScoresCommand, SaveScoresHandler, SaveScoresResult};
pub use weighting::{
    BeginComparisonHandler, ComparisonDraft, SolveWeightsCommand, SolveWeightsHandler,
    SolvedWeights,
};
