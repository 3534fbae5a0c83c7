//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the store; query handlers recompute from it.

pub mod handlers;
mod service;

pub use handlers::{
    // Roster handlers
    AddCriterionCommand, AddCriterionHandler, ListCriteriaHandler, ListStudentsHandler,
    RegisterStudentCommand, RegisterStudentHandler, RegisterStudentResult, RemoveCriterionCommand,
    RemoveCriterionHandler, RemoveStudentCommand, RemoveStudentHandler, SeedDefaultCriteriaHandler,
    UpdateCriterionCommand, UpdateCriterionHandler, UpdateStudentCommand, UpdateStudentHandler,
    // Weighting handlers
    BeginComparisonHandler, ComparisonDraft, SolveWeightsCommand, SolveWeightsHandler,
    SolvedWeights,
    // Scoring and results
    RecomputeHandler, SaveScoresCommand, SaveScoresHandler, SaveScoresResult,
};
pub use service::AssessmentService;
