//! AssessmentService - One entry point over every handler.
//!
//! Hosts that do not want to wire handlers themselves construct a service
//! from a store and an [`AppConfig`] and call `recompute()` whenever inputs
//! change.

use std::sync::Arc;

use crate::adapters::InMemoryAssessmentStore;
use crate::config::AppConfig;
use crate::domain::ahp::{AhpEngine, AhpResult, AssessmentSummary, PairwiseMatrix, RankedResult};
use crate::domain::foundation::{CriterionId, DomainError, StudentId};
use crate::domain::roster::{Criterion, Student, StudentProfile, StudentUpdate};
use crate::ports::AssessmentStore;

use super::handlers::{
    AddCriterionCommand, AddCriterionHandler, BeginComparisonHandler, ComparisonDraft,
    ListCriteriaHandler, ListStudentsHandler, RecomputeHandler, RegisterStudentCommand,
    RegisterStudentHandler, RemoveCriterionCommand, RemoveCriterionHandler, RemoveStudentCommand,
    RemoveStudentHandler, SaveScoresCommand, SaveScoresHandler, SaveScoresResult,
    SeedDefaultCriteriaHandler, SolveWeightsCommand, SolveWeightsHandler, SolvedWeights,
    UpdateCriterionCommand, UpdateCriterionHandler, UpdateStudentCommand, UpdateStudentHandler,
};

/// Facade over the roster, weighting, scoring and results handlers.
pub struct AssessmentService {
    register_student: RegisterStudentHandler,
    update_student: UpdateStudentHandler,
    remove_student: RemoveStudentHandler,
    list_students: ListStudentsHandler,
    add_criterion: AddCriterionHandler,
    update_criterion: UpdateCriterionHandler,
    remove_criterion: RemoveCriterionHandler,
    list_criteria: ListCriteriaHandler,
    seed_default_criteria: SeedDefaultCriteriaHandler,
    begin_comparison: BeginComparisonHandler,
    solve_weights: SolveWeightsHandler,
    save_scores: SaveScoresHandler,
    results: RecomputeHandler,
}

impl AssessmentService {
    pub fn new(store: Arc<dyn AssessmentStore>, config: &AppConfig) -> Self {
        let engine = AhpEngine::new(config.talent.classifier());
        Self {
            register_student: RegisterStudentHandler::new(store.clone()),
            update_student: UpdateStudentHandler::new(store.clone()),
            remove_student: RemoveStudentHandler::new(store.clone()),
            list_students: ListStudentsHandler::new(store.clone()),
            add_criterion: AddCriterionHandler::new(store.clone()),
            update_criterion: UpdateCriterionHandler::new(store.clone()),
            remove_criterion: RemoveCriterionHandler::new(store.clone()),
            list_criteria: ListCriteriaHandler::new(store.clone()),
            seed_default_criteria: SeedDefaultCriteriaHandler::new(store.clone()),
            begin_comparison: BeginComparisonHandler::new(store.clone()),
            solve_weights: SolveWeightsHandler::new(store.clone(), config.engine.clone()),
            save_scores: SaveScoresHandler::new(store.clone()),
            results: RecomputeHandler::new(store, engine, config.engine.top_n),
        }
    }

    /// Service over an empty in-memory store.
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::new(Arc::new(InMemoryAssessmentStore::new()), config)
    }

    pub fn add_student(&self, profile: StudentProfile) -> Result<Student, DomainError> {
        Ok(self
            .register_student
            .handle(RegisterStudentCommand { profile })?
            .student)
    }

    pub fn update_student(
        &self,
        student_id: StudentId,
        update: StudentUpdate,
    ) -> Result<Student, DomainError> {
        self.update_student
            .handle(UpdateStudentCommand { student_id, update })
    }

    pub fn remove_student(&self, student_id: StudentId) -> Result<Student, DomainError> {
        self.remove_student
            .handle(RemoveStudentCommand { student_id })
    }

    pub fn list_students(&self) -> Result<Vec<Student>, DomainError> {
        self.list_students.handle()
    }

    pub fn add_criterion(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Criterion, DomainError> {
        self.add_criterion.handle(AddCriterionCommand {
            id: None,
            name: name.into(),
            description: description.into(),
        })
    }

    pub fn update_criterion(&self, cmd: UpdateCriterionCommand) -> Result<Criterion, DomainError> {
        self.update_criterion.handle(cmd)
    }

    pub fn remove_criterion(&self, criterion_id: CriterionId) -> Result<Criterion, DomainError> {
        self.remove_criterion
            .handle(RemoveCriterionCommand { criterion_id })
    }

    pub fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
        self.list_criteria.handle()
    }

    pub fn seed_default_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
        self.seed_default_criteria.handle()
    }

    pub fn begin_comparison(&self) -> Result<ComparisonDraft, DomainError> {
        self.begin_comparison.handle()
    }

    pub fn solve_weights(&self, matrix: PairwiseMatrix) -> Result<SolvedWeights, DomainError> {
        self.solve_weights.handle(SolveWeightsCommand { matrix })
    }

    pub fn save_scores(
        &self,
        student_id: StudentId,
        scores: Vec<(CriterionId, f64)>,
    ) -> Result<SaveScoresResult, DomainError> {
        self.save_scores
            .handle(SaveScoresCommand { student_id, scores })
    }

    pub fn recompute(&self) -> Result<Vec<AhpResult>, DomainError> {
        self.results.recompute()
    }

    pub fn ranking(&self) -> Result<Vec<RankedResult>, DomainError> {
        self.results.ranking()
    }

    pub fn summary(&self) -> Result<AssessmentSummary, DomainError> {
        self.results.summary()
    }
}
