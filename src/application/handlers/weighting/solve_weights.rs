//! SolveWeightsHandler - Solves a pairwise matrix and stores the weights.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::domain::ahp::{AhpError, AhpSolution, AhpWeightSolver, PairwiseMatrix};
use crate::domain::foundation::DomainError;
use crate::ports::AssessmentStore;

/// Command to solve a completed comparison matrix.
///
/// Row `i` refers to the `i`-th stored criterion.
#[derive(Debug, Clone)]
pub struct SolveWeightsCommand {
    pub matrix: PairwiseMatrix,
}

/// Weights that were assigned and when.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolvedWeights {
    pub solution: AhpSolution,
    pub solved_at: DateTime<Utc>,
}

/// Handler for solving and assigning criterion weights.
pub struct SolveWeightsHandler {
    store: Arc<dyn AssessmentStore>,
    config: EngineConfig,
}

impl SolveWeightsHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn handle(&self, cmd: SolveWeightsCommand) -> Result<SolvedWeights, DomainError> {
        // 1. Matrix rows must line up with the stored criteria
        let criteria = self.store.list_criteria()?;
        if cmd.matrix.size() != criteria.len() {
            return Err(AhpError::invalid_matrix(format!(
                "matrix is {n}x{n} but there are {} criteria",
                criteria.len(),
                n = cmd.matrix.size()
            ))
            .into());
        }

        // 2. Solve
        let names: Vec<&str> = criteria.iter().map(|c| c.name.as_str()).collect();
        let solution = AhpWeightSolver::solve(&cmd.matrix, &names)?;

        // 3. Consistency gate
        let threshold = self.config.consistency_threshold;
        if !solution.is_consistent_at(threshold) {
            if self.config.strict_consistency {
                return Err(AhpError::InconsistentJudgments {
                    ratio: solution.consistency_ratio,
                    threshold,
                }
                .into());
            }
            warn!(
                consistency_ratio = solution.consistency_ratio,
                threshold, "Assigning weights from inconsistent judgments"
            );
        }

        // 4. Overwrite every weight at once
        let assignments: Vec<_> = criteria
            .iter()
            .map(|c| c.id.clone())
            .zip(solution.weights.iter().copied())
            .collect();
        self.store.assign_weights(&assignments)?;

        info!(
            criteria = solution.size(),
            lambda_max = solution.lambda_max,
            consistency_ratio = solution.consistency_ratio,
            "Solved criterion weights"
        );

        Ok(SolvedWeights {
            solution,
            solved_at: Utc::now(),
        })
    }
}
