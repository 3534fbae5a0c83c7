//! AHP Weight Solver - Priority weights and consistency from a pairwise matrix.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AhpError, PairwiseMatrix};

/// Judgments are conventionally acceptable when CR is below this value.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Random Index for matrices of size 1 through 10 (index 0 is size 1).
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.9, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Largest number of criteria the Random Index table covers.
pub const MAX_CRITERIA: usize = RANDOM_INDEX.len();

/// Looks up the Random Index for `size` criteria.
///
/// # Errors
/// - `InvalidMatrix` for size 0
/// - `UnsupportedSize` above [`MAX_CRITERIA`]
pub fn random_index(size: usize) -> Result<f64, AhpError> {
    if size == 0 {
        return Err(AhpError::invalid_matrix("matrix is empty"));
    }
    RANDOM_INDEX
        .get(size - 1)
        .copied()
        .ok_or(AhpError::UnsupportedSize {
            size,
            max: MAX_CRITERIA,
        })
}

/// A solved weight paired with its criterion name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub name: String,
    pub weight: f64,
}

/// Output of a weight solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpSolution {
    /// Priority weights in criterion order. They sum to 1.
    pub weights: Vec<f64>,
    /// Criterion names in the same order, for labelling only.
    pub criterion_names: Vec<String>,
    /// Estimate of the principal eigenvalue.
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
}

impl AhpSolution {
    /// Returns true when CR is below [`CONSISTENCY_THRESHOLD`].
    pub fn is_consistent(&self) -> bool {
        self.is_consistent_at(CONSISTENCY_THRESHOLD)
    }

    /// Returns true when CR is below the given threshold.
    pub fn is_consistent_at(&self, threshold: f64) -> bool {
        self.consistency_ratio < threshold
    }

    /// Returns the weights paired with their criterion names.
    pub fn labelled_weights(&self) -> Vec<CriterionWeight> {
        self.criterion_names
            .iter()
            .zip(&self.weights)
            .map(|(name, &weight)| CriterionWeight {
                name: name.clone(),
                weight,
            })
            .collect()
    }

    /// Returns the number of criteria solved.
    pub fn size(&self) -> usize {
        self.weights.len()
    }
}

/// Derives priority weights with the normalized column-sum method.
pub struct AhpWeightSolver;

impl AhpWeightSolver {
    /// Solves a pairwise matrix for weights and consistency.
    ///
    /// # Algorithm
    /// 1. Column sums `S_j = Σ_i m[i][j]`
    /// 2. `norm[i][j] = m[i][j] / S_j`
    /// 3. `w_i` = row average of `norm`
    /// 4. `ws_i = Σ_j m[i][j] * w_j`
    /// 5. `λmax = (Σ_i ws_i / w_i) / N`
    /// 6. `CI = (λmax - N) / (N - 1)`
    /// 7. `CR = CI / RI[N]`
    ///
    /// # Edge Cases
    /// - N ≤ 2: CI and CR are 0
    /// - N > 10: `UnsupportedSize`
    /// - A zero or non-finite weight: `InvalidMatrix`
    pub fn solve<S: AsRef<str>>(
        matrix: &PairwiseMatrix,
        criterion_names: &[S],
    ) -> Result<AhpSolution, AhpError> {
        let n = matrix.size();
        let ri = random_index(n)?;

        if criterion_names.len() != n {
            return Err(AhpError::invalid_matrix(format!(
                "{} criterion names supplied for a {}x{} matrix",
                criterion_names.len(),
                n,
                n
            )));
        }

        let rows = matrix.rows();
        let size = n as f64;

        let column_sums: Vec<f64> = (0..n)
            .map(|j| rows.iter().map(|row| row[j]).sum())
            .collect();

        let weights: Vec<f64> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| value / sum)
                    .sum::<f64>()
                    / size
            })
            .collect();

        if let Some(i) = weights.iter().position(|w| !w.is_finite() || *w <= 0.0) {
            return Err(AhpError::invalid_matrix(format!(
                "criterion {} solved to a degenerate weight {}",
                i, weights[i]
            )));
        }

        let weighted_sums: Vec<f64> = rows
            .iter()
            .map(|row| row.iter().zip(&weights).map(|(value, w)| value * w).sum())
            .collect();

        let lambda_max = weighted_sums
            .iter()
            .zip(&weights)
            .map(|(ws, w)| ws / w)
            .sum::<f64>()
            / size;

        if !lambda_max.is_finite() {
            return Err(AhpError::invalid_matrix("principal eigenvalue is not finite"));
        }

        let (consistency_index, consistency_ratio) = if n > 2 {
            let ci = (lambda_max - size) / (size - 1.0);
            (ci, ci / ri)
        } else {
            (0.0, 0.0)
        };

        debug!(
            criteria = n,
            lambda_max,
            consistency_ratio,
            "Solved AHP weights"
        );

        Ok(AhpSolution {
            weights,
            criterion_names: criterion_names
                .iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
            lambda_max,
            consistency_index,
            consistency_ratio,
        })
    }
}
