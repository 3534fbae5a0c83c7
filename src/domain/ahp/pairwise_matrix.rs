//! Pairwise Matrix - Reciprocal comparison matrix and its builder.

use serde::{Deserialize, Serialize};

use super::AhpError;
use crate::domain::foundation::Judgment;

/// Largest ratio a single comparison may record.
pub const MAX_RATIO: f64 = 9.0;

/// Smallest ratio a single comparison may record.
pub const MIN_RATIO: f64 = 1.0 / 9.0;

/// Relative tolerance used when checking `m[i][j] * m[j][i] == 1`.
pub const RECIPROCITY_TOLERANCE: f64 = 1e-9;

/// Square matrix of pairwise judgments.
///
/// # Invariants
/// - `m[i][i] == 1`
/// - `m[j][i] == 1 / m[i][j]`
/// - every entry is positive and finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix {
    entries: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Creates an N×N matrix of ones (every pair judged equal).
    pub fn identity(size: usize) -> Self {
        Self {
            entries: vec![vec![1.0; size]; size],
        }
    }

    /// Validates an externally supplied matrix.
    ///
    /// # Errors
    /// `InvalidMatrix` if the matrix is empty, not square, has a
    /// non-positive, non-finite or off-scale entry, a diagonal entry other
    /// than 1, or breaks reciprocal symmetry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let n = rows.len();
        if n == 0 {
            return Err(AhpError::invalid_matrix("matrix is empty"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AhpError::invalid_matrix(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(AhpError::invalid_matrix(format!(
                        "entry ({}, {}) must be positive and finite, got {}",
                        i, j, value
                    )));
                }
                if !is_on_scale(value) {
                    return Err(AhpError::invalid_matrix(format!(
                        "entry ({}, {}) = {} is outside the 1/9 to 9 scale",
                        i, j, value
                    )));
                }
            }
            if (row[i] - 1.0).abs() > RECIPROCITY_TOLERANCE {
                return Err(AhpError::invalid_matrix(format!(
                    "diagonal entry ({}, {}) must be 1, got {}",
                    i, i, row[i]
                )));
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if !is_reciprocal_pair(rows[i][j], rows[j][i]) {
                    return Err(AhpError::invalid_matrix(format!(
                        "entries ({}, {}) = {} and ({}, {}) = {} are not reciprocal",
                        i, j, rows[i][j], j, i, rows[j][i]
                    )));
                }
            }
        }

        Ok(Self { entries: rows })
    }

    /// Returns the number of criteria compared.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.entries.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.entries
    }

    /// Checks reciprocal symmetry and the unit diagonal across the whole matrix.
    pub fn is_reciprocal(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| {
            (self.entries[i][i] - 1.0).abs() <= RECIPROCITY_TOLERANCE
                && ((i + 1)..n).all(|j| is_reciprocal_pair(self.entries[i][j], self.entries[j][i]))
        })
    }

    /// Sets `m[i][j] = ratio` and `m[j][i] = 1 / ratio` together.
    fn set_ratio(&mut self, i: usize, j: usize, ratio: f64) -> Result<(), AhpError> {
        let n = self.size();
        if i >= n || j >= n {
            return Err(AhpError::invalid_matrix(format!(
                "comparison ({}, {}) is outside a {}x{} matrix",
                i, j, n, n
            )));
        }
        if i == j {
            return Err(AhpError::invalid_matrix(format!(
                "diagonal entry ({}, {}) cannot be changed",
                i, j
            )));
        }
        if !ratio.is_finite() || !is_on_scale(ratio) {
            return Err(AhpError::invalid_matrix(format!(
                "ratio {} for ({}, {}) is outside the 1/9 to 9 scale",
                ratio, i, j
            )));
        }

        self.entries[i][j] = ratio;
        self.entries[j][i] = 1.0 / ratio;
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.entries
    }
}

fn is_reciprocal_pair(a: f64, b: f64) -> bool {
    (a * b - 1.0).abs() <= RECIPROCITY_TOLERANCE
}

fn is_on_scale(ratio: f64) -> bool {
    ratio >= MIN_RATIO * (1.0 - RECIPROCITY_TOLERANCE)
        && ratio <= MAX_RATIO * (1.0 + RECIPROCITY_TOLERANCE)
}

/// Records pairwise judgments while keeping the matrix reciprocal.
///
/// A rejected comparison leaves the matrix untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrixBuilder {
    matrix: PairwiseMatrix,
}

impl PairwiseMatrixBuilder {
    /// Starts from an N×N matrix of ones.
    pub fn initialize(size: usize) -> Self {
        Self {
            matrix: PairwiseMatrix::identity(size),
        }
    }

    /// Records that criterion `i` is `judgment` times as important as `j`.
    ///
    /// # Errors
    /// `InvalidMatrix` if `i == j` or either index is out of bounds.
    pub fn set_comparison(&mut self, i: usize, j: usize, judgment: Judgment) -> Result<(), AhpError> {
        self.matrix.set_ratio(i, j, judgment.ratio())
    }

    /// Records a raw ratio in [1/9, 9], for when the row criterion is the
    /// less important one.
    ///
    /// # Errors
    /// `InvalidMatrix` if the ratio is off the scale, `i == j`, or either
    /// index is out of bounds.
    pub fn set_ratio(&mut self, i: usize, j: usize, ratio: f64) -> Result<(), AhpError> {
        self.matrix.set_ratio(i, j, ratio)
    }

    /// Chained form of [`set_comparison`](Self::set_comparison).
    pub fn with_comparison(mut self, i: usize, j: usize, judgment: Judgment) -> Result<Self, AhpError> {
        self.set_comparison(i, j, judgment)?;
        Ok(self)
    }

    /// Returns the matrix as it currently stands.
    pub fn matrix(&self) -> &PairwiseMatrix {
        &self.matrix
    }

    /// Returns the number of criteria being compared.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Finishes building and returns the matrix.
    pub fn build(self) -> PairwiseMatrix {
        self.matrix
    }
}
