//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{CONSISTENCY_THRESHOLD, DEFAULT_TOP_N};

/// Tuning for weight solving and result reporting
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Consistency ratio at or above which judgments count as inconsistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Refuse to assign weights from inconsistent judgments
    #[serde(default)]
    pub strict_consistency: bool,

    /// Number of students listed in the summary
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let threshold = self.consistency_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(ValidationError::InvalidConsistencyThreshold(threshold));
        }
        if self.top_n == 0 {
            return Err(ValidationError::InvalidTopN);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            strict_consistency: false,
            top_n: default_top_n(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
