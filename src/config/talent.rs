//! Talent label configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{TalentClassifier, FALLBACK_TALENT};

/// Extra criterion name to talent label mapping
///
/// Kept as a list rather than a map so criterion names keep their case.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TalentMapping {
    pub criterion: String,
    pub label: String,
}

/// Talent labelling configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TalentConfig {
    /// Label used when the dominant criterion has no mapping
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,

    /// Mappings layered over the canonical table
    #[serde(default)]
    pub labels: Vec<TalentMapping>,
}

impl TalentConfig {
    /// Builds a classifier from this configuration
    pub fn classifier(&self) -> TalentClassifier {
        self.labels.iter().fold(
            TalentClassifier::new().with_fallback(self.fallback_label.clone()),
            |classifier, mapping| classifier.with_label(mapping.criterion.clone(), mapping.label.clone()),
        )
    }

    /// Validate talent configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.fallback_label.trim().is_empty() {
            return Err(ValidationError::EmptyFallbackLabel);
        }
        if let Some(bad) = self
            .labels
            .iter()
            .find(|m| m.criterion.trim().is_empty() || m.label.trim().is_empty())
        {
            return Err(ValidationError::InvalidTalentMapping(bad.criterion.clone()));
        }
        Ok(())
    }
}

impl Default for TalentConfig {
    fn default() -> Self {
        Self {
            fallback_label: default_fallback_label(),
            labels: Vec::new(),
        }
    }
}

fn default_fallback_label() -> String {
    FALLBACK_TALENT.to_string()
}
