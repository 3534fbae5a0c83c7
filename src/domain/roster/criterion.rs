//! Evaluation criterion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, ValidationError};

/// Criteria seeded into a fresh workspace: (id, name, description).
pub const DEFAULT_CRITERIA: &[(&str, &str, &str)] = &[
    (
        "1",
        "Kemampuan Matematika",
        "Logical reasoning and mathematical problem solving",
    ),
    ("2", "Kemampuan Verbal", "Communication and language skills"),
    ("3", "Kreativitas", "Creative and innovative thinking"),
    ("4", "Kepemimpinan", "Leading and organizing others"),
    ("5", "Kemampuan Sosial", "Interaction and empathy"),
];

/// A criterion students are scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    pub description: String,
    /// AHP priority weight in [0, 1]. `None` until weights are solved.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl Criterion {
    /// Creates an unweighted criterion.
    pub fn new(
        id: CriterionId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            weight: None,
        })
    }

    /// Returns the same criterion carrying a weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns the weight, treating an unsolved criterion as zero.
    pub fn weight_or_zero(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    /// Returns true once a weight has been assigned.
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }

    /// Builds the default criteria set.
    pub fn default_set() -> Vec<Criterion> {
        DEFAULT_CRITERIA
            .iter()
            .filter_map(|(id, name, description)| {
                let id = CriterionId::new(*id).ok()?;
                Criterion::new(id, *name, *description).ok()
            })
            .collect()
    }
}
