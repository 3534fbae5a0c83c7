//! Talent Classifier - Maps a student's dominant criterion to a talent label.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{AhpError, WeightedDetail};

/// Label used when the dominant criterion has no mapping.
pub const FALLBACK_TALENT: &str = "General Talent";

static CANONICAL_TALENTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Kemampuan Matematika", "STEM & Sains"),
        ("Kemampuan Verbal", "Sastra & Bahasa"),
        ("Kreativitas", "Seni & Desain"),
        ("Kepemimpinan", "Organisasi & Manajemen"),
        ("Kemampuan Sosial", "Komunikasi & Sosial"),
        ("Olahraga", "Atletik & Kesehatan"),
        ("Teknologi", "IT & Programming"),
        ("Analitis", "Riset & Data Science"),
    ])
});

/// Returns the built-in talent label for a criterion name.
pub fn canonical_talent(criterion_name: &str) -> Option<&'static str> {
    CANONICAL_TALENTS.get(criterion_name).copied()
}

/// Classifies students by the criterion that contributes most to their score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalentClassifier {
    extra_labels: HashMap<String, String>,
    fallback: String,
}

impl TalentClassifier {
    /// Creates a classifier using the built-in table.
    pub fn new() -> Self {
        Self {
            extra_labels: HashMap::new(),
            fallback: FALLBACK_TALENT.to_string(),
        }
    }

    /// Adds or overrides the label for a criterion name.
    pub fn with_label(mut self, criterion_name: impl Into<String>, label: impl Into<String>) -> Self {
        self.extra_labels.insert(criterion_name.into(), label.into());
        self
    }

    /// Replaces the fallback label.
    pub fn with_fallback(mut self, label: impl Into<String>) -> Self {
        self.fallback = label.into();
        self
    }

    /// Returns the entry with the highest weighted score.
    ///
    /// Later entries must strictly exceed the running maximum, so the first
    /// of several tied entries wins.
    pub fn dominant(details: &[WeightedDetail]) -> Option<&WeightedDetail> {
        let (first, rest) = details.split_first()?;
        Some(rest.iter().fold(first, |best, current| {
            if current.weighted_score > best.weighted_score {
                current
            } else {
                best
            }
        }))
    }

    /// Returns the label for a criterion name, or the fallback.
    pub fn label_for(&self, criterion_name: &str) -> &str {
        self.extra_labels
            .get(criterion_name)
            .map(String::as_str)
            .or_else(|| canonical_talent(criterion_name))
            .unwrap_or(self.fallback.as_str())
    }

    /// Labels a student from their weighted breakdown.
    ///
    /// # Errors
    /// `EmptyDetails` if there is nothing to classify.
    pub fn classify(&self, details: &[WeightedDetail]) -> Result<String, AhpError> {
        let dominant = Self::dominant(details).ok_or(AhpError::EmptyDetails)?;
        Ok(self.label_for(&dominant.name).to_string())
    }
}

impl Default for TalentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CriterionId, RawScore};

    fn detail(id: &str, name: &str, weighted_score: f64) -> WeightedDetail {
        WeightedDetail {
            criterion_id: CriterionId::new(id).unwrap(),
            name: name.to_string(),
            raw_score: RawScore::new(100.0),
            weight: weighted_score,
            weighted_score,
        }
    }

    #[test]
    fn classify_picks_highest_weighted_score() {
        let details = vec![
            detail("1", "Kemampuan Matematika", 0.10),
            detail("2", "Kreativitas", 0.35),
            detail("3", "Kepemimpinan", 0.20),
        ];

        let label = TalentClassifier::new().classify(&details).unwrap();
        assert_eq!(label, "Seni & Desain");
    }

    #[test]
    fn classify_tie_goes_to_first_entry() {
        let details = vec![
            detail("1", "Kemampuan Verbal", 0.25),
            detail("2", "Teknologi", 0.25),
        ];

        let label = TalentClassifier::new().classify(&details).unwrap();
        assert_eq!(label, "Sastra & Bahasa");
    }

    #[test]
    fn classify_unmapped_name_falls_back() {
        let details = vec![detail("1", "Musik", 0.9), detail("2", "Olahraga", 0.1)];

        let label = TalentClassifier::new().classify(&details).unwrap();
        assert_eq!(label, FALLBACK_TALENT);
    }

    #[test]
    fn classify_empty_details_is_error() {
        assert_eq!(
            TalentClassifier::new().classify(&[]),
            Err(AhpError::EmptyDetails)
        );
    }

    #[test]
    fn classify_all_zero_returns_first_criterion_label() {
        let details = vec![
            detail("1", "Analitis", 0.0),
            detail("2", "Kemampuan Sosial", 0.0),
        ];

        let label = TalentClassifier::new().classify(&details).unwrap();
        assert_eq!(label, "Riset & Data Science");
    }

    #[test]
    fn with_label_extends_and_overrides_table() {
        let classifier = TalentClassifier::new()
            .with_label("Musik", "Seni Musik")
            .with_label("Olahraga", "Sports");

        assert_eq!(classifier.label_for("Musik"), "Seni Musik");
        assert_eq!(classifier.label_for("Olahraga"), "Sports");
        assert_eq!(classifier.label_for("Teknologi"), "IT & Programming");
    }

    #[test]
    fn with_fallback_replaces_default_label() {
        let classifier = TalentClassifier::new().with_fallback("Bakat Umum");
        assert_eq!(classifier.label_for("Unknown"), "Bakat Umum");
    }

    #[test]
    fn dominant_returns_none_for_empty() {
        assert!(TalentClassifier::dominant(&[]).is_none());
    }

    #[test]
    fn canonical_talent_covers_eight_criteria() {
        assert_eq!(canonical_talent("Kemampuan Matematika"), Some("STEM & Sains"));
        assert_eq!(canonical_talent("Kepemimpinan"), Some("Organisasi & Manajemen"));
        assert_eq!(canonical_talent("kreativitas"), None);
        assert_eq!(CANONICAL_TALENTS.len(), 8);
    }
}
