//! Error types for AHP computations.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Kind of record a score entry can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Student,
    Criterion,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Student => write!(f, "student"),
            ReferenceKind::Criterion => write!(f, "criterion"),
        }
    }
}

/// Errors raised while building matrices or computing AHP results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Invalid pairwise matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("Unsupported matrix size {size}: random index is defined for 1 to {max} criteria")]
    UnsupportedSize { size: usize, max: usize },

    #[error("Unknown {kind} '{id}'")]
    MissingReference { kind: ReferenceKind, id: String },

    #[error("Cannot classify a student without weighted details")]
    EmptyDetails,

    #[error("Consistency ratio {ratio:.4} is not below the threshold {threshold:.2}")]
    InconsistentJudgments { ratio: f64, threshold: f64 },
}

impl AhpError {
    /// Creates an invalid matrix error.
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        AhpError::InvalidMatrix {
            reason: reason.into(),
        }
    }

    /// Creates a missing reference error.
    pub fn missing(kind: ReferenceKind, id: impl Into<String>) -> Self {
        AhpError::MissingReference {
            kind,
            id: id.into(),
        }
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        let code = match &err {
            AhpError::InvalidMatrix { .. } => ErrorCode::InvalidMatrix,
            AhpError::UnsupportedSize { .. } => ErrorCode::UnsupportedSize,
            AhpError::MissingReference {
                kind: ReferenceKind::Student,
                ..
            } => ErrorCode::StudentNotFound,
            AhpError::MissingReference {
                kind: ReferenceKind::Criterion,
                ..
            } => ErrorCode::CriterionNotFound,
            AhpError::EmptyDetails => ErrorCode::EmptyDetails,
            AhpError::InconsistentJudgments { .. } => ErrorCode::InconsistentJudgments,
        };
        let message = err.to_string();
        match err {
            AhpError::UnsupportedSize { size, .. } => {
                DomainError::new(code, message).with_detail("size", size.to_string())
            }
            AhpError::MissingReference { id, .. } => {
                DomainError::new(code, message).with_detail("id", id)
            }
            AhpError::InconsistentJudgments { ratio, .. } => {
                DomainError::new(code, message).with_detail("consistency_ratio", ratio.to_string())
            }
            _ => DomainError::new(code, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_size_displays_bounds() {
        let err = AhpError::UnsupportedSize { size: 11, max: 10 };
        assert_eq!(
            err.to_string(),
            "Unsupported matrix size 11: random index is defined for 1 to 10 criteria"
        );
    }

    #[test]
    fn inconsistent_judgments_displays_ratio() {
        let err = AhpError::InconsistentJudgments {
            ratio: 0.1234,
            threshold: 0.1,
        };
        assert_eq!(
            err.to_string(),
            "Consistency ratio 0.1234 is not below the threshold 0.10"
        );
    }

    #[test]
    fn missing_reference_maps_to_not_found_codes() {
        let student: DomainError = AhpError::missing(ReferenceKind::Student, "s9").into();
        assert_eq!(student.code, ErrorCode::StudentNotFound);
        assert_eq!(student.details.get("id"), Some(&"s9".to_string()));

        let criterion: DomainError = AhpError::missing(ReferenceKind::Criterion, "c9").into();
        assert_eq!(criterion.code, ErrorCode::CriterionNotFound);
        assert_eq!(criterion.message, "Unknown criterion 'c9'");
    }

    #[test]
    fn invalid_matrix_maps_to_domain_error() {
        let err: DomainError = AhpError::invalid_matrix("matrix is empty").into();
        assert_eq!(err.code, ErrorCode::InvalidMatrix);
        assert_eq!(
            format!("{}", err),
            "[INVALID_MATRIX] Invalid pairwise matrix: matrix is empty"
        );
    }
}
