//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the talent assessment domain.

mod errors;
mod ids;
mod judgment;
mod raw_score;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CriterionId, StudentId};
pub use judgment::Judgment;
pub use raw_score::RawScore;
