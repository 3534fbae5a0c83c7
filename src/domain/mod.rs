//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `roster` - Students, criteria and recorded scores
//! - `ahp` - Pure domain services for AHP weighting, scoring and ranking

pub mod ahp;
pub mod foundation;
pub mod roster;
