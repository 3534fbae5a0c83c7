//! Roster Module - Students, criteria and their recorded scores.
//!
//! These are the records the engine consumes. The host owns their
//! lifecycle; the engine only reads them.

mod criterion;
mod score_entry;
mod student;

pub use criterion::{Criterion, DEFAULT_CRITERIA};
pub use score_entry::ScoreEntry;
pub use student::{Student, StudentProfile, StudentUpdate};
