//! Score recording handlers.

mod save_scores;

pub use save_scores::{SaveScoresCommand, SaveScoresHandler, SaveScoresResult};
