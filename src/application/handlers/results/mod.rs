//! Result computation handlers.

mod recompute;

pub use recompute::RecomputeHandler;
