//! Adapters - Implementations of port interfaces.
//!
//! - `in_memory_store` - `AssessmentStore` backed by process memory

mod in_memory_store;

pub use in_memory_store::InMemoryAssessmentStore;
