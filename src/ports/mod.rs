//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentStore` - Students, criteria and scores owned by the host

mod assessment_store;

pub use assessment_store::{AssessmentSnapshot, AssessmentStore, StoreError};
