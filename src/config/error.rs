//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Consistency threshold must be in (0, 1], got {0}")]
    InvalidConsistencyThreshold(f64),

    #[error("Top-N size must be at least 1")]
    InvalidTopN,

    #[error("Fallback talent label must not be empty")]
    EmptyFallbackLabel,

    #[error("Talent mapping for '{0}' has an empty criterion or label")]
    InvalidTalentMapping(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
