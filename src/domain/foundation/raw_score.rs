//! Raw score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A raw per-criterion assessment score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RawScore(f64);

impl RawScore {
    /// Zero points.
    pub const ZERO: Self = Self(0.0);

    /// Full marks.
    pub const MAX: Self = Self(100.0);

    /// Creates a RawScore, clamping to the valid range. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a RawScore.
    ///
    /// # Errors
    /// `InvalidFormat` for NaN or infinity, `OutOfRange` outside 0..=100.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "raw_score",
                format!("must be a finite number, got {}", value),
            ));
        }
        if !(Self::ZERO.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "raw_score",
                Self::ZERO.0,
                Self::MAX.0,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value on the 0-100 scale.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for RawScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for RawScore {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<RawScore> for f64 {
    fn from(score: RawScore) -> Self {
        score.0
    }
}

impl fmt::Display for RawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
