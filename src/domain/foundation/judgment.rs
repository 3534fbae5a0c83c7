//! Judgment value object for pairwise comparisons (1 to 9 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Saaty scale judgment: how much more important the row criterion is than
/// the column criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Judgment(u8);

impl Judgment {
    /// Lowest value on the scale.
    pub const MIN: u8 = 1;

    /// Highest value on the scale.
    pub const MAX: u8 = 9;

    /// Both criteria are equally important.
    pub const EQUAL: Self = Self(1);

    /// Creates a Judgment, returning error if outside 1..=9.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "judgment",
                f64::from(Self::MIN),
                f64::from(Self::MAX),
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the ratio stored in the pairwise matrix.
    pub fn ratio(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Equally important",
            2 => "Slightly more important",
            3 => "Moderately more important",
            4 => "More important",
            5 => "Strongly more important",
            6 => "Much more important",
            7 => "Very much more important",
            8 => "Absolutely more important",
            _ => "Extremely more important",
        }
    }

    /// Returns every judgment on the scale, lowest first.
    pub fn scale() -> impl Iterator<Item = Judgment> {
        (Self::MIN..=Self::MAX).map(Judgment)
    }
}

impl Default for Judgment {
    fn default() -> Self {
        Self::EQUAL
    }
}

impl TryFrom<u8> for Judgment {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Judgment> for u8 {
    fn from(judgment: Judgment) -> Self {
        judgment.0
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.0, self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judgment_try_new_accepts_scale() {
        for value in 1..=9 {
            assert_eq!(Judgment::try_new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn judgment_try_new_rejects_outside_scale() {
        assert!(Judgment::try_new(0).is_err());
        assert!(Judgment::try_new(10).is_err());
        assert!(Judgment::try_new(255).is_err());
    }

    #[test]
    fn judgment_default_is_equal() {
        assert_eq!(Judgment::default(), Judgment::EQUAL);
        assert_eq!(Judgment::default().ratio(), 1.0);
    }

    #[test]
    fn judgment_labels_cover_scale() {
        assert_eq!(Judgment::EQUAL.label(), "Equally important");
        assert_eq!(Judgment::try_new(5).unwrap().label(), "Strongly more important");
        assert_eq!(Judgment::try_new(9).unwrap().label(), "Extremely more important");
    }

    #[test]
    fn judgment_displays_value_and_label() {
        let judgment = Judgment::try_new(3).unwrap();
        assert_eq!(format!("{}", judgment), "3 - Moderately more important");
    }

    #[test]
    fn judgment_scale_lists_nine_values() {
        let values: Vec<u8> = Judgment::scale().map(|j| j.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn judgment_deserialize_validates() {
        let judgment: Judgment = serde_json::from_str("7").unwrap();
        assert_eq!(judgment.value(), 7);
        assert!(serde_json::from_str::<Judgment>("0").is_err());
    }
}
