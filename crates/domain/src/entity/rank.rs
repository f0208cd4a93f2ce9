use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

// =============================================================================
// Rank
// =============================================================================

/// Catalog number of an entity.
///
/// Ranks are unique within a catalog and start at 1.
///
/// # Examples
///
/// ```
/// use dexdle_domain::entity::Rank;
///
/// let rank = Rank::new(25).unwrap();
/// assert_eq!(rank.value(), 25);
/// assert_eq!(rank.to_string(), "No.0025");
/// assert!(Rank::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rank(u32);

impl Rank {
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range("rank", 1, u32::MAX, value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Rank {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rank> for u32 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "No.{:04}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "No.0001")]
    #[case(25, "No.0025")]
    #[case(1025, "No.1025")]
    fn display_pads_to_four_digits(#[case] value: u32, #[case] expected: &str) {
        assert_eq!(Rank::new(value).unwrap().to_string(), expected);
    }

    #[rstest]
    fn zero_is_rejected() {
        let error = Rank::new(0).unwrap_err();
        assert_eq!(error.field(), "rank");
    }

    #[rstest]
    fn deserialize_rejects_zero() {
        let result: Result<Rank, _> = serde_json::from_str("0");
        assert!(result.is_err());
        let rank: Rank = serde_json::from_str("151").unwrap();
        assert_eq!(rank.value(), 151);
    }
}
