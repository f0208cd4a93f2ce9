use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

// =============================================================================
// MaxAttempts
// =============================================================================

/// Per-player guess budget. A session is lost once its attempts reach it.
///
/// # Examples
///
/// ```
/// use dexdle_domain::settings::MaxAttempts;
///
/// assert_eq!(MaxAttempts::default().value(), 8);
/// assert_eq!(MaxAttempts::parse(" 12 ").unwrap().value(), 12);
/// assert!(MaxAttempts::new(2).is_err());
/// assert!(MaxAttempts::parse("many").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MaxAttempts(u8);

impl MaxAttempts {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 15;
    pub const DEFAULT: Self = Self(8);

    const FIELD: &'static str = "max_attempts";

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                Self::FIELD,
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::out_of_range(Self::FIELD, Self::MIN, Self::MAX, value))
    }

    /// Parses user-entered text.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format(Self::FIELD, "an integer"))?;
        Self::new(value)
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Whether `attempts` has used up the budget.
    #[must_use]
    pub fn is_exhausted_by(&self, attempts: u32) -> bool {
        attempts >= u32::from(self.0)
    }
}

impl Default for MaxAttempts {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for MaxAttempts {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaxAttempts> for u8 {
    fn from(max_attempts: MaxAttempts) -> Self {
        max_attempts.0
    }
}

impl fmt::Display for MaxAttempts {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
