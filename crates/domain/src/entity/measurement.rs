use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

// =============================================================================
// Measurement
// =============================================================================

/// A finite, non-negative physical quantity (size in metres, mass in kilograms).
///
/// NaN and infinities are rejected at construction, which makes the ordering
/// total. Negative zero is stored as zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Measurement(f64);

impl Measurement {
    /// Creates a measurement, naming `field` in any validation error.
    pub fn new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(field, "a finite number"));
        }
        if value < 0.0 {
            return Err(ValidationError::out_of_range(field, 0, "infinity", value));
        }
        // folds -0.0 into 0.0
        Ok(Self(value + 0.0))
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Measurement {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("measurement", value)
    }
}

impl From<Measurement> for f64 {
    fn from(measurement: Measurement) -> Self {
        measurement.0
    }
}

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Measurement {}

impl PartialOrd for Measurement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Measurement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
