//! Validation errors shared by every value object in the domain.

use thiserror::Error;

// =============================================================================
// ValidationError
// =============================================================================

/// Validation error variants for domain value objects.
///
/// Each variant names the offending field so the boundary layer can report
/// field-level details back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("'{field}' must not be empty")]
    EmptyValue {
        /// The name of the field that was empty.
        field: String,
    },
    /// A value was outside the valid range.
    #[error("'{field}' must be between {min} and {max}, but was {actual}")]
    OutOfRange {
        /// The name of the field that was out of range.
        field: String,
        /// The minimum allowed value.
        min: String,
        /// The maximum allowed value.
        max: String,
        /// The value that was provided.
        actual: String,
    },
    /// A value had an invalid format.
    #[error("'{field}' has invalid format: expected {expected}")]
    InvalidFormat {
        /// The name of the field with invalid format.
        field: String,
        /// Description of the expected format.
        expected: String,
    },
    /// A constraint was violated.
    #[error("'{field}' violates constraint: {constraint}")]
    ConstraintViolation {
        /// The name of the field that violated the constraint.
        field: String,
        /// Description of the constraint that was violated.
        constraint: String,
    },
}

impl ValidationError {
    /// Returns the name of the field that caused the error.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyValue { field }
            | Self::OutOfRange { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::ConstraintViolation { field, .. } => field,
        }
    }

    /// Creates an empty value error.
    pub fn empty_value(field: impl Into<String>) -> Self {
        Self::EmptyValue {
            field: field.into(),
        }
    }

    /// Creates an out of range error.
    pub fn out_of_range(
        field: impl Into<String>,
        min: impl ToString,
        max: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min: min.to_string(),
            max: max.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Creates a constraint violation error.
    pub fn constraint_violation(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_value_message() {
        let error = ValidationError::empty_value("name");
        assert_eq!(error.to_string(), "'name' must not be empty");
        assert_eq!(error.field(), "name");
    }

    #[rstest]
    fn out_of_range_message() {
        let error = ValidationError::out_of_range("max_attempts", 3, 15, 16);
        assert_eq!(
            error.to_string(),
            "'max_attempts' must be between 3 and 15, but was 16"
        );
        assert_eq!(error.field(), "max_attempts");
    }

    #[rstest]
    fn invalid_format_message() {
        let error = ValidationError::invalid_format("max_attempts", "an integer");
        assert_eq!(
            error.to_string(),
            "'max_attempts' has invalid format: expected an integer"
        );
    }

    #[rstest]
    fn constraint_violation_message() {
        let error = ValidationError::constraint_violation("categories", "at most two tags");
        assert_eq!(
            error.to_string(),
            "'categories' violates constraint: at most two tags"
        );
        assert_eq!(error.field(), "categories");
    }
}
