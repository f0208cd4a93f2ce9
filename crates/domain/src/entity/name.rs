use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

// =============================================================================
// EntityName
// =============================================================================

/// Display name of a catalog entity.
///
/// Names are trimmed, non-empty and at most [`EntityName::MAX_LENGTH`]
/// characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityName(String);

impl EntityName {
    pub const MAX_LENGTH: usize = 100;

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value: String = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_value("name"));
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                Self::MAX_LENGTH,
                length,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw input.
    #[must_use]
    pub fn matches_ignore_case(&self, candidate: &str) -> bool {
        self.0.to_lowercase() == candidate.trim().to_lowercase()
    }
}

impl TryFrom<String> for EntityName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityName> for String {
    fn from(name: EntityName) -> Self {
        name.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
