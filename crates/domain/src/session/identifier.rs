use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::ValidationError;

// =============================================================================
// SessionIdentifier
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct SessionIdentifier(Uuid);

impl SessionIdentifier {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Result<Self, ValidationError> {
        if uuid.is_nil() {
            return Err(ValidationError::empty_value("session_id"));
        }
        Ok(Self(uuid))
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Uuid> for SessionIdentifier {
    type Error = ValidationError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        Self::from_uuid(uuid)
    }
}

impl From<SessionIdentifier> for Uuid {
    fn from(identifier: SessionIdentifier) -> Self {
        identifier.0
    }
}

impl fmt::Display for SessionIdentifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.hyphenated())
    }
}

impl FromStr for SessionIdentifier {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(string.trim()).map_err(|_| {
            ValidationError::invalid_format(
                "session_id",
                "valid UUID format (e.g., 550e8400-e29b-41d4-a716-446655440000)",
            )
        })?;

        Self::from_uuid(uuid)
    }
}

// =============================================================================
// PlayerIdentifier
// =============================================================================

/// Opaque player handle issued by the boundary layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerIdentifier(String);

impl PlayerIdentifier {
    pub const MAX_LENGTH: usize = 100;

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value: String = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_value("player_id"));
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::out_of_range(
                "player_id",
                1,
                Self::MAX_LENGTH,
                length,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// A fresh random identifier for a player who has none yet.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerIdentifier {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerIdentifier> for String {
    fn from(identifier: PlayerIdentifier) -> Self {
        identifier.0
    }
}

impl FromStr for PlayerIdentifier {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::new(string)
    }
}

impl fmt::Display for PlayerIdentifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod session_identifier {
        use super::*;

        #[rstest]
        fn new_creates_unique_identifier() {
            assert_ne!(SessionIdentifier::new(), SessionIdentifier::new());
        }

        #[rstest]
        fn from_uuid_nil_fails() {
            assert!(SessionIdentifier::from_uuid(Uuid::nil()).is_err());
        }

        #[rstest]
        fn from_str_round_trips_display() {
            let identifier = SessionIdentifier::new();
            let parsed: SessionIdentifier = identifier.to_string().parse().unwrap();
            assert_eq!(parsed, identifier);
        }

        #[rstest]
        #[case("not-a-uuid")]
        #[case("00000000-0000-0000-0000-000000000000")]
        fn from_str_rejects(#[case] input: &str) {
            assert!(input.parse::<SessionIdentifier>().is_err());
        }

        #[rstest]
        fn serializes_hyphenated() {
            let identifier = SessionIdentifier::new();
            let json = serde_json::to_string(&identifier).unwrap();
            assert_eq!(json, format!("\"{identifier}\""));
        }
    }

    mod player_identifier {
        use super::*;

        #[rstest]
        fn trims_input() {
            let identifier = PlayerIdentifier::new("  ash ").unwrap();
            assert_eq!(identifier.as_str(), "ash");
        }

        #[rstest]
        #[case("")]
        #[case("  ")]
        fn blank_is_rejected(#[case] input: &str) {
            assert!(PlayerIdentifier::new(input).is_err());
        }

        #[rstest]
        fn length_limit() {
            assert!(PlayerIdentifier::new("p".repeat(100)).is_ok());
            assert!(PlayerIdentifier::new("p".repeat(101)).is_err());
        }

        #[rstest]
        fn generate_is_valid_and_unique() {
            let first = PlayerIdentifier::generate();
            let second = PlayerIdentifier::generate();
            assert_ne!(first, second);
            assert!(PlayerIdentifier::new(first.as_str()).is_ok());
        }
    }
}
