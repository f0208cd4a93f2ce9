use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// SessionStatus
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_is_active() {
        assert_eq!(SessionStatus::default(), SessionStatus::Active);
    }

    #[rstest]
    #[case(SessionStatus::Active, true, false)]
    #[case(SessionStatus::Won, false, true)]
    #[case(SessionStatus::Lost, false, true)]
    fn predicates(#[case] status: SessionStatus, #[case] active: bool, #[case] terminal: bool) {
        assert_eq!(status.is_active(), active);
        assert_eq!(status.is_terminal(), terminal);
    }

    #[rstest]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SessionStatus::Won).unwrap(), "\"won\"");
    }
}
