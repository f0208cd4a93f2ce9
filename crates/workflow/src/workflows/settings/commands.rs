use dexdle_domain::common::ValidationError;
use dexdle_domain::session::PlayerIdentifier;
use dexdle_domain::settings::MaxAttempts;

// =============================================================================
// BudgetInput
// =============================================================================

/// A requested guess budget as it arrived at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetInput {
    Number(i64),
    Text(String),
}

impl BudgetInput {
    /// Parses and range-checks the request.
    pub fn validate(&self) -> Result<MaxAttempts, ValidationError> {
        match self {
            Self::Number(value) => MaxAttempts::new(*value),
            Self::Text(text) => MaxAttempts::parse(text),
        }
    }
}

impl From<i64> for BudgetInput {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for BudgetInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

// =============================================================================
// UpdateSettingsCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSettingsCommand {
    player: PlayerIdentifier,
    max_attempts: BudgetInput,
}

impl UpdateSettingsCommand {
    #[must_use]
    pub fn new(player: PlayerIdentifier, max_attempts: impl Into<BudgetInput>) -> Self {
        Self {
            player,
            max_attempts: max_attempts.into(),
        }
    }

    #[must_use]
    pub const fn player(&self) -> &PlayerIdentifier {
        &self.player
    }

    #[must_use]
    pub const fn max_attempts(&self) -> &BudgetInput {
        &self.max_attempts
    }
}
