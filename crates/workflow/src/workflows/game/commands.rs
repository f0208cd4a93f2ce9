use dexdle_domain::session::{PlayerIdentifier, SessionIdentifier};

// =============================================================================
// StartGameCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartGameCommand {
    player: PlayerIdentifier,
}

impl StartGameCommand {
    #[must_use]
    pub const fn new(player: PlayerIdentifier) -> Self {
        Self { player }
    }

    #[must_use]
    pub const fn player(&self) -> &PlayerIdentifier {
        &self.player
    }
}

// =============================================================================
// GuessCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessCommand {
    session: SessionIdentifier,
    entity_name: String,
}

impl GuessCommand {
    #[must_use]
    pub fn new(session: SessionIdentifier, entity_name: impl Into<String>) -> Self {
        Self {
            session,
            entity_name: entity_name.into(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> SessionIdentifier {
        self.session
    }

    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }
}
