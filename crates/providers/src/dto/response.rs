use serde::Serialize;

use dexdle_domain::common::Timestamp;
use dexdle_domain::comparison::GuessFeedback;
use dexdle_domain::entity::{CategoryTag, Entity};
use dexdle_domain::session::{Session, SessionIdentifier, SessionStatus};
use dexdle_domain::settings::MaxAttempts;
use dexdle_workflow::workflows::game::GuessOutcome;

// =============================================================================
// StartGameResponse
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartGameResponse {
    pub session_id: SessionIdentifier,
    pub message: String,
}

impl StartGameResponse {
    pub const MESSAGE: &'static str = "Game started!";

    #[must_use]
    pub fn new(session_id: SessionIdentifier) -> Self {
        Self {
            session_id,
            message: Self::MESSAGE.to_string(),
        }
    }
}

// =============================================================================
// EntityView
// =============================================================================

/// An entity's public attributes, revealed as the answer of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    pub rank: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_name: Option<String>,
    pub categories: Vec<CategoryTag>,
    pub size: f64,
    pub mass: f64,
    pub generation: u8,
    pub depth: u32,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        Self {
            rank: entity.rank().value(),
            name: entity.name().to_string(),
            secondary_name: entity.secondary_name().map(ToString::to_string),
            categories: entity.categories().iter().collect(),
            size: entity.size().value(),
            mass: entity.mass().value(),
            generation: entity.generation().value(),
            depth: entity.depth(),
        }
    }
}

// =============================================================================
// GuessReport
// =============================================================================

/// Everything a player sees after one guess.
///
/// The feedback fields are flattened into the top-level JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessReport {
    #[serde(flatten)]
    pub feedback: GuessFeedback,
    pub attempts: u32,
    pub status: SessionStatus,
    /// Present once the game is won or lost.
    pub answer: Option<EntityView>,
}

impl From<GuessOutcome> for GuessReport {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            attempts: outcome.session.attempts(),
            status: outcome.session.status(),
            answer: outcome.answer.as_ref().map(EntityView::from),
            feedback: outcome.feedback,
        }
    }
}

// =============================================================================
// SettingsResponse
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsResponse {
    pub max_attempts: u8,
}

impl From<MaxAttempts> for SettingsResponse {
    fn from(max_attempts: MaxAttempts) -> Self {
        Self {
            max_attempts: max_attempts.value(),
        }
    }
}

// =============================================================================
// SessionSummary
// =============================================================================

/// One row of a player's game history. The target stays hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub session_id: SessionIdentifier,
    pub status: SessionStatus,
    pub attempts: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.identifier(),
            status: session.status(),
            attempts: session.attempts(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn start_response_serializes_hyphenated_id() {
        let session_id: SessionIdentifier = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();

        let json = serde_json::to_value(StartGameResponse::new(session_id)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "session_id": "550e8400-e29b-41d4-a716-446655440000",
                "message": "Game started!"
            })
        );
    }

    #[rstest]
    fn entity_view_copies_public_attributes() {
        let entity = Entity::builder(6, "Charizard")
            .categories([CategoryTag::Fire, CategoryTag::Flying])
            .size(1.7)
            .mass(90.5)
            .depth(2)
            .build()
            .unwrap();

        let view = EntityView::from(&entity);

        assert_eq!(view.rank, 6);
        assert_eq!(view.categories, vec![CategoryTag::Fire, CategoryTag::Flying]);
        assert_eq!(view.generation, 1);
        assert_eq!(view.secondary_name, None);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("secondary_name").is_none());
        assert_eq!(json["categories"], serde_json::json!(["fire", "flying"]));
    }

    #[rstest]
    fn settings_response_reads_budget() {
        let response = SettingsResponse::from(MaxAttempts::new(12).unwrap());
        assert_eq!(response.max_attempts, 12);
    }
}
