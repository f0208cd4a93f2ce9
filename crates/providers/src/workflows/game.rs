use std::str::FromStr;
use std::sync::Arc;

use dexdle_domain::session::{PlayerIdentifier, SessionIdentifier};
use dexdle_domain::stats::StatsSummary;
use dexdle_workflow::errors::WorkflowError;
use dexdle_workflow::ports::{Catalog, PlayerStatsRepository, RandomSource, SessionRepository};
use dexdle_workflow::workflows::game::{GuessCommand, StartGameCommand};
use dexdle_workflow::workflows::settings::{BudgetInput, UpdateSettingsCommand};
use dexdle_workflow::workflows::{catalog, game, settings, stats};

use crate::dto::{GuessReport, SessionSummary, SettingsResponse, StartGameResponse};
use crate::errors::{ErrorReport, ProviderResult};

// =============================================================================
// Input Parsing
// =============================================================================

fn parse_player(raw: &str) -> ProviderResult<PlayerIdentifier> {
    PlayerIdentifier::new(raw).map_err(ErrorReport::from)
}

/// A session id that cannot be parsed cannot name a session either.
fn parse_session(raw: &str) -> ProviderResult<SessionIdentifier> {
    SessionIdentifier::from_str(raw.trim())
        .map_err(|_| WorkflowError::session_not_found(raw.trim()).into())
}

// =============================================================================
// GameProvider
// =============================================================================

/// Entry point for every game operation.
///
/// Holds the four ports and builds the matching workflow per call. Cloning is
/// cheap and clones share the same stores, so one provider can be handed to
/// many threads.
pub struct GameProvider<Entities, Sessions, Stats, Random>
where
    Entities: Catalog,
    Sessions: SessionRepository,
    Stats: PlayerStatsRepository,
    Random: RandomSource,
{
    catalog: Arc<Entities>,
    sessions: Arc<Sessions>,
    stats: Arc<Stats>,
    random: Arc<Random>,
}

impl<Entities, Sessions, Stats, Random> Clone for GameProvider<Entities, Sessions, Stats, Random>
where
    Entities: Catalog,
    Sessions: SessionRepository,
    Stats: PlayerStatsRepository,
    Random: RandomSource,
{
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            sessions: Arc::clone(&self.sessions),
            stats: Arc::clone(&self.stats),
            random: Arc::clone(&self.random),
        }
    }
}

impl<Entities, Sessions, Stats, Random> GameProvider<Entities, Sessions, Stats, Random>
where
    Entities: Catalog,
    Sessions: SessionRepository,
    Stats: PlayerStatsRepository,
    Random: RandomSource,
{
    pub fn new(
        catalog: Arc<Entities>,
        sessions: Arc<Sessions>,
        stats: Arc<Stats>,
        random: Arc<Random>,
    ) -> Self {
        Self {
            catalog,
            sessions,
            stats,
            random,
        }
    }

    /// Starts a game for `player` against a randomly drawn entity.
    ///
    /// # Errors
    ///
    /// `VALIDATION_ERROR` for a blank player id, `EMPTY_CATALOG` when there
    /// is nothing to draw.
    pub fn start_game(&self, player: &str) -> ProviderResult<StartGameResponse> {
        let player = parse_player(player)?;
        let workflow = game::start_game(&*self.catalog, &*self.sessions, &*self.random);
        let session = workflow(StartGameCommand::new(player))?;
        Ok(StartGameResponse::new(session.identifier()))
    }

    /// Scores `entity_name` against the session's target.
    ///
    /// # Errors
    ///
    /// `SESSION_NOT_FOUND` for an unknown, malformed or finished session id,
    /// `ENTITY_NOT_FOUND` when the name does not resolve.
    pub fn guess(&self, session_id: &str, entity_name: &str) -> ProviderResult<GuessReport> {
        let session = parse_session(session_id)?;
        let workflow = game::guess(&*self.catalog, &*self.sessions, &*self.stats);
        let outcome = workflow(GuessCommand::new(session, entity_name))?;
        Ok(GuessReport::from(outcome))
    }

    /// # Errors
    ///
    /// `VALIDATION_ERROR` for a blank player id.
    pub fn get_stats(&self, player: &str) -> ProviderResult<StatsSummary> {
        let player = parse_player(player)?;
        Ok(stats::get_stats(&*self.stats)(&player)?)
    }

    /// # Errors
    ///
    /// `VALIDATION_ERROR` for a blank player id.
    pub fn get_settings(&self, player: &str) -> ProviderResult<SettingsResponse> {
        let player = parse_player(player)?;
        let max_attempts = settings::get_settings(&*self.stats)(&player)?;
        Ok(SettingsResponse::from(max_attempts))
    }

    /// Stores a new attempt budget, given as a number or as text.
    ///
    /// # Errors
    ///
    /// `VALIDATION_ERROR` when the budget is not an integer in `3..=15`; the
    /// stored budget is left unchanged.
    pub fn update_settings(
        &self,
        player: &str,
        max_attempts: impl Into<BudgetInput>,
    ) -> ProviderResult<SettingsResponse> {
        let player = parse_player(player)?;
        let workflow = settings::update_settings(&*self.stats);
        let max_attempts = workflow(UpdateSettingsCommand::new(player, max_attempts))?;
        Ok(SettingsResponse::from(max_attempts))
    }

    /// Every entity's primary name, in rank order.
    ///
    /// # Errors
    ///
    /// `INTERNAL_ERROR` if the catalog cannot be read.
    pub fn autocomplete(&self) -> ProviderResult<Vec<String>> {
        Ok(catalog::autocomplete(&*self.catalog)()?)
    }

    /// The player's games, newest first.
    ///
    /// # Errors
    ///
    /// `VALIDATION_ERROR` for a blank player id.
    pub fn list_sessions(&self, player: &str) -> ProviderResult<Vec<SessionSummary>> {
        let player = parse_player(player)?;
        let sessions = game::list_sessions(&*self.sessions)(&player)?;
        Ok(sessions.iter().map(SessionSummary::from).collect())
    }
}
