use dexdle_domain::common::Timestamp;
use dexdle_domain::session::PlayerIdentifier;
use dexdle_domain::stats::{GameResult, PlayerStats};

use crate::ports::{PlayerStatsRepository, WorkflowResult};

// =============================================================================
// Step: Fold Result Into Row [IO]
// =============================================================================

/// Creates the row on first use and folds `result` into it.
pub(crate) fn record_result<P: PlayerStatsRepository>(
    stats: &P,
    player: &PlayerIdentifier,
    result: GameResult,
    now: Timestamp,
) -> WorkflowResult<PlayerStats> {
    let row = stats
        .upsert(player, |existing| {
            existing
                .unwrap_or_else(|| PlayerStats::new(player.clone(), now))
                .record(result, now)
        })
        .inspect_err(|error| {
            tracing::error!(player_id = %player, error = %error, "failed to record game result");
        })?;
    Ok(row)
}

// =============================================================================
// RecordGame Workflow
// =============================================================================

/// Records one finished game for a player.
///
/// Not idempotent: the guess workflow calls this exactly once per session
/// that reaches a terminal state.
pub fn record_game<P>(
    stats: &P,
) -> impl Fn(&PlayerIdentifier, GameResult) -> WorkflowResult<PlayerStats> + '_
where
    P: PlayerStatsRepository,
{
    move |player, result| record_result(stats, player, result, Timestamp::now())
}
