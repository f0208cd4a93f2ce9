use dexdle_domain::common::Timestamp;
use dexdle_domain::settings::MaxAttempts;
use dexdle_domain::stats::PlayerStats;
use lambars::pipe;

use super::UpdateSettingsCommand;
use crate::ports::{PlayerStatsRepository, WorkflowResult};

// =============================================================================
// Step 1: Validate Budget [Pure]
// =============================================================================

fn validate_budget(command: &UpdateSettingsCommand) -> WorkflowResult<MaxAttempts> {
    command.max_attempts().validate().map_err(|error| {
        tracing::warn!(player_id = %command.player(), error = %error, "rejected settings update");
        error.into()
    })
}

// =============================================================================
// Step 2: Store Budget [IO]
// =============================================================================

fn store_budget<P: PlayerStatsRepository>(
    stats: &P,
    command: &UpdateSettingsCommand,
    budget: MaxAttempts,
) -> WorkflowResult<MaxAttempts> {
    let now = Timestamp::now();
    let row = stats.upsert(command.player(), |existing| {
        existing
            .unwrap_or_else(|| PlayerStats::new(command.player().clone(), now))
            .with_max_attempts(budget, now)
    })?;
    Ok(row.max_attempts())
}

// =============================================================================
// UpdateSettings Workflow
// =============================================================================

/// Validates and stores a player's guess budget, returning the stored value.
///
/// Out-of-range or non-numeric input fails with a validation error and leaves
/// the stored budget untouched.
pub fn update_settings<P>(
    stats: &P,
) -> impl Fn(UpdateSettingsCommand) -> WorkflowResult<MaxAttempts> + '_
where
    P: PlayerStatsRepository,
{
    move |command| {
        let stored = pipe!(
            validate_budget(&command),
            |budget: WorkflowResult<MaxAttempts>| {
                budget.and_then(|budget| store_budget(stats, &command, budget))
            }
        )?;
        tracing::info!(
            player_id = %command.player(),
            max_attempts = stored.value(),
            "settings updated"
        );
        Ok(stored)
    }
}
