use dexdle_domain::session::PlayerIdentifier;
use dexdle_domain::settings::MaxAttempts;

use crate::ports::{PlayerStatsRepository, WorkflowResult};

/// The player's guess budget, or the default when none was ever stored.
pub fn get_settings<P>(
    stats: &P,
) -> impl Fn(&PlayerIdentifier) -> WorkflowResult<MaxAttempts> + '_
where
    P: PlayerStatsRepository,
{
    move |player| {
        Ok(stats
            .find(player)?
            .map_or_else(MaxAttempts::default, |row| row.max_attempts()))
    }
}
