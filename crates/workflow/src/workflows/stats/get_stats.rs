use dexdle_domain::session::PlayerIdentifier;
use dexdle_domain::stats::StatsSummary;

use crate::ports::{PlayerStatsRepository, WorkflowResult};

/// Summarises a player's history; players without a row get zeros.
pub fn get_stats<P>(
    stats: &P,
) -> impl Fn(&PlayerIdentifier) -> WorkflowResult<StatsSummary> + '_
where
    P: PlayerStatsRepository,
{
    move |player| {
        Ok(stats
            .find(player)?
            .map_or_else(StatsSummary::empty, |row| row.summary()))
    }
}
