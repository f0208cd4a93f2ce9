use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use dexdle_domain::session::PlayerIdentifier;
use dexdle_domain::stats::PlayerStats;
use dexdle_workflow::ports::{PlayerStatsRepository, RepositoryResult};

// =============================================================================
// InMemoryStatsRepository
// =============================================================================

/// Per-player stats rows behind a single mutex.
///
/// Every upsert runs its mutation under the lock, so concurrent finishes for
/// the same player never lose an increment.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatsRepository {
    rows: Arc<Mutex<HashMap<PlayerIdentifier, PlayerStats>>>,
}

impl InMemoryStatsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStatsRepository for InMemoryStatsRepository {
    fn find(&self, player: &PlayerIdentifier) -> RepositoryResult<Option<PlayerStats>> {
        Ok(self.rows.lock().get(player).cloned())
    }

    fn upsert<F>(&self, player: &PlayerIdentifier, mutation: F) -> RepositoryResult<PlayerStats>
    where
        F: FnOnce(Option<PlayerStats>) -> PlayerStats,
    {
        let mut rows = self.rows.lock();
        let next = mutation(rows.remove(player));
        rows.insert(player.clone(), next.clone());
        Ok(next)
    }
}
