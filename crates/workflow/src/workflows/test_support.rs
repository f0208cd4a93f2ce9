//! Mock port implementations shared by the workflow unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use dexdle_domain::entity::{CategoryTag, Entity, Rank};
use dexdle_domain::session::{PlayerIdentifier, Session, SessionIdentifier};
use dexdle_domain::stats::PlayerStats;

use crate::errors::RepositoryError;
use crate::ports::{
    Catalog, PlayerStatsRepository, RandomSource, RepositoryResult, SessionRepository,
};

// =============================================================================
// Fixtures
// =============================================================================

pub fn pikachu() -> Entity {
    Entity::builder(25, "Pikachu")
        .secondary_name("pikachu")
        .category(CategoryTag::Electric)
        .size(0.4)
        .mass(6.0)
        .generation(1)
        .depth(1)
        .build()
        .unwrap()
}

pub fn raichu() -> Entity {
    Entity::builder(26, "Raichu")
        .secondary_name("raichu")
        .category(CategoryTag::Electric)
        .size(0.8)
        .mass(21.0)
        .generation(1)
        .depth(1)
        .build()
        .unwrap()
}

pub fn bulbasaur() -> Entity {
    Entity::builder(1, "Bulbasaur")
        .secondary_name("bulbasaur")
        .categories([CategoryTag::Grass, CategoryTag::Poison])
        .size(0.7)
        .mass(6.9)
        .generation(1)
        .depth(2)
        .build()
        .unwrap()
}

pub fn player() -> PlayerIdentifier {
    PlayerIdentifier::new("ash").unwrap()
}

// =============================================================================
// MockCatalog
// =============================================================================

#[derive(Clone, Default)]
pub struct MockCatalog {
    entities: Arc<Vec<Entity>>,
}

impl MockCatalog {
    pub fn new(mut entities: Vec<Entity>) -> Self {
        entities.sort_by_key(Entity::rank);
        Self {
            entities: Arc::new(entities),
        }
    }
}

impl Catalog for MockCatalog {
    fn ranks(&self) -> RepositoryResult<Vec<Rank>> {
        Ok(self.entities.iter().map(Entity::rank).collect())
    }

    fn find_by_rank(&self, rank: Rank) -> RepositoryResult<Option<Entity>> {
        Ok(self.entities.iter().find(|entity| entity.rank() == rank).cloned())
    }

    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Entity>> {
        Ok(self
            .entities
            .iter()
            .find(|entity| entity.answers_to(name))
            .cloned())
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.entities.len())
    }

    fn names(&self) -> RepositoryResult<Vec<String>> {
        Ok(self
            .entities
            .iter()
            .map(|entity| entity.name().to_string())
            .collect())
    }
}

// =============================================================================
// MockSessionRepository
// =============================================================================

#[derive(Clone, Default)]
pub struct MockSessionRepository {
    sessions: Arc<Mutex<HashMap<SessionIdentifier, Session>>>,
    fail_inserts: Arc<AtomicBool>,
    lock_delay: Duration,
}

impl MockSessionRepository {
    pub fn failing_inserts() -> Self {
        let repository = Self::default();
        repository.fail_inserts.store(true, Ordering::SeqCst);
        repository
    }

    /// Holds the lock for `delay` before each mutation runs, like a
    /// contended session.
    pub fn with_lock_delay(delay: Duration) -> Self {
        Self {
            lock_delay: delay,
            ..Self::default()
        }
    }

    pub fn get(&self, identifier: SessionIdentifier) -> Option<Session> {
        self.sessions.lock().unwrap().get(&identifier).cloned()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

impl SessionRepository for MockSessionRepository {
    fn insert(&self, session: Session) -> RepositoryResult<()> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(RepositoryError::new("insert", "storage offline"));
        }
        self.sessions
            .lock()
            .unwrap()
            .insert(session.identifier(), session);
        Ok(())
    }

    fn find_by_id(&self, identifier: SessionIdentifier) -> RepositoryResult<Option<Session>> {
        Ok(self.get(identifier))
    }

    fn update<T, E, F>(&self, identifier: SessionIdentifier, mutation: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&Session) -> Result<(Session, T), E>,
        E: From<RepositoryError>,
    {
        let mut sessions = self.sessions.lock().unwrap();
        let Some(current) = sessions.get(&identifier) else {
            return Ok(None);
        };
        if !self.lock_delay.is_zero() {
            thread::sleep(self.lock_delay);
        }
        let (next, output) = mutation(current)?;
        sessions.insert(identifier, next);
        Ok(Some(output))
    }

    fn list_by_player(&self, player: &PlayerIdentifier) -> RepositoryResult<Vec<Session>> {
        let mut sessions: Vec<Session> = self
            .sessions
            .lock()
            .unwrap()
            .values()
            .filter(|session| session.player() == player)
            .cloned()
            .collect();
        sessions.sort_by_key(|session| std::cmp::Reverse(session.created_at()));
        Ok(sessions)
    }
}

// =============================================================================
// MockStatsRepository
// =============================================================================

#[derive(Clone, Default)]
pub struct MockStatsRepository {
    rows: Arc<Mutex<HashMap<PlayerIdentifier, PlayerStats>>>,
    upserts: Arc<AtomicUsize>,
}

impl MockStatsRepository {
    pub fn with_row(stats: PlayerStats) -> Self {
        let repository = Self::default();
        repository
            .rows
            .lock()
            .unwrap()
            .insert(stats.player().clone(), stats);
        repository
    }

    pub fn get(&self, player: &PlayerIdentifier) -> Option<PlayerStats> {
        self.rows.lock().unwrap().get(player).cloned()
    }

    pub fn upsert_count(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

impl PlayerStatsRepository for MockStatsRepository {
    fn find(&self, player: &PlayerIdentifier) -> RepositoryResult<Option<PlayerStats>> {
        Ok(self.get(player))
    }

    fn upsert<F>(&self, player: &PlayerIdentifier, mutation: F) -> RepositoryResult<PlayerStats>
    where
        F: FnOnce(Option<PlayerStats>) -> PlayerStats,
    {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let next = mutation(rows.get(player).cloned());
        rows.insert(player.clone(), next.clone());
        Ok(next)
    }
}

// =============================================================================
// FixedRandom
// =============================================================================

/// Always picks the same index, clamped to the list length.
#[derive(Clone, Copy, Default)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick_index(&self, length: usize) -> usize {
        self.0.min(length - 1)
    }
}
