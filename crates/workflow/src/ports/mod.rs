use dexdle_domain::entity::{Entity, Rank};
use dexdle_domain::session::{PlayerIdentifier, Session, SessionIdentifier};
use dexdle_domain::stats::PlayerStats;

use crate::errors::RepositoryError;

// =============================================================================
// Type Aliases for Workflow Results
// =============================================================================

pub type WorkflowResult<T> = Result<T, crate::errors::WorkflowError>;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

// =============================================================================
// Catalog
// =============================================================================

/// Read-only entity catalog.
pub trait Catalog: Clone + Send + Sync + 'static {
    /// Every rank, ascending.
    fn ranks(&self) -> RepositoryResult<Vec<Rank>>;

    fn find_by_rank(&self, rank: Rank) -> RepositoryResult<Option<Entity>>;

    /// Resolves a guessed name: exact primary name first, then the
    /// secondary name ignoring case.
    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Entity>>;

    fn count(&self) -> RepositoryResult<usize>;

    /// Primary names ordered by rank.
    fn names(&self) -> RepositoryResult<Vec<String>>;
}

// =============================================================================
// SessionRepository
// =============================================================================

pub trait SessionRepository: Clone + Send + Sync + 'static {
    fn insert(&self, session: Session) -> RepositoryResult<()>;

    fn find_by_id(&self, identifier: SessionIdentifier) -> RepositoryResult<Option<Session>>;

    /// Runs `mutation` while holding the lock of one session.
    ///
    /// The session returned by the mutation replaces the stored one only when
    /// the mutation succeeds. Returns `Ok(None)` if no session has this id.
    fn update<T, E, F>(&self, identifier: SessionIdentifier, mutation: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&Session) -> Result<(Session, T), E>,
        E: From<RepositoryError>;

    /// The player's sessions, newest first.
    fn list_by_player(&self, player: &PlayerIdentifier) -> RepositoryResult<Vec<Session>>;
}

// =============================================================================
// PlayerStatsRepository
// =============================================================================

pub trait PlayerStatsRepository: Clone + Send + Sync + 'static {
    fn find(&self, player: &PlayerIdentifier) -> RepositoryResult<Option<PlayerStats>>;

    /// Atomically replaces the player's row with `mutation(current)`.
    ///
    /// `current` is `None` when the player has no row yet.
    fn upsert<F>(&self, player: &PlayerIdentifier, mutation: F) -> RepositoryResult<PlayerStats>
    where
        F: FnOnce(Option<PlayerStats>) -> PlayerStats;
}

// =============================================================================
// RandomSource
// =============================================================================

pub trait RandomSource: Clone + Send + Sync + 'static {
    /// A uniformly drawn index in `0..length`. `length` is never zero.
    fn pick_index(&self, length: usize) -> usize;
}
