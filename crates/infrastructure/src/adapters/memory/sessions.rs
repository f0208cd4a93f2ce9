use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};

use dexdle_domain::session::{PlayerIdentifier, Session, SessionIdentifier};
use dexdle_workflow::errors::RepositoryError;
use dexdle_workflow::ports::{RepositoryResult, SessionRepository};

/// A stored session and its insertion number.
#[derive(Debug)]
struct SessionSlot {
    sequence: u64,
    session: Mutex<Session>,
}

// =============================================================================
// InMemorySessionRepository
// =============================================================================

/// Session store with one lock per session.
///
/// The map lock is only held long enough to find a session's slot, so
/// guesses against different sessions never wait on each other while two
/// guesses against the same session are serialized.
///
/// Sessions are numbered as they are inserted and listed by that number,
/// newest first, so history order never depends on clock resolution.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionIdentifier, Arc<SessionSlot>>>>,
    next_sequence: Arc<AtomicU64>,
}

impl InMemorySessionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    fn slot(&self, identifier: SessionIdentifier) -> Option<Arc<SessionSlot>> {
        self.sessions.read().get(&identifier).cloned()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, session: Session) -> RepositoryResult<()> {
        let identifier = session.identifier();
        let mut sessions = self.sessions.write();
        if sessions.contains_key(&identifier) {
            return Err(RepositoryError::new(
                "insert",
                format!("session {identifier} already exists"),
            ));
        }
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        sessions.insert(
            identifier,
            Arc::new(SessionSlot {
                sequence,
                session: Mutex::new(session),
            }),
        );
        Ok(())
    }

    fn find_by_id(&self, identifier: SessionIdentifier) -> RepositoryResult<Option<Session>> {
        Ok(self.slot(identifier).map(|slot| slot.session.lock().clone()))
    }

    fn update<T, E, F>(&self, identifier: SessionIdentifier, mutation: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&Session) -> Result<(Session, T), E>,
        E: From<RepositoryError>,
    {
        let Some(slot) = self.slot(identifier) else {
            return Ok(None);
        };
        let mut current = slot.session.lock();
        let (next, output) = mutation(&current)?;
        *current = next;
        Ok(Some(output))
    }

    fn list_by_player(&self, player: &PlayerIdentifier) -> RepositoryResult<Vec<Session>> {
        let slots: Vec<Arc<SessionSlot>> = self.sessions.read().values().cloned().collect();
        let mut sessions: Vec<(u64, Session)> = slots
            .iter()
            .map(|slot| (slot.sequence, slot.session.lock().clone()))
            .filter(|(_, session)| session.player() == player)
            .collect();
        sessions.sort_by_key(|(sequence, _)| Reverse(*sequence));
        Ok(sessions.into_iter().map(|(_, session)| session).collect())
    }
}
