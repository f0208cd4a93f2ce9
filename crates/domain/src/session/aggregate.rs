//! Session aggregate root.
//!
//! A session is one guessing game against a single target. Transitions are
//! pure: [`Session::submit_guess`] returns the next state and leaves the
//! original untouched, so a store can commit or drop it atomically.

use super::errors::SessionError;
use super::identifier::{PlayerIdentifier, SessionIdentifier};
use super::status::SessionStatus;
use crate::common::Timestamp;
use crate::comparison::GuessFeedback;
use crate::entity::{Entity, Rank};
use crate::settings::MaxAttempts;
use crate::stats::GameResult;

// =============================================================================
// Session
// =============================================================================

/// One guessing game.
///
/// # Invariants
///
/// - `attempts` only increases, by one per accepted guess
/// - `status` moves from `Active` to `Won` or `Lost` and then freezes
///
/// # Examples
///
/// ```
/// use dexdle_domain::common::Timestamp;
/// use dexdle_domain::entity::{CategoryTag, Entity};
/// use dexdle_domain::session::{PlayerIdentifier, Session, SessionIdentifier, SessionStatus};
/// use dexdle_domain::settings::MaxAttempts;
///
/// let pikachu = Entity::builder(25, "Pikachu")
///     .category(CategoryTag::Electric)
///     .build()
///     .unwrap();
/// let session = Session::start(
///     SessionIdentifier::new(),
///     PlayerIdentifier::new("ash").unwrap(),
///     pikachu.rank(),
///     Timestamp::now(),
/// );
///
/// let evaluation = session
///     .submit_guess(&pikachu, &pikachu, MaxAttempts::default(), Timestamp::now())
///     .unwrap();
/// assert_eq!(evaluation.session.status(), SessionStatus::Won);
/// assert_eq!(evaluation.session.attempts(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    identifier: SessionIdentifier,
    player: PlayerIdentifier,
    target: Rank,
    attempts: u32,
    status: SessionStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessEvaluation {
    /// The session after the guess.
    pub session: Session,
    pub feedback: GuessFeedback,
    /// Set when this guess ended the session.
    pub completed: Option<GameResult>,
}

impl Session {
    /// Opens an active session with no attempts.
    #[must_use]
    pub fn start(
        identifier: SessionIdentifier,
        player: PlayerIdentifier,
        target: Rank,
        now: Timestamp,
    ) -> Self {
        Self {
            identifier,
            player,
            target,
            attempts: 0,
            status: SessionStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    #[must_use]
    pub const fn identifier(&self) -> SessionIdentifier {
        self.identifier
    }

    #[must_use]
    pub const fn player(&self) -> &PlayerIdentifier {
        &self.player
    }

    #[must_use]
    pub const fn target(&self) -> Rank {
        self.target
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Scores `guessed` against the session's target and advances the state.
    ///
    /// The attempt counter always goes up, winning guess included. A correct
    /// name wins; otherwise reaching `budget` loses.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotActive`] once the session has finished, and
    /// [`SessionError::TargetMismatch`] if `target` is not this session's
    /// target entity.
    pub fn submit_guess(
        &self,
        guessed: &Entity,
        target: &Entity,
        budget: MaxAttempts,
        now: Timestamp,
    ) -> Result<GuessEvaluation, SessionError> {
        if !self.status.is_active() {
            return Err(SessionError::NotActive {
                session: self.identifier,
                status: self.status,
            });
        }
        if target.rank() != self.target {
            return Err(SessionError::TargetMismatch {
                expected: self.target,
                actual: target.rank(),
            });
        }

        let feedback = GuessFeedback::new(guessed, target);
        let attempts = self.attempts.saturating_add(1);
        let (status, completed) = if feedback.is_exact_hit() {
            (SessionStatus::Won, Some(GameResult::cleared(attempts)))
        } else if budget.is_exhausted_by(attempts) {
            (SessionStatus::Lost, Some(GameResult::failed(attempts)))
        } else {
            (SessionStatus::Active, None)
        };

        let session = Self {
            attempts,
            status,
            updated_at: now,
            ..self.clone()
        };

        Ok(GuessEvaluation {
            session,
            feedback,
            completed,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
