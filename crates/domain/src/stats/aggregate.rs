//! `PlayerStats` aggregate.
//!
//! All operations return a new value; the caller decides when to persist it.

use lambars::typeclass::Semigroup;
use serde::{Deserialize, Serialize};

use super::{GameTally, StatsSummary};
use crate::common::Timestamp;
use crate::session::PlayerIdentifier;
use crate::settings::MaxAttempts;

// =============================================================================
// GameResult
// =============================================================================

/// Outcome of one finished session, fed into [`PlayerStats::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub cleared: bool,
    pub attempts: u32,
}

impl GameResult {
    #[must_use]
    pub const fn cleared(attempts: u32) -> Self {
        Self {
            cleared: true,
            attempts,
        }
    }

    #[must_use]
    pub const fn failed(attempts: u32) -> Self {
        Self {
            cleared: false,
            attempts,
        }
    }
}

// =============================================================================
// PlayerStats
// =============================================================================

/// Per-player totals and the player's guess budget.
///
/// # Invariants
///
/// - `cleared_games <= total_games`
/// - `best_attempts` never increases once set
/// - `total_attempts` only counts cleared games
///
/// The totals are a [`GameTally`]; recording a game combines it with the
/// tally of that one game.
///
/// # Examples
///
/// ```
/// use dexdle_domain::common::Timestamp;
/// use dexdle_domain::session::PlayerIdentifier;
/// use dexdle_domain::stats::{GameResult, PlayerStats};
///
/// let now = Timestamp::now();
/// let stats = PlayerStats::new(PlayerIdentifier::new("ash").unwrap(), now)
///     .record(GameResult::cleared(3), now)
///     .record(GameResult::failed(8), now)
///     .record(GameResult::cleared(5), now);
///
/// assert!((stats.clear_rate() - 66.7).abs() < f64::EPSILON);
/// assert!((stats.average_attempts() - 4.0).abs() < f64::EPSILON);
/// assert_eq!(stats.best_attempts(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    player: PlayerIdentifier,
    #[serde(flatten)]
    tally: GameTally,
    max_attempts: MaxAttempts,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PlayerStats {
    /// A fresh row with no games and the default budget.
    #[must_use]
    pub fn new(player: PlayerIdentifier, now: Timestamp) -> Self {
        Self {
            player,
            tally: GameTally::default(),
            max_attempts: MaxAttempts::default(),
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    #[must_use]
    pub const fn player(&self) -> &PlayerIdentifier {
        &self.player
    }

    #[must_use]
    pub const fn tally(&self) -> GameTally {
        self.tally
    }

    #[must_use]
    pub const fn total_games(&self) -> u32 {
        self.tally.total_games
    }

    #[must_use]
    pub const fn cleared_games(&self) -> u32 {
        self.tally.cleared_games
    }

    #[must_use]
    pub const fn total_attempts(&self) -> u64 {
        self.tally.total_attempts
    }

    #[must_use]
    pub const fn best_attempts(&self) -> Option<u32> {
        self.tally.best_attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> MaxAttempts {
        self.max_attempts
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

    /// Folds one finished game into the totals.
    ///
    /// Call exactly once per finished session; recording is not idempotent.
    #[must_use]
    pub fn record(self, result: GameResult, now: Timestamp) -> Self {
        Self {
            tally: self.tally.combine(GameTally::from(result)),
            updated_at: now,
            ..self
        }
    }

    #[must_use]
    pub fn with_max_attempts(self, max_attempts: MaxAttempts, now: Timestamp) -> Self {
        Self {
            max_attempts,
            updated_at: now,
            ..self
        }
    }

    // =========================================================================
    // Derived metrics
    // =========================================================================

    /// Percentage of games cleared, to one decimal place.
    #[must_use]
    pub fn clear_rate(&self) -> f64 {
        if self.tally.total_games == 0 {
            return 0.0;
        }
        round_to_tenth(
            100.0 * f64::from(self.tally.cleared_games) / f64::from(self.tally.total_games),
        )
    }

    /// Mean attempts over cleared games, to one decimal place.
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.tally.cleared_games == 0 {
            return 0.0;
        }
        // u64 -> f64 is exact for any realistic attempt total
        #[allow(clippy::cast_precision_loss)]
        let total = self.tally.total_attempts as f64;
        round_to_tenth(total / f64::from(self.tally.cleared_games))
    }

    #[must_use]
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            total_games: self.tally.total_games,
            cleared_games: self.tally.cleared_games,
            clear_rate: self.clear_rate(),
            average_attempts: self.average_attempts(),
            best_attempts: self.tally.best_attempts,
        }
    }
}

/// Ties go to the even tenth, so 2.25 becomes 2.2 and 3.75 becomes 3.8.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
