//! Game totals as a monoid.

use lambars::typeclass::{Monoid, Semigroup};
use serde::{Deserialize, Serialize};

use super::GameResult;

// =============================================================================
// GameTally
// =============================================================================

/// Totals over any number of finished games.
///
/// Tallies combine associatively, so a player's row is the combination of one
/// tally per game in any grouping.
///
/// # Examples
///
/// ```
/// use dexdle_domain::stats::{GameResult, GameTally};
/// use lambars::typeclass::Monoid;
///
/// let tally = GameTally::combine_all([
///     GameTally::from(GameResult::cleared(3)),
///     GameTally::from(GameResult::failed(8)),
///     GameTally::from(GameResult::cleared(5)),
/// ]);
///
/// assert_eq!(tally.total_games, 3);
/// assert_eq!(tally.cleared_games, 2);
/// assert_eq!(tally.total_attempts, 8);
/// assert_eq!(tally.best_attempts, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameTally {
    pub total_games: u32,
    pub cleared_games: u32,
    /// Attempts summed over cleared games only.
    pub total_attempts: u64,
    /// Fewest attempts in any cleared game.
    pub best_attempts: Option<u32>,
}

impl From<GameResult> for GameTally {
    fn from(result: GameResult) -> Self {
        if result.cleared {
            Self {
                total_games: 1,
                cleared_games: 1,
                total_attempts: u64::from(result.attempts),
                best_attempts: Some(result.attempts),
            }
        } else {
            Self {
                total_games: 1,
                ..Self::empty()
            }
        }
    }
}

impl Semigroup for GameTally {
    /// Adds the counters and keeps the smaller best.
    fn combine(self, other: Self) -> Self {
        Self {
            total_games: self.total_games.saturating_add(other.total_games),
            cleared_games: self.cleared_games.saturating_add(other.cleared_games),
            total_attempts: self.total_attempts.saturating_add(other.total_attempts),
            best_attempts: match (self.best_attempts, other.best_attempts) {
                (Some(left), Some(right)) => Some(left.min(right)),
                (left, right) => left.or(right),
            },
        }
    }
}

impl Monoid for GameTally {
    fn empty() -> Self {
        Self {
            total_games: 0,
            cleared_games: 0,
            total_attempts: 0,
            best_attempts: None,
        }
    }
}
