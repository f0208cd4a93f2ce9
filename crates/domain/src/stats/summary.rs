use serde::Serialize;

/// Read model returned by the stats query.
///
/// `best_attempts` is `None` until the player clears a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total_games: u32,
    pub cleared_games: u32,
    pub clear_rate: f64,
    pub average_attempts: f64,
    pub best_attempts: Option<u32>,
}

impl StatsSummary {
    /// Summary for a player with no recorded games.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_games: 0,
            cleared_games: 0,
            clear_rate: 0.0,
            average_attempts: 0.0,
            best_attempts: None,
        }
    }
}

impl Default for StatsSummary {
    fn default() -> Self {
        Self::empty()
    }
}
