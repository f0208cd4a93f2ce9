//! Cross-session performance aggregate for one player.

mod aggregate;
mod summary;
mod tally;

pub use aggregate::{GameResult, PlayerStats};
pub use summary::StatsSummary;
pub use tally::GameTally;
