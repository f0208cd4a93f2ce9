mod commands;
mod guess;
mod list_sessions;
mod start_game;

// Re-export command types
pub use commands::{GuessCommand, StartGameCommand};

// Re-export workflow functions
pub use guess::{GuessOutcome, guess};
pub use list_sessions::list_sessions;
pub use start_game::start_game;
