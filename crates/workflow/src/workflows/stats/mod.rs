mod get_stats;
mod record_game;

pub use get_stats::get_stats;
pub use record_game::record_game;
pub(crate) use record_game::record_result;
