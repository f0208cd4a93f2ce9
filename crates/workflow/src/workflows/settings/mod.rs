mod commands;
mod get_settings;
mod update_settings;

pub use commands::{BudgetInput, UpdateSettingsCommand};
pub use get_settings::get_settings;
pub use update_settings::update_settings;
