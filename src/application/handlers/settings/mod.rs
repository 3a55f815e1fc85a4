//! Site settings commands.

mod get_settings;
mod update_settings;

pub use get_settings::GetSettingsHandler;
pub use update_settings::{UpdateSettingsCommand, UpdateSettingsHandler};
