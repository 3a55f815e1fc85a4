//! HTTP adapter for the site settings singleton.

mod dto;
mod handlers;
mod routes;

pub use dto::{SettingsResponse, UpdateSettingsRequest};
pub use routes::settings_routes;
