//! HTTP routes for site settings.

use axum::routing::{get, put};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{get_settings, update_settings};

/// Creates the settings router. Reads are public; writes require the
/// admin role via the `RequireAdmin` extractor.
pub fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings))
        .route("/", put(update_settings))
}
