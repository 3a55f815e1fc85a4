//! HTTP routes for the chat assistant.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{chat, chat_health};

/// Creates the chat router. Both endpoints are public.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(chat))
        .route("/health", get(chat_health))
}
