//! HTTP routes for catalog endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{browse_products, get_product};

/// Creates the catalog router. Both endpoints are public.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(browse_products))
        .route("/:id", get(get_product))
}
