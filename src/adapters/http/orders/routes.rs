//! HTTP routes for order endpoints.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{
    cancel_order, delete_order, get_order, list_all_orders, list_cancelled_orders, list_my_orders,
    place_order, update_order_status,
};

/// Creates the order router.
///
/// `/all` and `/cancelled` are static segments so they never collide
/// with the `/:id` capture.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(place_order))
        .route("/", get(list_my_orders))
        .route("/all", get(list_all_orders))
        .route("/cancelled", get(list_cancelled_orders))
        .route("/:id", get(get_order))
        .route("/:id", patch(update_order_status))
        .route("/:id", delete(delete_order))
        .route("/:id/cancel", post(cancel_order))
}
