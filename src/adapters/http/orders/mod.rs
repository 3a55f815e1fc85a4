//! HTTP adapter for order placement and lifecycle management.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CancelOrderRequest, CancelOrderResponse, CancelledOrderResponse, OrderResponse,
    PlaceOrderRequest, UpdateStatusRequest,
};
pub use routes::order_routes;
