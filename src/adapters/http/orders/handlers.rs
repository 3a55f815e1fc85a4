//! HTTP handlers for order endpoints.
//!
//! Customer routes use `RequireAuth` and are scoped to the caller's own
//! orders; admin routes use `RequireAdmin`. Body validation lives in
//! the domain, so these handlers only parse identifiers and map DTOs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{RequireAdmin, RequireAuth};
use crate::adapters::http::AppState;
use crate::application::handlers::orders::{
    CancelOrderCommand, DeleteOrderCommand, PlaceOrderCommand, UpdateOrderStatusCommand,
};
use crate::domain::foundation::{DomainError, OrderId, Timestamp, ValidationError};
use crate::domain::order::{LineItem, OrderStatus, ShippingAddress};

use super::dto::{
    CancelOrderRequest, CancelOrderResponse, CancellationRecordResponse, CancelledOrderResponse,
    MessageResponse, OrderItemRequest, OrderResponse, PlaceOrderRequest, ShippingAddressRequest,
    UpdateStatusRequest,
};

/// POST /api/orders - Place an order for the authenticated customer.
pub async fn place_order(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<impl IntoResponse + std::fmt::Debug, ApiError> {
    let items = parse_items(&request.products)?;
    let shipping_address = parse_shipping(request.shipping_address)?;

    let result = state
        .place_order
        .handle(PlaceOrderCommand {
            user_id: user.id,
            customer_email: user.email,
            items,
            total_amount: request.total_amount,
            shipping_address,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse::from(&result.order)),
    ))
}

/// GET /api/orders - The caller's own orders, newest first.
pub async fn list_my_orders(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let orders = state.order_queries.list_for_user(&user.id).await?;
    Ok(Json(
        orders.iter().map(OrderResponse::from).collect::<Vec<_>>(),
    ))
}

/// GET /api/orders/all - Every order, newest first. Admin only.
pub async fn list_all_orders(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let orders = state.order_queries.list_all().await?;
    Ok(Json(
        orders.iter().map(OrderResponse::from).collect::<Vec<_>>(),
    ))
}

/// GET /api/orders/cancelled - Cancellation records with their orders.
/// Admin only.
pub async fn list_cancelled_orders(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let cancelled = state.order_queries.list_cancelled().await?;
    Ok(Json(
        cancelled
            .iter()
            .map(CancelledOrderResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/orders/:id - One of the caller's own orders.
///
/// An order owned by someone else reads as 404, not 403, so the
/// endpoint does not reveal which IDs exist.
pub async fn get_order(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse + std::fmt::Debug, ApiError> {
    let id = parse_order_id(&id)?;
    let order = state.order_queries.get_for_user(&id, &user.id).await?;
    Ok(Json(OrderResponse::from(&order)))
}

/// PATCH /api/orders/:id - Move an order along its lifecycle. Admin only.
pub async fn update_order_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse + std::fmt::Debug, ApiError> {
    let order_id = parse_order_id(&id)?;
    let new_status: OrderStatus = request.status.parse().map_err(DomainError::from)?;

    let result = state
        .update_order_status
        .handle(UpdateOrderStatusCommand {
            order_id,
            new_status,
            tracking_number: request.tracking_number,
            estimated_delivery: request.estimated_delivery.map(Timestamp::from_datetime),
        })
        .await?;

    Ok(Json(OrderResponse::from(&result.order)))
}

/// POST /api/orders/:id/cancel - Cancel with an optional reason. Admin only.
pub async fn cancel_order(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
    Json(request): Json<CancelOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id = parse_order_id(&id)?;

    let result = state
        .cancel_order
        .handle(CancelOrderCommand {
            order_id,
            reason: request.reason,
        })
        .await?;

    Ok(Json(CancelOrderResponse {
        message: "Order cancelled successfully".to_string(),
        cancelled_order: CancellationRecordResponse::from(&result.record),
    }))
}

/// DELETE /api/orders/:id - Remove an order outright. Admin only.
pub async fn delete_order(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id = parse_order_id(&id)?;
    state.delete_order.handle(DeleteOrderCommand { order_id }).await?;

    Ok(Json(MessageResponse {
        message: "Order deleted successfully".to_string(),
    }))
}

fn parse_order_id(raw: &str) -> Result<OrderId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError(DomainError::from(ValidationError::invalid_format(
            "id",
            "expected an order UUID",
        )))
    })
}

fn parse_items(items: &[OrderItemRequest]) -> Result<Vec<LineItem>, ApiError> {
    items
        .iter()
        .map(|item| {
            let product_id = item.product.parse().map_err(|_| {
                DomainError::from(ValidationError::invalid_format(
                    "product",
                    "expected a product UUID",
                ))
            })?;
            LineItem::new(
                product_id,
                item.quantity,
                item.size.clone(),
                item.color.clone(),
            )
            .map_err(DomainError::from)
        })
        .collect::<Result<Vec<_>, DomainError>>()
        .map_err(ApiError)
}

fn parse_shipping(request: Option<ShippingAddressRequest>) -> Result<ShippingAddress, ApiError> {
    let request = request.ok_or_else(|| {
        ApiError(DomainError::validation(
            "shipping_address",
            "Complete shipping address is required",
        ))
    })?;

    let delivery_type = request.delivery_type.parse().map_err(DomainError::from)?;
    ShippingAddress::new(
        delivery_type,
        request.wilaya,
        request.daira,
        request.home_address,
        request.phone_number,
        request.notes,
        request.country,
    )
    .map_err(ApiError::from)
}
