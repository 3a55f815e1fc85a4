//! HTTP DTOs for order endpoints.
//!
//! Request structs lean on `#[serde(default)]` for the fields the
//! domain validates itself, so a missing `products` array surfaces as
//! "Products are required" rather than a bare deserialization error.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::{CancellationRecord, LineItem, Order, ShippingAddress};

/// One product entry in an order placement request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    /// Product ID as a UUID string.
    pub product: String,
    #[serde(default)]
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Shipping address as submitted by the checkout form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddressRequest {
    /// `office` or `home`.
    #[serde(default)]
    pub delivery_type: String,
    #[serde(default)]
    pub wilaya: String,
    #[serde(default)]
    pub daira: String,
    pub home_address: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    pub notes: Option<String>,
    pub country: Option<String>,
}

/// Body of POST /api/orders.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub products: Vec<OrderItemRequest>,
    #[serde(default)]
    pub total_amount: Decimal,
    pub shipping_address: Option<ShippingAddressRequest>,
}

/// Body of PATCH /api/orders/:id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: String,
    /// Carrier tracking number, meaningful only when shipping.
    pub tracking_number: Option<String>,
    /// Estimated delivery date, meaningful only when shipping.
    pub estimated_delivery: Option<DateTime<Utc>>,
}

/// Body of POST /api/orders/:id/cancel.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CancelOrderRequest {
    pub reason: Option<String>,
}

/// One line item in an order response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product: String,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl From<&LineItem> for OrderItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            product: item.product_id().to_string(),
            quantity: item.quantity(),
            size: item.size().map(str::to_string),
            color: item.color().map(str::to_string),
        }
    }
}

/// Shipping address as returned to the storefront.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddressResponse {
    pub delivery_type: String,
    pub wilaya: String,
    pub daira: String,
    pub home_address: Option<String>,
    pub phone_number: String,
    pub notes: Option<String>,
    pub country: String,
}

impl From<&ShippingAddress> for ShippingAddressResponse {
    fn from(address: &ShippingAddress) -> Self {
        Self {
            delivery_type: address.delivery_type().as_str().to_string(),
            wilaya: address.wilaya().to_string(),
            daira: address.daira().to_string(),
            home_address: address.home_address().map(str::to_string),
            phone_number: address.phone_number().to_string(),
            notes: address.notes().map(str::to_string),
            country: address.country().to_string(),
        }
    }
}

/// An order as the storefront sees it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    /// Owning user's ID.
    pub user: String,
    pub customer_email: Option<String>,
    pub products: Vec<OrderItemResponse>,
    pub total_amount: Decimal,
    pub shipping_address: ShippingAddressResponse,
    pub status: String,
    pub created_at: String,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            user: order.user_id().as_str().to_string(),
            customer_email: order.customer_email().map(str::to_string),
            products: order.items().iter().map(OrderItemResponse::from).collect(),
            total_amount: order.total_amount(),
            shipping_address: ShippingAddressResponse::from(order.shipping_address()),
            status: order.status().as_str().to_string(),
            created_at: order.created_at().to_rfc3339(),
        }
    }
}

/// The audit record minted by a cancellation, with the order referenced
/// by ID only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationRecordResponse {
    pub id: String,
    pub original_order: String,
    pub reason: String,
    pub created_at: String,
}

impl From<&CancellationRecord> for CancellationRecordResponse {
    fn from(record: &CancellationRecord) -> Self {
        Self {
            id: record.id().to_string(),
            original_order: record.order_id().to_string(),
            reason: record.reason().to_string(),
            created_at: record.created_at().to_rfc3339(),
        }
    }
}

/// Body returned by POST /api/orders/:id/cancel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderResponse {
    pub message: String,
    pub cancelled_order: CancellationRecordResponse,
}

/// One entry in the admin cancelled-orders listing, with the original
/// order embedded in full.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledOrderResponse {
    pub id: String,
    pub reason: String,
    pub created_at: String,
    pub original_order: OrderResponse,
}

impl From<&(CancellationRecord, Order)> for CancelledOrderResponse {
    fn from((record, order): &(CancellationRecord, Order)) -> Self {
        Self {
            id: record.id().to_string(),
            reason: record.reason().to_string(),
            created_at: record.created_at().to_rfc3339(),
            original_order: OrderResponse::from(order),
        }
    }
}

/// Plain confirmation body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{OrderId, ProductId, UserId};
    use crate::domain::order::DeliveryType;

    fn order() -> Order {
        Order::place(
            OrderId::new(),
            UserId::new("customer-1").unwrap(),
            Some("buyer@example.com".to_string()),
            vec![LineItem::new(
                ProductId::new(),
                2,
                Some("L".to_string()),
                None,
            )
            .unwrap()],
            Decimal::new(4500, 0),
            ShippingAddress::new(
                DeliveryType::Office,
                "Algiers".to_string(),
                "Bab El Oued".to_string(),
                None,
                "0555000000".to_string(),
                None,
                None,
            )
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn order_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(OrderResponse::from(&order())).unwrap();

        assert_eq!(json["user"], "customer-1");
        assert_eq!(json["customerEmail"], "buyer@example.com");
        assert_eq!(json["totalAmount"], "4500");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["products"][0]["quantity"], 2);
        assert_eq!(json["products"][0]["size"], "L");
        assert_eq!(json["shippingAddress"]["deliveryType"], "office");
        assert_eq!(json["shippingAddress"]["country"], "Algeria");
    }

    #[test]
    fn place_request_deserializes_checkout_body() {
        let body = r#"{
            "products": [{"product": "6e1e9d3c-30dc-4dd1-a52f-3b2a2d198d3b", "quantity": 1, "color": "Black"}],
            "totalAmount": 2600,
            "shippingAddress": {
                "deliveryType": "home",
                "wilaya": "Oran",
                "daira": "Es Senia",
                "homeAddress": "12 Rue des Oliviers",
                "phoneNumber": "0660123456"
            }
        }"#;

        let request: PlaceOrderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.products.len(), 1);
        assert_eq!(request.products[0].color.as_deref(), Some("Black"));
        assert_eq!(request.total_amount, Decimal::new(2600, 0));
        let address = request.shipping_address.unwrap();
        assert_eq!(address.delivery_type, "home");
        assert_eq!(address.home_address.as_deref(), Some("12 Rue des Oliviers"));
    }

    #[test]
    fn place_request_tolerates_missing_products() {
        let request: PlaceOrderRequest = serde_json::from_str("{}").unwrap();
        assert!(request.products.is_empty());
        assert_eq!(request.total_amount, Decimal::ZERO);
        assert!(request.shipping_address.is_none());
    }

    #[test]
    fn cancel_request_reason_is_optional() {
        let request: CancelOrderRequest = serde_json::from_str("{}").unwrap();
        assert!(request.reason.is_none());
    }

    #[test]
    fn cancelled_listing_embeds_the_original_order() {
        let order = order();
        let record = CancellationRecord::new(*order.id(), Some("duplicate".to_string()));
        let json =
            serde_json::to_value(CancelledOrderResponse::from(&(record, order))).unwrap();

        assert_eq!(json["reason"], "duplicate");
        assert_eq!(json["originalOrder"]["status"], "pending");
        assert_eq!(json["originalOrder"]["totalAmount"], "4500");
    }
}
