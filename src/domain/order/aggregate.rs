//! Order aggregate entity.
//!
//! Orders are placed by authenticated storefront customers and then
//! driven through the status graph by admin commands. Audit records
//! for shipping and cancellation are separate entities; the aggregate
//! holds only the mutable order state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::shipping::ShippingAddress;
use super::status::OrderStatus;
use crate::domain::foundation::{DomainError, OrderId, StateMachine, Timestamp, UserId};

/// Order aggregate - a customer purchase moving through fulfilment.
///
/// # Invariants
///
/// - `items` is non-empty
/// - `total_amount` is strictly positive
/// - `status` only changes along the `OrderStatus` transition graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for this order.
    id: OrderId,

    /// Customer who placed the order.
    user_id: UserId,

    /// Customer contact email captured at placement, when known.
    customer_email: Option<String>,

    /// Ordered products with quantity and variant choices.
    items: Vec<LineItem>,

    /// Total charged, in dinars. Client-supplied and validated positive.
    total_amount: Decimal,

    /// Destination and contact details.
    shipping_address: ShippingAddress,

    /// Current lifecycle status.
    status: OrderStatus,

    /// When the order was placed.
    created_at: Timestamp,
}

impl Order {
    /// Place a new order with status `pending`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if items are empty or the total is not positive
    pub fn place(
        id: OrderId,
        user_id: UserId,
        customer_email: Option<String>,
        items: Vec<LineItem>,
        total_amount: Decimal,
        shipping_address: ShippingAddress,
    ) -> Result<Self, DomainError> {
        if items.is_empty() {
            return Err(DomainError::validation("items", "Products are required"));
        }
        if total_amount <= Decimal::ZERO {
            return Err(DomainError::validation(
                "total_amount",
                "Valid total amount is required",
            ));
        }

        Ok(Self {
            id,
            user_id,
            customer_email,
            items,
            total_amount,
            shipping_address,
            status: OrderStatus::Pending,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute an order from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: OrderId,
        user_id: UserId,
        customer_email: Option<String>,
        items: Vec<LineItem>,
        total_amount: Decimal,
        shipping_address: ShippingAddress,
        status: OrderStatus,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            customer_email,
            items,
            total_amount,
            shipping_address,
            status,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the order ID.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the customer's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the customer contact email captured at placement.
    pub fn customer_email(&self) -> Option<&str> {
        self.customer_email.as_deref()
    }

    /// Returns the line items.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the order total in dinars.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Returns the shipping address.
    pub fn shipping_address(&self) -> &ShippingAddress {
        &self.shipping_address
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns when the order was placed.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves the order to `next`, enforcing the transition graph.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` when `next` is not a legal successor
    pub fn apply_status(&mut self, next: OrderStatus) -> Result<(), DomainError> {
        self.status = self.status.transition_to(next)?;
        Ok(())
    }

    /// Returns true while cancellation is still permitted.
    pub fn can_cancel(&self) -> bool {
        self.status.can_cancel()
    }

    /// Returns true once the order can no longer change status.
    pub fn is_settled(&self) -> bool {
        self.status.is_terminal()
    }
}
