//! PlaceOrderHandler - Command handler for placing new orders.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::handlers::notifications::OrderNotifier;
use crate::domain::foundation::{DomainError, OrderId, UserId};
use crate::domain::order::{LineItem, Order, ShippingAddress};
use crate::ports::OrderStore;

/// Command to place a new order.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    pub user_id: UserId,
    pub customer_email: Option<String>,
    pub items: Vec<LineItem>,
    pub total_amount: Decimal,
    pub shipping_address: ShippingAddress,
}

/// Result of successful order placement.
#[derive(Debug, Clone)]
pub struct PlaceOrderResult {
    pub order: Order,
}

/// Handler for placing orders.
///
/// Persists the order first, then schedules the admin notification as
/// a detached task; the response never waits on SMTP.
pub struct PlaceOrderHandler {
    store: Arc<dyn OrderStore>,
    notifier: Arc<OrderNotifier>,
}

impl PlaceOrderHandler {
    pub fn new(store: Arc<dyn OrderStore>, notifier: Arc<OrderNotifier>) -> Self {
        Self { store, notifier }
    }

    pub async fn handle(&self, cmd: PlaceOrderCommand) -> Result<PlaceOrderResult, DomainError> {
        // 1. Build the aggregate; all input validation lives there.
        let order = Order::place(
            OrderId::new(),
            cmd.user_id,
            cmd.customer_email,
            cmd.items,
            cmd.total_amount,
            cmd.shipping_address,
        )?;

        // 2. Persist.
        self.store.insert(&order).await?;

        // 3. Best-effort notification, detached from the request path.
        let notifier = self.notifier.clone();
        let placed = order.clone();
        tokio::spawn(async move {
            notifier.notify_new_order(&placed).await;
        });

        Ok(PlaceOrderResult { order })
    }
}
