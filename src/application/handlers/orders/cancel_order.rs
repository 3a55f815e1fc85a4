//! CancelOrderHandler - Admin command to cancel an order with a
//! recorded reason.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId};
use crate::domain::order::{CancellationRecord, Order, OrderStatus};
use crate::ports::{OrderStore, OrderTransition, TransitionAudit};

/// Command to cancel an order.
#[derive(Debug, Clone)]
pub struct CancelOrderCommand {
    pub order_id: OrderId,
    /// Free-text reason; a missing or blank reason is recorded as
    /// "No reason provided".
    pub reason: Option<String>,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelOrderResult {
    pub order: Order,
    pub record: CancellationRecord,
}

/// Handler for order cancellation.
///
/// Cancellation is only allowed while the order is still pending or
/// processing. The cancellation record is written in the same
/// conditional transition that flips the status, so a lost race never
/// leaves a record without a matching status change.
pub struct CancelOrderHandler {
    store: Arc<dyn OrderStore>,
}

impl CancelOrderHandler {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CancelOrderCommand) -> Result<CancelOrderResult, DomainError> {
        // 1. Load the current state.
        let order = self
            .store
            .find_by_id(&cmd.order_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::OrderNotFound, "Order not found"))?;

        // 2. Shipped and settled orders stay as they are.
        if !order.can_cancel() {
            return Err(DomainError::new(
                ErrorCode::InvalidTransition,
                "Cannot cancel shipped or delivered orders",
            )
            .with_detail("status", order.status().as_str()));
        }

        // 3. Flip the status and write the audit record atomically.
        let record = CancellationRecord::new(cmd.order_id, cmd.reason.clone());
        let order = self
            .store
            .execute_transition(&OrderTransition {
                order_id: cmd.order_id,
                expected_status: order.status(),
                new_status: OrderStatus::Cancelled,
                audit: TransitionAudit::Cancellation(record.clone()),
            })
            .await?;

        Ok(CancelOrderResult { order, record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOrderStore;
    use crate::domain::foundation::{ProductId, UserId};
    use crate::domain::order::{
        DeliveryType, LineItem, ShippingAddress, DEFAULT_CANCELLATION_REASON,
    };
    use rust_decimal::Decimal;

    /// Seeds one order and walks it through `path` status by status.
    async fn seeded_store(path: &[OrderStatus]) -> (Arc<InMemoryOrderStore>, OrderId) {
        let store = Arc::new(InMemoryOrderStore::new());
        let order = Order::place(
            OrderId::new(),
            UserId::new("customer-1").unwrap(),
            None,
            vec![LineItem::new(ProductId::new(), 2, None, None).unwrap()],
            Decimal::new(4500, 0),
            ShippingAddress::new(
                DeliveryType::Home,
                "Oran".to_string(),
                "Bir El Djir".to_string(),
                Some("12 Rue des Oliviers".to_string()),
                "0660123456".to_string(),
                None,
                None,
            )
            .unwrap(),
        )
        .unwrap();
        let id = *order.id();
        store.insert(&order).await.unwrap();

        let mut current = OrderStatus::Pending;
        for &next in path {
            store
                .execute_transition(&OrderTransition {
                    order_id: id,
                    expected_status: current,
                    new_status: next,
                    audit: TransitionAudit::None,
                })
                .await
                .unwrap();
            current = next;
        }
        (store, id)
    }

    #[tokio::test]
    async fn cancels_pending_order_with_reason() {
        let (store, id) = seeded_store(&[]).await;
        let handler = CancelOrderHandler::new(store.clone());

        let result = handler
            .handle(CancelOrderCommand {
                order_id: id,
                reason: Some("Customer changed mind".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.order.status(), OrderStatus::Cancelled);
        assert_eq!(result.record.reason(), "Customer changed mind");
        assert_eq!(store.cancellation_records().len(), 1);
    }

    #[tokio::test]
    async fn missing_reason_is_recorded_as_placeholder() {
        let (store, id) = seeded_store(&[OrderStatus::Processing]).await;
        let handler = CancelOrderHandler::new(store);

        let result = handler
            .handle(CancelOrderCommand {
                order_id: id,
                reason: None,
            })
            .await
            .unwrap();

        assert_eq!(result.record.reason(), DEFAULT_CANCELLATION_REASON);
    }

    #[tokio::test]
    async fn shipped_order_cannot_be_cancelled() {
        let (store, id) = seeded_store(&[OrderStatus::Shipped]).await;
        let handler = CancelOrderHandler::new(store.clone());

        let result = handler
            .handle(CancelOrderCommand {
                order_id: id,
                reason: Some("too late".to_string()),
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::InvalidTransition);
        assert!(store.cancellation_records().is_empty());
    }

    #[tokio::test]
    async fn delivered_order_cannot_be_cancelled() {
        let (store, id) = seeded_store(&[OrderStatus::Shipped, OrderStatus::Delivered]).await;
        let handler = CancelOrderHandler::new(store);

        let result = handler
            .handle(CancelOrderCommand {
                order_id: id,
                reason: None,
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::InvalidTransition);
    }

    #[tokio::test]
    async fn unknown_order_reports_not_found() {
        let store = Arc::new(InMemoryOrderStore::new());
        let handler = CancelOrderHandler::new(store);

        let result = handler
            .handle(CancelOrderCommand {
                order_id: OrderId::new(),
                reason: None,
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::OrderNotFound);
    }
}
