//! UpdateOrderStatusHandler - Admin command to move an order through
//! its lifecycle.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, StateMachine, Timestamp};
use crate::domain::order::{CancellationRecord, Order, OrderStatus, ShipmentRecord};
use crate::ports::{OrderStore, OrderTransition, TransitionAudit};

/// Command to change an order's status.
#[derive(Debug, Clone)]
pub struct UpdateOrderStatusCommand {
    pub order_id: OrderId,
    pub new_status: OrderStatus,
    /// Carrier tracking number, meaningful only when shipping.
    pub tracking_number: Option<String>,
    /// Estimated delivery date, meaningful only when shipping.
    pub estimated_delivery: Option<Timestamp>,
}

/// Result of a successful status change.
#[derive(Debug, Clone)]
pub struct UpdateOrderStatusResult {
    pub order: Order,
}

/// Handler for admin status updates.
///
/// The transition is validated against the status graph, then committed
/// conditionally on the status that was read: a concurrent admin who
/// got there first causes a `StatusConflict` instead of a double
/// transition or duplicate audit record.
pub struct UpdateOrderStatusHandler {
    store: Arc<dyn OrderStore>,
}

impl UpdateOrderStatusHandler {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateOrderStatusCommand,
    ) -> Result<UpdateOrderStatusResult, DomainError> {
        // 1. Load the current state.
        let order = self
            .store
            .find_by_id(&cmd.order_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::OrderNotFound, "Order not found"))?;

        // 2. Reject illegal edges before touching the store.
        let current = order.status();
        current.transition_to(cmd.new_status)?;

        // 3. Entering shipped or cancelled mints the one-time audit record.
        let audit = match cmd.new_status {
            OrderStatus::Shipped => TransitionAudit::Shipment(ShipmentRecord::new(
                cmd.order_id,
                cmd.tracking_number.clone(),
                cmd.estimated_delivery,
            )),
            OrderStatus::Cancelled => {
                TransitionAudit::Cancellation(CancellationRecord::new(cmd.order_id, None))
            }
            _ => TransitionAudit::None,
        };

        // 4. Commit conditionally on the status we read.
        let order = self
            .store
            .execute_transition(&OrderTransition {
                order_id: cmd.order_id,
                expected_status: current,
                new_status: cmd.new_status,
                audit,
            })
            .await?;

        Ok(UpdateOrderStatusResult { order })
    }
}
