//! DeleteOrderHandler - Admin command to remove an order outright.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId};
use crate::ports::OrderStore;

/// Command to delete an order.
#[derive(Debug, Clone)]
pub struct DeleteOrderCommand {
    pub order_id: OrderId,
}

/// Handler for hard order deletion. Audit records for the order are
/// kept; only the order row goes away.
pub struct DeleteOrderHandler {
    store: Arc<dyn OrderStore>,
}

impl DeleteOrderHandler {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteOrderCommand) -> Result<(), DomainError> {
        let deleted = self.store.delete(&cmd.order_id).await?;
        if !deleted {
            return Err(DomainError::new(ErrorCode::OrderNotFound, "Order not found"));
        }
        Ok(())
    }
}
