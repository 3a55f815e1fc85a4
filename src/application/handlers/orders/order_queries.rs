//! Read-side queries over orders.
//!
//! Customers may only see their own orders; the store is asked with
//! both IDs so ownership is enforced in one place. Admin listings are
//! separate methods rather than a flag.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, UserId};
use crate::domain::order::{CancellationRecord, Order};
use crate::ports::OrderStore;

/// Query handler for order listings and lookups.
pub struct OrderQueries {
    store: Arc<dyn OrderStore>,
}

impl OrderQueries {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Fetches one order owned by `user_id`.
    ///
    /// An order that exists but belongs to someone else is reported as
    /// not found, so the endpoint does not leak which IDs exist.
    pub async fn get_for_user(
        &self,
        order_id: &OrderId,
        user_id: &UserId,
    ) -> Result<Order, DomainError> {
        self.store
            .find_for_user(order_id, user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::OrderNotFound, "Order not found"))
    }

    /// Lists the caller's orders, newest first.
    pub async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError> {
        self.store.list_by_user(user_id).await
    }

    /// Lists every order, newest first. Admin only.
    pub async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        self.store.list_all().await
    }

    /// Lists cancellation records joined with their orders, newest
    /// first. Admin only.
    pub async fn list_cancelled(
        &self,
    ) -> Result<Vec<(CancellationRecord, Order)>, DomainError> {
        self.store.list_cancellations().await
    }
}
