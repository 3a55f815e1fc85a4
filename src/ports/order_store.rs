//! Order store port (write side).
//!
//! Status changes go through [`OrderTransition`], a compare-and-set
//! unit: the store commits the new status only while the order still
//! holds the status the caller read, and writes any audit record in
//! the same transaction. This closes the read/audit/write race the
//! separate-steps approach would leave open.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderId, UserId};
use crate::domain::order::{CancellationRecord, Order, OrderStatus, ShipmentRecord};

/// Audit record to persist atomically with a status change.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionAudit {
    /// Plain status move, nothing to record.
    None,
    /// Transition into `shipped`.
    Shipment(ShipmentRecord),
    /// Transition into `cancelled`.
    Cancellation(CancellationRecord),
}

/// One atomic status change, conditional on the previously read status.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTransition {
    /// Order being moved.
    pub order_id: OrderId,

    /// Status the caller observed; the store must refuse to commit if
    /// the row has moved on since.
    pub expected_status: OrderStatus,

    /// Status to commit.
    pub new_status: OrderStatus,

    /// Audit record created by this transition, if any.
    pub audit: TransitionAudit,
}

/// Persistence port for Order aggregates and their audit records.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a newly placed order.
    ///
    /// # Errors
    ///
    /// - `StoreError` on persistence failure
    async fn insert(&self, order: &Order) -> Result<(), DomainError>;

    /// Find an order by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Find an order by ID, scoped to its owner.
    ///
    /// Returns `None` when the order does not exist or belongs to a
    /// different user; callers cannot tell the two apart.
    async fn find_for_user(
        &self,
        id: &OrderId,
        user_id: &UserId,
    ) -> Result<Option<Order>, DomainError>;

    /// Every order, newest first.
    async fn list_all(&self) -> Result<Vec<Order>, DomainError>;

    /// A user's orders, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError>;

    /// Commit a status change and its audit record as one unit.
    ///
    /// Returns the order as stored after the transition.
    ///
    /// # Errors
    ///
    /// - `OrderNotFound` if the order does not exist
    /// - `StatusConflict` if the order no longer holds `expected_status`
    /// - `StoreError` on persistence failure
    async fn execute_transition(&self, transition: &OrderTransition)
        -> Result<Order, DomainError>;

    /// Hard-delete an order. Returns whether a row was removed.
    async fn delete(&self, id: &OrderId) -> Result<bool, DomainError>;

    /// Cancellation records joined with their orders, newest first.
    async fn list_cancellations(&self) -> Result<Vec<(CancellationRecord, Order)>, DomainError>;
}
