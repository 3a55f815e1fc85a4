//! In-memory order store for tests.
//!
//! Holds orders and audit records behind one lock so that
//! `execute_transition` is atomic the same way the Postgres adapter's
//! transaction is. Lock operations use `.expect()`; this adapter is for
//! tests, not production.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, UserId};
use crate::domain::order::{CancellationRecord, Order, ShipmentRecord};
use crate::ports::{OrderStore, OrderTransition, TransitionAudit};

#[derive(Default)]
struct Records {
    orders: Vec<Order>,
    shipments: Vec<ShipmentRecord>,
    cancellations: Vec<CancellationRecord>,
}

/// In-memory [`OrderStore`] implementation.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Default)]
pub struct InMemoryOrderStore {
    records: RwLock<Records>,
}

impl InMemoryOrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns every shipment audit record, oldest first.
    pub fn shipment_records(&self) -> Vec<ShipmentRecord> {
        self.records
            .read()
            .expect("InMemoryOrderStore: lock poisoned")
            .shipments
            .clone()
    }

    /// Returns every cancellation audit record, oldest first.
    pub fn cancellation_records(&self) -> Vec<CancellationRecord> {
        self.records
            .read()
            .expect("InMemoryOrderStore: lock poisoned")
            .cancellations
            .clone()
    }

    /// Returns how many orders are stored.
    pub fn order_count(&self) -> usize {
        self.records
            .read()
            .expect("InMemoryOrderStore: lock poisoned")
            .orders
            .len()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: &Order) -> Result<(), DomainError> {
        self.records
            .write()
            .expect("InMemoryOrderStore: lock poisoned")
            .orders
            .push(order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let records = self
            .records
            .read()
            .expect("InMemoryOrderStore: lock poisoned");
        Ok(records.orders.iter().find(|o| o.id() == id).cloned())
    }

    async fn find_for_user(
        &self,
        id: &OrderId,
        user_id: &UserId,
    ) -> Result<Option<Order>, DomainError> {
        let records = self
            .records
            .read()
            .expect("InMemoryOrderStore: lock poisoned");
        Ok(records
            .orders
            .iter()
            .find(|o| o.id() == id && o.user_id() == user_id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        let records = self
            .records
            .read()
            .expect("InMemoryOrderStore: lock poisoned");
        Ok(records.orders.iter().rev().cloned().collect())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError> {
        let records = self
            .records
            .read()
            .expect("InMemoryOrderStore: lock poisoned");
        Ok(records
            .orders
            .iter()
            .rev()
            .filter(|o| o.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn execute_transition(
        &self,
        transition: &OrderTransition,
    ) -> Result<Order, DomainError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryOrderStore: lock poisoned");

        let position = records
            .orders
            .iter()
            .position(|o| o.id() == &transition.order_id)
            .ok_or_else(|| DomainError::new(ErrorCode::OrderNotFound, "Order not found"))?;

        let current = records.orders[position].clone();
        if current.status() != transition.expected_status {
            return Err(DomainError::new(
                ErrorCode::StatusConflict,
                "Order status changed concurrently",
            )
            .with_detail("expected", transition.expected_status.as_str())
            .with_detail("actual", current.status().as_str()));
        }

        // Same rebuild a row-level UPDATE would produce.
        let updated = Order::reconstitute(
            *current.id(),
            current.user_id().clone(),
            current.customer_email().map(str::to_string),
            current.items().to_vec(),
            current.total_amount(),
            current.shipping_address().clone(),
            transition.new_status,
            current.created_at(),
        );
        records.orders[position] = updated.clone();

        match &transition.audit {
            TransitionAudit::None => {}
            TransitionAudit::Shipment(record) => records.shipments.push(record.clone()),
            TransitionAudit::Cancellation(record) => records.cancellations.push(record.clone()),
        }

        Ok(updated)
    }

    async fn delete(&self, id: &OrderId) -> Result<bool, DomainError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryOrderStore: lock poisoned");
        let before = records.orders.len();
        records.orders.retain(|o| o.id() != id);
        Ok(records.orders.len() < before)
    }

    async fn list_cancellations(
        &self,
    ) -> Result<Vec<(CancellationRecord, Order)>, DomainError> {
        let records = self
            .records
            .read()
            .expect("InMemoryOrderStore: lock poisoned");
        Ok(records
            .cancellations
            .iter()
            .rev()
            .filter_map(|record| {
                records
                    .orders
                    .iter()
                    .find(|o| o.id() == record.order_id())
                    .map(|order| (record.clone(), order.clone()))
            })
            .collect())
    }
}
