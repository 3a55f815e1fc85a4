//! Immutable audit records for one-time order transitions.
//!
//! A shipment record marks the single transition into `shipped`; a
//! cancellation record marks the single transition into `cancelled`.
//! Neither is ever updated after creation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CancellationId, OrderId, ShipmentId, Timestamp};

/// Reason recorded when the admin cancels without giving one.
pub const DEFAULT_CANCELLATION_REASON: &str = "No reason provided";

/// Audit record created when an order transitions into `shipped`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    id: ShipmentId,
    order_id: OrderId,
    tracking_number: Option<String>,
    estimated_delivery: Option<Timestamp>,
    created_at: Timestamp,
}

impl ShipmentRecord {
    /// Creates a shipment record. Tracking details are optional because
    /// carriers often assign them after handover.
    pub fn new(
        order_id: OrderId,
        tracking_number: Option<String>,
        estimated_delivery: Option<Timestamp>,
    ) -> Self {
        Self {
            id: ShipmentId::new(),
            order_id,
            tracking_number: tracking_number.filter(|t| !t.trim().is_empty()),
            estimated_delivery,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute from persistence.
    pub fn reconstitute(
        id: ShipmentId,
        order_id: OrderId,
        tracking_number: Option<String>,
        estimated_delivery: Option<Timestamp>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            order_id,
            tracking_number,
            estimated_delivery,
            created_at,
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> &ShipmentId {
        &self.id
    }

    /// Returns the shipped order's ID.
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the carrier tracking number, if assigned.
    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number.as_deref()
    }

    /// Returns the estimated delivery date, if known.
    pub fn estimated_delivery(&self) -> Option<Timestamp> {
        self.estimated_delivery
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// Audit record created when an order transitions into `cancelled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationRecord {
    id: CancellationId,
    order_id: OrderId,
    reason: String,
    created_at: Timestamp,
}

impl CancellationRecord {
    /// Creates a cancellation record. A missing or blank reason falls
    /// back to a fixed placeholder so the record always explains itself.
    pub fn new(order_id: OrderId, reason: Option<String>) -> Self {
        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CANCELLATION_REASON.to_string());
        Self {
            id: CancellationId::new(),
            order_id,
            reason,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute from persistence.
    pub fn reconstitute(
        id: CancellationId,
        order_id: OrderId,
        reason: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            order_id,
            reason,
            created_at,
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> &CancellationId {
        &self.id
    }

    /// Returns the cancelled order's ID.
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the recorded reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipment_record_drops_blank_tracking_number() {
        let record = ShipmentRecord::new(OrderId::new(), Some("  ".to_string()), None);
        assert_eq!(record.tracking_number(), None);
    }

    #[test]
    fn shipment_record_keeps_tracking_details() {
        let eta = Timestamp::now().add_days(5);
        let record =
            ShipmentRecord::new(OrderId::new(), Some("YAL-778812".to_string()), Some(eta));
        assert_eq!(record.tracking_number(), Some("YAL-778812"));
        assert_eq!(record.estimated_delivery(), Some(eta));
    }

    #[test]
    fn cancellation_reason_defaults_when_missing() {
        let record = CancellationRecord::new(OrderId::new(), None);
        assert_eq!(record.reason(), DEFAULT_CANCELLATION_REASON);
    }

    #[test]
    fn cancellation_reason_defaults_when_blank() {
        let record = CancellationRecord::new(OrderId::new(), Some("".to_string()));
        assert_eq!(record.reason(), DEFAULT_CANCELLATION_REASON);
    }

    #[test]
    fn cancellation_reason_is_kept_when_given() {
        let record =
            CancellationRecord::new(OrderId::new(), Some("Customer changed mind".to_string()));
        assert_eq!(record.reason(), "Customer changed mind");
    }
}
