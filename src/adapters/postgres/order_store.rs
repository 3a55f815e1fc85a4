//! PostgreSQL implementation of OrderStore.
//!
//! Orders live in one row plus an `order_items` child table; shipment
//! and cancellation records sit in their own append-only tables. A
//! status transition is a conditional UPDATE plus its audit insert in
//! a single transaction, so a concurrent admin can never double-ship
//! or revive an order.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::foundation::{
    CancellationId, DomainError, ErrorCode, OrderId, ProductId, Timestamp, UserId,
};
use crate::domain::order::{
    CancellationRecord, DeliveryType, LineItem, Order, OrderStatus, ShippingAddress,
};
use crate::ports::{OrderStore, OrderTransition, TransitionAudit};

/// PostgreSQL implementation of OrderStore.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgresOrderStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads line items for the given orders, keyed by order id.
    async fn load_items(
        &self,
        order_ids: &[uuid::Uuid],
    ) -> Result<HashMap<uuid::Uuid, Vec<LineItem>>, DomainError> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT order_id, product_id, quantity, size, color
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY position
            "#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch order items: {}", e)))?;

        let mut items: HashMap<uuid::Uuid, Vec<LineItem>> = HashMap::new();
        for row in rows {
            let order_id = row.order_id;
            items.entry(order_id).or_default().push(row_to_item(row)?);
        }
        Ok(items)
    }

    /// Attaches items to a batch of order rows.
    async fn assemble(&self, rows: Vec<OrderRow>) -> Result<Vec<Order>, DomainError> {
        let ids: Vec<uuid::Uuid> = rows.iter().map(|r| r.id).collect();
        let mut items = self.load_items(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let order_items = items.remove(&row.id).unwrap_or_default();
                row_to_order(row, order_items)
            })
            .collect()
    }

    /// Attaches items to a single order row.
    async fn assemble_one(&self, row: OrderRow) -> Result<Order, DomainError> {
        let mut items = self.load_items(&[row.id]).await?;
        let order_items = items.remove(&row.id).unwrap_or_default();
        row_to_order(row, order_items)
    }
}

const ORDER_COLUMNS: &str = "id, user_id, customer_email, total_amount, status, delivery_type, \
     wilaya, daira, home_address, phone_number, notes, country, created_at";

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn insert(&self, order: &Order) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to open transaction: {}", e)))?;

        let address = order.shipping_address();
        sqlx::query(
            r#"
            INSERT INTO orders (
                id, user_id, customer_email, total_amount, status, delivery_type,
                wilaya, daira, home_address, phone_number, notes, country, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(order.id().as_uuid())
        .bind(order.user_id().as_str())
        .bind(order.customer_email())
        .bind(order.total_amount())
        .bind(order.status().as_str())
        .bind(address.delivery_type().as_str())
        .bind(address.wilaya())
        .bind(address.daira())
        .bind(address.home_address())
        .bind(address.phone_number())
        .bind(address.notes())
        .bind(address.country())
        .bind(*order.created_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::store(format!("Failed to insert order: {}", e)))?;

        for (position, item) in order.items().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, position, product_id, quantity, size, color)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(order.id().as_uuid())
            .bind(position as i32)
            .bind(item.product_id().as_uuid())
            .bind(item.quantity() as i32)
            .bind(item.size())
            .bind(item.color())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::store(format!("Failed to insert order item: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit order insert: {}", e)))
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch order: {}", e)))?;

        match row {
            Some(row) => Ok(Some(self.assemble_one(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_for_user(
        &self,
        id: &OrderId,
        user_id: &UserId,
    ) -> Result<Option<Order>, DomainError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_uuid())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch order: {}", e)))?;

        match row {
            Some(row) => Ok(Some(self.assemble_one(row).await?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list orders: {}", e)))?;

        self.assemble(rows).await
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list orders: {}", e)))?;

        self.assemble(rows).await
    }

    async fn execute_transition(
        &self,
        transition: &OrderTransition,
    ) -> Result<Order, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to open transaction: {}", e)))?;

        // The status condition makes the update a compare-and-set: zero
        // rows means the order is gone or has moved on since it was read.
        let updated = sqlx::query_as::<_, OrderRow>(&format!(
            "UPDATE orders SET status = $3 WHERE id = $1 AND status = $2 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(transition.order_id.as_uuid())
        .bind(transition.expected_status.as_str())
        .bind(transition.new_status.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::store(format!("Failed to update order status: {}", e)))?;

        let row = match updated {
            Some(row) => row,
            None => {
                let current: Option<(String,)> =
                    sqlx::query_as("SELECT status FROM orders WHERE id = $1")
                        .bind(transition.order_id.as_uuid())
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(|e| {
                            DomainError::store(format!("Failed to fetch order status: {}", e))
                        })?;

                return match current {
                    None => Err(DomainError::new(ErrorCode::OrderNotFound, "Order not found")),
                    Some((actual,)) => Err(DomainError::new(
                        ErrorCode::StatusConflict,
                        "Order status changed concurrently",
                    )
                    .with_detail("expected", transition.expected_status.as_str())
                    .with_detail("actual", actual)),
                };
            }
        };

        match &transition.audit {
            TransitionAudit::None => {}
            TransitionAudit::Shipment(record) => {
                sqlx::query(
                    r#"
                    INSERT INTO order_shipments (
                        id, order_id, tracking_number, estimated_delivery, created_at
                    ) VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(record.id().as_uuid())
                .bind(record.order_id().as_uuid())
                .bind(record.tracking_number())
                .bind(record.estimated_delivery().map(|t| *t.as_datetime()))
                .bind(*record.created_at().as_datetime())
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    DomainError::store(format!("Failed to insert shipment record: {}", e))
                })?;
            }
            TransitionAudit::Cancellation(record) => {
                sqlx::query(
                    r#"
                    INSERT INTO order_cancellations (id, order_id, reason, created_at)
                    VALUES ($1, $2, $3, $4)
                    "#,
                )
                .bind(record.id().as_uuid())
                .bind(record.order_id().as_uuid())
                .bind(record.reason())
                .bind(*record.created_at().as_datetime())
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    DomainError::store(format!("Failed to insert cancellation record: {}", e))
                })?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit status transition: {}", e)))?;

        // Items never change after placement, so reading them outside
        // the transaction is safe.
        self.assemble_one(row).await
    }

    async fn delete(&self, id: &OrderId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to delete order: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_cancellations(&self) -> Result<Vec<(CancellationRecord, Order)>, DomainError> {
        let records = sqlx::query_as::<_, CancellationRow>(
            r#"
            SELECT id, order_id, reason, created_at
            FROM order_cancellations
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list cancellations: {}", e)))?;

        let order_ids: Vec<uuid::Uuid> = records.iter().map(|r| r.order_id).collect();
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ANY($1)"
        ))
        .bind(&order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch cancelled orders: {}", e)))?;

        let orders: HashMap<uuid::Uuid, Order> = self
            .assemble(rows)
            .await?
            .into_iter()
            .map(|order| (*order.id().as_uuid(), order))
            .collect();

        let mut out = Vec::with_capacity(records.len());
        for record in records {
            if let Some(order) = orders.get(&record.order_id) {
                out.push((row_to_cancellation(record), order.clone()));
            }
        }
        Ok(out)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════

/// Database row for an order.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: uuid::Uuid,
    user_id: String,
    customer_email: Option<String>,
    total_amount: Decimal,
    status: String,
    delivery_type: String,
    wilaya: String,
    daira: String,
    home_address: Option<String>,
    phone_number: String,
    notes: Option<String>,
    country: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Database row for an order line item.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    order_id: uuid::Uuid,
    product_id: uuid::Uuid,
    quantity: i32,
    size: Option<String>,
    color: Option<String>,
}

/// Database row for a cancellation record.
#[derive(Debug, sqlx::FromRow)]
struct CancellationRow {
    id: uuid::Uuid,
    order_id: uuid::Uuid,
    reason: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn row_to_item(row: ItemRow) -> Result<LineItem, DomainError> {
    let quantity = u32::try_from(row.quantity).map_err(|_| {
        DomainError::store(format!("Invalid quantity {} in order item", row.quantity))
    })?;

    LineItem::new(
        ProductId::from_uuid(row.product_id),
        quantity,
        row.size,
        row.color,
    )
    .map_err(|e| DomainError::store(format!("Invalid order item row: {}", e)))
}

fn row_to_order(row: OrderRow, items: Vec<LineItem>) -> Result<Order, DomainError> {
    let status: OrderStatus = row
        .status
        .parse()
        .map_err(|e| DomainError::store(format!("Invalid order row: {}", e)))?;
    let delivery_type: DeliveryType = row
        .delivery_type
        .parse()
        .map_err(|e| DomainError::store(format!("Invalid order row: {}", e)))?;
    let user_id = UserId::new(row.user_id)
        .map_err(|e| DomainError::store(format!("Invalid order row: {}", e)))?;

    let address = ShippingAddress::reconstitute(
        delivery_type,
        row.wilaya,
        row.daira,
        row.home_address,
        row.phone_number,
        row.notes,
        row.country,
    );

    Ok(Order::reconstitute(
        OrderId::from_uuid(row.id),
        user_id,
        row.customer_email,
        items,
        row.total_amount,
        address,
        status,
        Timestamp::from_datetime(row.created_at),
    ))
}

fn row_to_cancellation(row: CancellationRow) -> CancellationRecord {
    CancellationRecord::reconstitute(
        CancellationId::from_uuid(row.id),
        OrderId::from_uuid(row.order_id),
        row.reason,
        Timestamp::from_datetime(row.created_at),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_row(status: &str) -> OrderRow {
        OrderRow {
            id: uuid::Uuid::new_v4(),
            user_id: "customer-1".to_string(),
            customer_email: Some("buyer@example.com".to_string()),
            total_amount: Decimal::new(4500, 0),
            status: status.to_string(),
            delivery_type: "office".to_string(),
            wilaya: "Alger".to_string(),
            daira: "Bab El Oued".to_string(),
            home_address: None,
            phone_number: "0550123456".to_string(),
            notes: None,
            country: "Algeria".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn order_row_maps_onto_the_aggregate() {
        let row = order_row("processing");
        let item = row_to_item(ItemRow {
            order_id: row.id,
            product_id: uuid::Uuid::new_v4(),
            quantity: 2,
            size: Some("M".to_string()),
            color: None,
        })
        .unwrap();

        let order = row_to_order(row, vec![item]).unwrap();

        assert_eq!(order.status(), OrderStatus::Processing);
        assert_eq!(order.shipping_address().wilaya(), "Alger");
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity(), 2);
    }

    #[test]
    fn unknown_status_in_a_row_is_a_store_error() {
        let result = row_to_order(order_row("refunded"), vec![]);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code, ErrorCode::StoreError);
    }

    #[test]
    fn non_positive_quantity_in_a_row_is_a_store_error() {
        let result = row_to_item(ItemRow {
            order_id: uuid::Uuid::new_v4(),
            product_id: uuid::Uuid::new_v4(),
            quantity: -1,
            size: None,
            color: None,
        });

        assert!(result.is_err());
    }
}
