//! Integration tests for the order lifecycle.
//!
//! These tests wire the real command and query handlers over the
//! in-memory adapters and walk complete flows:
//! 1. A customer places an order and the admin notification goes out
//! 2. An admin moves it pending -> processing -> shipped -> delivered
//! 3. Shipment and cancellation records are minted exactly once
//! 4. Customers only ever see their own orders

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use boutiqa::adapters::memory::{InMemoryOrderStore, InMemoryProductStore, InMemorySettingsStore};
use boutiqa::adapters::smtp::RecordingMailTransport;
use boutiqa::application::handlers::{
    CancelOrderCommand, CancelOrderHandler, DeleteOrderCommand, DeleteOrderHandler, OrderNotifier,
    OrderQueries, PlaceOrderCommand, PlaceOrderHandler, UpdateOrderStatusCommand,
    UpdateOrderStatusHandler,
};
use boutiqa::domain::catalog::{Price, Product};
use boutiqa::domain::foundation::{ErrorCode, OrderId, ProductId, Timestamp, UserId};
use boutiqa::domain::order::{
    DeliveryType, LineItem, OrderStatus, ShippingAddress, DEFAULT_CANCELLATION_REASON,
};
use boutiqa::domain::settings::SiteSettings;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Every handler wired over one shared order store, the way the HTTP
/// layer assembles them.
struct Shop {
    orders: Arc<InMemoryOrderStore>,
    transport: Arc<RecordingMailTransport>,
    place: PlaceOrderHandler,
    update_status: UpdateOrderStatusHandler,
    cancel: CancelOrderHandler,
    delete: DeleteOrderHandler,
    queries: OrderQueries,
}

fn shop_with_products(products: Vec<Product>) -> Shop {
    let orders = Arc::new(InMemoryOrderStore::new());
    let transport = Arc::new(RecordingMailTransport::new());

    let mut settings = SiteSettings::seed();
    settings.email_notifications.enabled = true;
    settings.email_notifications.admin_email = Some("admin@shop.dz".to_string());
    settings.email_notifications.smtp_host = Some("smtp.shop.dz".to_string());
    settings.email_notifications.smtp_user = Some("noreply@shop.dz".to_string());
    settings.email_notifications.smtp_password = Some("secret".to_string());

    let notifier = Arc::new(OrderNotifier::new(
        Arc::new(InMemorySettingsStore::with_settings(settings)),
        Arc::new(InMemoryProductStore::with_products(products)),
        transport.clone(),
    ));

    Shop {
        orders: orders.clone(),
        transport,
        place: PlaceOrderHandler::new(orders.clone(), notifier),
        update_status: UpdateOrderStatusHandler::new(orders.clone()),
        cancel: CancelOrderHandler::new(orders.clone()),
        delete: DeleteOrderHandler::new(orders.clone()),
        queries: OrderQueries::new(orders),
    }
}

fn product(id: ProductId, name: &str, price: i64) -> Product {
    Product::new(
        id,
        name.to_string(),
        format!("{} description", name),
        Price::new(Decimal::new(price, 0)).unwrap(),
        None,
        vec!["Pants".to_string()],
        vec![],
        vec!["M".to_string()],
        vec!["Black".to_string()],
        true,
        false,
    )
    .unwrap()
}

fn office_address() -> ShippingAddress {
    ShippingAddress::new(
        DeliveryType::Office,
        "Alger".to_string(),
        "Bab El Oued".to_string(),
        None,
        "0555000000".to_string(),
        None,
        None,
    )
    .unwrap()
}

fn place_command(user: &str, items: Vec<LineItem>, total: i64) -> PlaceOrderCommand {
    PlaceOrderCommand {
        user_id: UserId::new(user).unwrap(),
        customer_email: Some(format!("{}@example.com", user)),
        items,
        total_amount: Decimal::new(total, 0),
        shipping_address: office_address(),
    }
}

fn ship_command(order_id: OrderId, tracking: &str) -> UpdateOrderStatusCommand {
    UpdateOrderStatusCommand {
        order_id,
        new_status: OrderStatus::Shipped,
        tracking_number: Some(tracking.to_string()),
        estimated_delivery: Some(Timestamp::now().add_days(5)),
    }
}

/// Waits for the detached notification task to reach the transport.
async fn wait_for_attempt(transport: &RecordingMailTransport) {
    for _ in 0..200 {
        if transport.attempts() > 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
}

// =============================================================================
// Placement and notification
// =============================================================================

#[tokio::test]
async fn placed_order_starts_pending_and_notifies_the_admin() {
    let pants = ProductId::new();
    let jacket = ProductId::new();
    let shop = shop_with_products(vec![
        product(pants, "Baggy Pants", 1500),
        product(jacket, "Denim Jacket", 1500),
    ]);

    let result = shop
        .place
        .handle(place_command(
            "buyer-1",
            vec![
                LineItem::new(pants, 2, Some("M".to_string()), None).unwrap(),
                LineItem::new(jacket, 1, None, Some("Blue".to_string())).unwrap(),
            ],
            4500,
        ))
        .await
        .unwrap();

    assert_eq!(result.order.status(), OrderStatus::Pending);
    assert_eq!(shop.orders.order_count(), 1);

    wait_for_attempt(&shop.transport).await;
    let sent = shop.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "admin@shop.dz");
    assert!(sent[0].body.contains("Baggy Pants (Qty: 2)"));
    assert!(sent[0].body.contains("Total Amount: DZD 4500.00"));
}

#[tokio::test]
async fn placement_rejects_incomplete_orders_without_storing_anything() {
    let shop = shop_with_products(vec![]);

    let no_items = shop.place.handle(place_command("buyer-1", vec![], 4500)).await;
    assert_eq!(no_items.unwrap_err().message, "Products are required");

    let item = LineItem::new(ProductId::new(), 1, None, None).unwrap();
    let no_total = shop
        .place
        .handle(place_command("buyer-1", vec![item], 0))
        .await;
    assert_eq!(
        no_total.unwrap_err().message,
        "Valid total amount is required"
    );

    assert_eq!(shop.orders.order_count(), 0);
    assert_eq!(shop.transport.attempts(), 0);
}

// =============================================================================
// Status transitions and audit records
// =============================================================================

#[tokio::test]
async fn full_lifecycle_reaches_delivered_with_one_shipment_record() {
    let shop = shop_with_products(vec![]);
    let item = LineItem::new(ProductId::new(), 1, None, None).unwrap();
    let placed = shop
        .place
        .handle(place_command("buyer-1", vec![item], 2600))
        .await
        .unwrap();
    let id = *placed.order.id();

    shop.update_status
        .handle(UpdateOrderStatusCommand {
            order_id: id,
            new_status: OrderStatus::Processing,
            tracking_number: None,
            estimated_delivery: None,
        })
        .await
        .unwrap();
    shop.update_status.handle(ship_command(id, "TRK1")).await.unwrap();
    let delivered = shop
        .update_status
        .handle(UpdateOrderStatusCommand {
            order_id: id,
            new_status: OrderStatus::Delivered,
            tracking_number: None,
            estimated_delivery: None,
        })
        .await
        .unwrap();

    assert_eq!(delivered.order.status(), OrderStatus::Delivered);
    let records = shop.orders.shipment_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tracking_number(), Some("TRK1"));
    assert!(shop.orders.cancellation_records().is_empty());
}

#[tokio::test]
async fn repeated_ship_request_fails_without_a_second_record() {
    let shop = shop_with_products(vec![]);
    let item = LineItem::new(ProductId::new(), 1, None, None).unwrap();
    let placed = shop
        .place
        .handle(place_command("buyer-1", vec![item], 2600))
        .await
        .unwrap();
    let id = *placed.order.id();

    shop.update_status.handle(ship_command(id, "TRK1")).await.unwrap();
    let second = shop.update_status.handle(ship_command(id, "TRK2")).await;

    assert_eq!(second.unwrap_err().code, ErrorCode::InvalidTransition);
    assert_eq!(shop.orders.shipment_records().len(), 1);
}

#[tokio::test]
async fn shipped_order_refuses_cancellation() {
    let shop = shop_with_products(vec![]);
    let item = LineItem::new(ProductId::new(), 1, None, None).unwrap();
    let placed = shop
        .place
        .handle(place_command("buyer-1", vec![item], 2600))
        .await
        .unwrap();
    let id = *placed.order.id();
    shop.update_status.handle(ship_command(id, "TRK1")).await.unwrap();

    let result = shop
        .cancel
        .handle(CancelOrderCommand {
            order_id: id,
            reason: Some("changed my mind".to_string()),
        })
        .await;

    assert_eq!(result.unwrap_err().code, ErrorCode::InvalidTransition);
    assert!(shop.orders.cancellation_records().is_empty());
    let current = shop
        .queries
        .get_for_user(&id, &UserId::new("buyer-1").unwrap())
        .await
        .unwrap();
    assert_eq!(current.status(), OrderStatus::Shipped);
}

#[tokio::test]
async fn cancelled_pending_order_appears_in_the_cancelled_listing() {
    let shop = shop_with_products(vec![]);
    let item = LineItem::new(ProductId::new(), 1, None, None).unwrap();
    let placed = shop
        .place
        .handle(place_command("buyer-1", vec![item], 2600))
        .await
        .unwrap();
    let id = *placed.order.id();

    let cancelled = shop
        .cancel
        .handle(CancelOrderCommand {
            order_id: id,
            reason: None,
        })
        .await
        .unwrap();

    assert_eq!(cancelled.order.status(), OrderStatus::Cancelled);
    assert_eq!(cancelled.record.reason(), DEFAULT_CANCELLATION_REASON);

    let listing = shop.queries.list_cancelled().await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].0.order_id(), &id);
    assert_eq!(listing[0].1.status(), OrderStatus::Cancelled);
}

#[tokio::test]
async fn deleted_order_vanishes_from_every_listing() {
    let shop = shop_with_products(vec![]);
    let item = LineItem::new(ProductId::new(), 1, None, None).unwrap();
    let placed = shop
        .place
        .handle(place_command("buyer-1", vec![item], 2600))
        .await
        .unwrap();
    let id = *placed.order.id();
    shop.cancel
        .handle(CancelOrderCommand {
            order_id: id,
            reason: None,
        })
        .await
        .unwrap();

    shop.delete.handle(DeleteOrderCommand { order_id: id }).await.unwrap();

    assert!(shop.queries.list_all().await.unwrap().is_empty());
    assert!(shop.queries.list_cancelled().await.unwrap().is_empty());
    let again = shop.delete.handle(DeleteOrderCommand { order_id: id }).await;
    assert_eq!(again.unwrap_err().code, ErrorCode::OrderNotFound);
}

// =============================================================================
// Ownership
// =============================================================================

#[tokio::test]
async fn customers_only_see_their_own_orders() {
    let shop = shop_with_products(vec![]);
    for user in ["alice", "bob", "alice"] {
        let item = LineItem::new(ProductId::new(), 1, None, None).unwrap();
        shop.place
            .handle(place_command(user, vec![item], 1000))
            .await
            .unwrap();
    }
    let alice = UserId::new("alice").unwrap();
    let bob = UserId::new("bob").unwrap();

    let mine = shop.queries.list_for_user(&alice).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|o| o.user_id() == &alice));

    let bobs_order = *shop.queries.list_for_user(&bob).await.unwrap()[0].id();
    let stolen = shop.queries.get_for_user(&bobs_order, &alice).await;
    assert_eq!(stolen.unwrap_err().code, ErrorCode::OrderNotFound);

    assert_eq!(shop.queries.list_all().await.unwrap().len(), 3);
}
