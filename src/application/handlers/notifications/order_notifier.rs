//! Best-effort email notification for newly placed orders.
//!
//! The notifier reads the current SMTP block from the settings store on
//! every call, composes a plain-text summary, and hands it to the mail
//! transport. Every failure path logs and returns normally; nothing
//! here may affect the order that triggered it.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::order::Order;
use crate::domain::settings::SiteSettings;
use crate::ports::{MailTransport, OutgoingEmail, ProductStore, SettingsStore};

/// Composes and dispatches the new-order notification email.
pub struct OrderNotifier {
    settings: Arc<dyn SettingsStore>,
    products: Arc<dyn ProductStore>,
    transport: Arc<dyn MailTransport>,
}

impl OrderNotifier {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        products: Arc<dyn ProductStore>,
        transport: Arc<dyn MailTransport>,
    ) -> Self {
        Self {
            settings,
            products,
            transport,
        }
    }

    /// Notify the shop admin about a new order.
    ///
    /// Never fails: disabled notifications, missing configuration, and
    /// transport errors all end in a log line and a normal return.
    pub async fn notify_new_order(&self, order: &Order) {
        let settings = match self.settings.load_or_seed().await {
            Ok(settings) => settings,
            Err(err) => {
                tracing::error!(order_id = %order.id(), error = %err, "could not load settings for order notification");
                return;
            }
        };

        if !settings.email_notifications.enabled {
            tracing::info!(order_id = %order.id(), "email notifications not configured or disabled");
            return;
        }

        if settings.email_notifications.admin_recipient().is_none() {
            tracing::info!(order_id = %order.id(), "admin email not configured");
            return;
        }

        let item_lines = self.resolve_item_lines(order).await;
        let email = compose_order_email(order, &item_lines, &settings);

        match self
            .transport
            .send(&email, &settings.email_notifications)
            .await
        {
            Ok(()) => {
                tracing::info!(order_id = %order.id(), to = %email.to, "order notification email sent");
            }
            Err(err) => {
                tracing::error!(order_id = %order.id(), error = %err, "error sending order notification email");
            }
        }
    }

    /// One summary line per item, with the product name and subtotal
    /// when the product still resolves. A product that has vanished
    /// from the catalog is listed by its identifier instead.
    async fn resolve_item_lines(&self, order: &Order) -> Vec<String> {
        let mut lines = Vec::with_capacity(order.items().len());
        for item in order.items() {
            let line = match self.products.find_by_id(item.product_id()).await {
                Ok(Some(product)) => {
                    let subtotal = product.price().amount() * Decimal::from(item.quantity());
                    format!(
                        "- {} (Qty: {}) - DZD {:.2}",
                        product.name(),
                        item.quantity(),
                        subtotal
                    )
                }
                Ok(None) | Err(_) => {
                    format!("- {} (Qty: {})", item.product_id(), item.quantity())
                }
            };
            lines.push(line);
        }
        lines
    }
}

/// Builds the admin notification email for an order.
pub fn compose_order_email(
    order: &Order,
    item_lines: &[String],
    settings: &SiteSettings,
) -> OutgoingEmail {
    let address = order.shipping_address();

    let mut body = String::new();
    body.push_str("New Order Received!\n\n");
    body.push_str(&format!("Order ID: {}\n", order.id()));
    body.push_str(&format!(
        "Customer: {}\n",
        order.customer_email().unwrap_or("unknown")
    ));
    body.push_str(&format!("Total Amount: DZD {:.2}\n\n", order.total_amount()));

    body.push_str("Delivery Information:\n");
    body.push_str(&format!("- Type: {}\n", address.delivery_type().label()));
    body.push_str(&format!("- Phone: {}\n", address.phone_number()));
    body.push_str(&format!(
        "- Location: {}, {}\n",
        address.wilaya(),
        address.daira()
    ));
    if let Some(home_address) = address.home_address() {
        body.push_str(&format!("- Address: {}\n", home_address));
    }
    if let Some(notes) = address.notes() {
        body.push_str(&format!("- Notes: {}\n", notes));
    }

    body.push_str("\nItems Ordered:\n");
    for line in item_lines {
        body.push_str(line);
        body.push('\n');
    }

    body.push_str("\nPlease log in to your admin panel to manage this order.\n");

    OutgoingEmail {
        from: settings
            .email_notifications
            .smtp_user
            .clone()
            .unwrap_or_default(),
        to: settings
            .email_notifications
            .admin_recipient()
            .unwrap_or_default()
            .to_string(),
        subject: format!("New Order #{} - {}", order.id(), settings.site_name),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProductStore, InMemorySettingsStore};
    use crate::adapters::smtp::RecordingMailTransport;
    use crate::domain::catalog::{Price, Product};
    use crate::domain::foundation::{OrderId, ProductId, UserId};
    use crate::domain::order::{DeliveryType, LineItem, ShippingAddress};
    use crate::domain::settings::EmailNotifications;
    use rust_decimal::Decimal;

    fn product(id: ProductId, name: &str, price: i64) -> Product {
        Product::new(
            id,
            name.to_string(),
            format!("{} description", name),
            Price::new(Decimal::new(price, 0)).unwrap(),
            None,
            vec![],
            vec![],
            vec![],
            vec![],
            true,
            false,
        )
        .unwrap()
    }

    fn order_with_items(items: Vec<LineItem>) -> Order {
        Order::place(
            OrderId::new(),
            UserId::new("customer-1").unwrap(),
            Some("buyer@example.com".to_string()),
            items,
            Decimal::new(5000, 0),
            ShippingAddress::new(
                DeliveryType::Home,
                "Algiers".to_string(),
                "Hydra".to_string(),
                Some("12 Rue Didouche".to_string()),
                "0550123456".to_string(),
                Some("Call before delivery".to_string()),
                None,
            )
            .unwrap(),
        )
        .unwrap()
    }

    fn enabled_settings() -> SiteSettings {
        let mut settings = SiteSettings::seed();
        settings.email_notifications = EmailNotifications {
            enabled: true,
            admin_email: Some("admin@shop.dz".to_string()),
            smtp_host: Some("smtp.shop.dz".to_string()),
            smtp_port: 587,
            smtp_user: Some("noreply@shop.dz".to_string()),
            smtp_password: Some("secret".to_string()),
        };
        settings
    }

    fn notifier(
        settings: SiteSettings,
        products: Vec<Product>,
    ) -> (OrderNotifier, Arc<RecordingMailTransport>) {
        let transport = Arc::new(RecordingMailTransport::new());
        let notifier = OrderNotifier::new(
            Arc::new(InMemorySettingsStore::with_settings(settings)),
            Arc::new(InMemoryProductStore::with_products(products)),
            transport.clone(),
        );
        (notifier, transport)
    }

    #[tokio::test]
    async fn sends_summary_to_admin_when_enabled() {
        let product_id = ProductId::new();
        let (notifier, transport) = notifier(
            enabled_settings(),
            vec![product(product_id, "Baggy Pants", 2500)],
        );
        let order =
            order_with_items(vec![LineItem::new(product_id, 2, None, None).unwrap()]);

        notifier.notify_new_order(&order).await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        let email = &sent[0];
        assert_eq!(email.from, "noreply@shop.dz");
        assert_eq!(email.to, "admin@shop.dz");
        assert_eq!(
            email.subject,
            format!("New Order #{} - Vintage Shop", order.id())
        );
        assert!(email.body.contains("Customer: buyer@example.com"));
        assert!(email.body.contains("Total Amount: DZD 5000.00"));
        assert!(email.body.contains("- Type: Home Delivery"));
        assert!(email.body.contains("- Location: Algiers, Hydra"));
        assert!(email.body.contains("- Address: 12 Rue Didouche"));
        assert!(email.body.contains("- Notes: Call before delivery"));
        assert!(email.body.contains("- Baggy Pants (Qty: 2) - DZD 5000.00"));
    }

    #[tokio::test]
    async fn skips_when_notifications_disabled() {
        let (notifier, transport) = notifier(SiteSettings::seed(), vec![]);
        let order = order_with_items(vec![LineItem::new(ProductId::new(), 1, None, None).unwrap()]);

        notifier.notify_new_order(&order).await;

        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn skips_when_admin_email_missing() {
        let mut settings = enabled_settings();
        settings.email_notifications.admin_email = Some("   ".to_string());
        let (notifier, transport) = notifier(settings, vec![]);
        let order = order_with_items(vec![LineItem::new(ProductId::new(), 1, None, None).unwrap()]);

        notifier.notify_new_order(&order).await;

        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn survives_transport_failure() {
        let product_id = ProductId::new();
        let transport = Arc::new(RecordingMailTransport::failing());
        let notifier = OrderNotifier::new(
            Arc::new(InMemorySettingsStore::with_settings(enabled_settings())),
            Arc::new(InMemoryProductStore::with_products(vec![product(
                product_id, "Tee", 1200,
            )])),
            transport.clone(),
        );
        let order = order_with_items(vec![LineItem::new(product_id, 1, None, None).unwrap()]);

        // Must not panic or propagate anything.
        notifier.notify_new_order(&order).await;
        assert_eq!(transport.attempts(), 1);
    }

    #[tokio::test]
    async fn lists_vanished_products_by_id() {
        let missing = ProductId::new();
        let (notifier, transport) = notifier(enabled_settings(), vec![]);
        let order = order_with_items(vec![LineItem::new(missing, 3, None, None).unwrap()]);

        notifier.notify_new_order(&order).await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].body.contains(&format!("- {} (Qty: 3)", missing)));
    }

    #[test]
    fn office_delivery_body_omits_address_line() {
        let order = Order::place(
            OrderId::new(),
            UserId::new("customer-2").unwrap(),
            None,
            vec![LineItem::new(ProductId::new(), 1, None, None).unwrap()],
            Decimal::new(900, 0),
            ShippingAddress::new(
                DeliveryType::Office,
                "Oran".to_string(),
                "Es Senia".to_string(),
                None,
                "0660123456".to_string(),
                None,
                None,
            )
            .unwrap(),
        )
        .unwrap();

        let email = compose_order_email(&order, &[], &enabled_settings());
        assert!(email.body.contains("- Type: Office Delivery"));
        assert!(!email.body.contains("- Address:"));
        assert!(!email.body.contains("- Notes:"));
        assert!(email.body.contains("Customer: unknown"));
    }
}
