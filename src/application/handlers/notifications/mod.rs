//! Best-effort outbound notifications.

mod order_notifier;

pub use order_notifier::{compose_order_email, OrderNotifier};
