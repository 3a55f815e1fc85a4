//! Order module - Lifecycle aggregate, status machine, and audit records.

mod aggregate;
mod audit;
mod line_item;
mod shipping;
mod status;

pub use aggregate::Order;
pub use audit::{CancellationRecord, ShipmentRecord, DEFAULT_CANCELLATION_REASON};
pub use line_item::LineItem;
pub use shipping::{DeliveryType, ShippingAddress, DEFAULT_COUNTRY};
pub use status::OrderStatus;
