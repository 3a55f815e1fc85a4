//! Order lifecycle commands and queries.

mod cancel_order;
mod delete_order;
mod order_queries;
mod place_order;
mod update_status;

pub use cancel_order::{CancelOrderCommand, CancelOrderHandler, CancelOrderResult};
pub use delete_order::{DeleteOrderCommand, DeleteOrderHandler};
pub use order_queries::OrderQueries;
pub use place_order::{PlaceOrderCommand, PlaceOrderHandler, PlaceOrderResult};
pub use update_status::{
    UpdateOrderStatusCommand, UpdateOrderStatusHandler, UpdateOrderStatusResult,
};
