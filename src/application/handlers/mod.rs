//! One submodule per use-case family: catalog queries, the order
//! lifecycle commands, the chat pipeline, settings, and the
//! best-effort order notifier.

pub mod catalog;
pub mod chat;
pub mod notifications;
pub mod orders;
pub mod settings;

pub use catalog::CatalogQueries;
pub use chat::{ChatReply, ChatService, ContentRetriever, ReplyGateway, RULE_BASED_SOURCE};
pub use notifications::{compose_order_email, OrderNotifier};
pub use orders::{
    CancelOrderCommand, CancelOrderHandler, CancelOrderResult, DeleteOrderCommand,
    DeleteOrderHandler, OrderQueries, PlaceOrderCommand, PlaceOrderHandler, PlaceOrderResult,
    UpdateOrderStatusCommand, UpdateOrderStatusHandler, UpdateOrderStatusResult,
};
pub use settings::{GetSettingsHandler, UpdateSettingsCommand, UpdateSettingsHandler};
