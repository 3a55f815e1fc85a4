//! Use-case orchestration between the domain and the ports.
//!
//! Write operations go through command handlers; read-side listings
//! live in the query handlers. Nothing here touches axum or sqlx.

pub mod handlers;

pub use handlers::{
    // Order lifecycle
    CancelOrderCommand, CancelOrderHandler, CancelOrderResult,
    DeleteOrderCommand, DeleteOrderHandler,
    OrderQueries,
    PlaceOrderCommand, PlaceOrderHandler, PlaceOrderResult,
    UpdateOrderStatusCommand, UpdateOrderStatusHandler, UpdateOrderStatusResult,
    // Chat assistant
    ChatReply, ChatService, ContentRetriever, ReplyGateway,
    // Catalog
    CatalogQueries,
    // Settings
    GetSettingsHandler, UpdateSettingsCommand, UpdateSettingsHandler,
    // Notifications
    OrderNotifier,
};
