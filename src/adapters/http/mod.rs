//! The REST surface, built on axum.
//!
//! Each resource has its own {dto, handlers, routes} module; they all
//! share one `AppState` and sit behind the bearer-token middleware.

pub mod catalog;
pub mod chat;
pub mod error;
pub mod middleware;
pub mod orders;
pub mod settings;

use std::sync::Arc;

use axum::Router;

use crate::application::handlers::chat::{ChatService, ContentRetriever, ReplyGateway};
use crate::application::handlers::notifications::OrderNotifier;
use crate::application::handlers::orders::{
    CancelOrderHandler, DeleteOrderHandler, OrderQueries, PlaceOrderHandler,
    UpdateOrderStatusHandler,
};
use crate::application::handlers::settings::{GetSettingsHandler, UpdateSettingsHandler};
use crate::application::handlers::CatalogQueries;
use crate::ports::{
    GenerationProvider, MailTransport, OrderStore, ProductStore, SettingsStore, TokenVerifier,
};

pub use error::{ApiError, ErrorResponse};

/// Shared handler state injected into every resource router.
#[derive(Clone)]
pub struct AppState {
    pub place_order: Arc<PlaceOrderHandler>,
    pub update_order_status: Arc<UpdateOrderStatusHandler>,
    pub cancel_order: Arc<CancelOrderHandler>,
    pub delete_order: Arc<DeleteOrderHandler>,
    pub order_queries: Arc<OrderQueries>,
    pub catalog: Arc<CatalogQueries>,
    pub chat: Arc<ChatService>,
    pub get_settings: Arc<GetSettingsHandler>,
    pub update_settings: Arc<UpdateSettingsHandler>,
    /// Labels reported by the chat health endpoint.
    pub available_providers: Vec<&'static str>,
}

impl AppState {
    /// Wires every handler from the stores and collaborators.
    ///
    /// `provider` is the optional hosted AI provider; `None` runs the
    /// chat assistant on rule-based replies alone.
    pub fn new(
        order_store: Arc<dyn OrderStore>,
        product_store: Arc<dyn ProductStore>,
        settings_store: Arc<dyn SettingsStore>,
        mail: Arc<dyn MailTransport>,
        provider: Option<Arc<dyn GenerationProvider>>,
        available_providers: Vec<&'static str>,
    ) -> Self {
        let notifier = Arc::new(OrderNotifier::new(
            settings_store.clone(),
            product_store.clone(),
            mail,
        ));

        Self {
            place_order: Arc::new(PlaceOrderHandler::new(order_store.clone(), notifier)),
            update_order_status: Arc::new(UpdateOrderStatusHandler::new(order_store.clone())),
            cancel_order: Arc::new(CancelOrderHandler::new(order_store.clone())),
            delete_order: Arc::new(DeleteOrderHandler::new(order_store.clone())),
            order_queries: Arc::new(OrderQueries::new(order_store)),
            catalog: Arc::new(CatalogQueries::new(product_store.clone())),
            chat: Arc::new(ChatService::new(
                ContentRetriever::new(product_store),
                ReplyGateway::new(provider),
            )),
            get_settings: Arc::new(GetSettingsHandler::new(settings_store.clone())),
            update_settings: Arc::new(UpdateSettingsHandler::new(settings_store)),
            available_providers,
        }
    }
}

/// Assembles the /api router.
///
/// The auth middleware runs on every route; it only attaches the
/// caller's identity, so public endpoints stay public and the
/// `RequireAuth`/`RequireAdmin` extractors do the enforcing.
pub fn api_router(state: AppState, verifier: Arc<dyn TokenVerifier>) -> Router {
    Router::new()
        .nest("/api/products", catalog::catalog_routes())
        .nest("/api/orders", orders::order_routes())
        .nest("/api/chat", chat::chat_routes())
        .nest("/api/settings", settings::settings_routes())
        .layer(axum::middleware::from_fn_with_state(
            verifier,
            middleware::auth_middleware,
        ))
        .with_state(state)
}
