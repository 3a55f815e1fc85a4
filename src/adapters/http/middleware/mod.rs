//! Cross-cutting axum layers. Currently just bearer-token auth.

pub mod auth;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAdmin, RequireAuth};
