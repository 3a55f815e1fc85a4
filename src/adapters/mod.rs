//! Concrete implementations of the `ports` traits, one module per
//! external system:
//! - `ai` - Hosted text-generation providers for the chat gateway
//! - `auth` - Bearer-token verification against the account service
//! - `http` - Axum routers, handlers, and DTOs for the public API
//! - `memory` - In-memory stores for tests
//! - `postgres` - PostgreSQL persistence
//! - `smtp` - Outbound mail delivery

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod smtp;
