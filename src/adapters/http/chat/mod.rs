//! HTTP adapter for the bilingual chat assistant.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatHealthResponse, ChatReplyResponse, ChatRequest};
pub use routes::chat_routes;
