//! HTTP handlers for the chat assistant.
//!
//! The chat endpoint is public and infallible: apart from the blank
//! message guard, every turn resolves to a 200 with some reply text.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::AppState;
use crate::domain::chat::INVALID_MESSAGE_REPLY;

use super::dto::{ChatHealthResponse, ChatReplyResponse, ChatRequest};

/// POST /api/chat - One assistant turn.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<ChatReplyResponse>) {
    if request.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatReplyResponse {
                reply: INVALID_MESSAGE_REPLY.to_string(),
            }),
        );
    }

    let reply = state.chat.respond(&request.message).await;
    (
        StatusCode::OK,
        Json(ChatReplyResponse {
            reply: reply.message,
        }),
    )
}

/// GET /api/chat/health - Which reply source is active and which
/// providers are configured.
pub async fn chat_health(State(state): State<AppState>) -> Json<ChatHealthResponse> {
    Json(ChatHealthResponse {
        status: "OK",
        ai_provider: state.chat.provider_label(),
        available_providers: state.available_providers.clone(),
    })
}
