//! HTTP DTOs for the chat assistant.

use serde::{Deserialize, Serialize};

/// Body of POST /api/chat.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The customer's message, Arabic or English.
    #[serde(default)]
    pub message: String,
}

/// Reply body, used for successful turns and rejected blank messages
/// alike so the front end always finds `reply`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReplyResponse {
    pub reply: String,
}

/// Body of GET /api/chat/health.
///
/// Snake_case on the wire, unlike the other resources; the admin
/// dashboard reads these keys as-is.
#[derive(Debug, Clone, Serialize)]
pub struct ChatHealthResponse {
    pub status: &'static str,
    pub ai_provider: &'static str,
    pub available_providers: Vec<&'static str>,
}
