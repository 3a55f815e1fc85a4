//! HTTP error mapping.
//!
//! Every handler returns `Result<_, ApiError>`; this is the one place
//! a [`DomainError`] becomes a status code and JSON body. The body
//! shape is shared by all endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable code clients can branch on, e.g. `ORDER_NOT_FOUND`.
    pub error_code: String,
    /// Text for humans, not meant to be parsed.
    pub message: String,
    /// Extra key/value context, omitted from the JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Newtype that lets a [`DomainError`] leave a handler via `?`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

/// Status code for a domain error code.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::OrderNotFound | ErrorCode::ProductNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidTransition | ErrorCode::StatusConflict => StatusCode::CONFLICT,
        ErrorCode::UpstreamProvider | ErrorCode::StoreError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code);

        if status.is_server_error() {
            tracing::error!(code = %self.0.code, message = %self.0.message, "request failed");
        }

        let details = if self.0.details.is_empty() {
            None
        } else {
            serde_json::to_value(&self.0.details).ok()
        };

        let body = match details {
            Some(details) => {
                ErrorResponse::with_details(self.0.code.to_string(), self.0.message, details)
            }
            None => ErrorResponse::new(self.0.code.to_string(), self.0.message),
        };

        (status, Json(body)).into_response()
    }
}
