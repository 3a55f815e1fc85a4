//! Bearer-token middleware and the `RequireAuth` / `RequireAdmin`
//! axum extractors.
//!
//! The layer only verifies and records who is calling; it never blocks
//! a request by itself. Public routes (catalog, chat, settings GET)
//! share the router with protected ones, so enforcement lives in the
//! extractors:
//!
//! ```text
//! request ──> auth_middleware ──> AuthenticatedUser in extensions
//!                                        │
//!             handler args: RequireAuth / RequireAdmin read it back
//! ```
//!
//! Verification goes through the `TokenVerifier` port, so the same
//! layer serves the real account-service tokens and the mock used in
//! tests.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenVerifier;

use super::super::error::ErrorResponse;

/// State for the auth layer, a shared verifier handle.
pub type AuthState = Arc<dyn TokenVerifier>;

/// Verifies a `Authorization: Bearer <token>` header when one is sent.
///
/// A valid token puts [`AuthenticatedUser`] into the request
/// extensions and lets the request continue. An absent header also
/// continues, with nothing injected, since most routes are public. Only
/// a present-but-bad token answers 401 here, so a stale session fails
/// loudly instead of silently downgrading to anonymous.
pub async fn auth_middleware(
    State(verifier): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match verifier.verify(token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => {
                let message = match &e {
                    AuthError::TokenExpired => "Token expired",
                    _ => "Token is not valid",
                };
                let body = ErrorResponse::new("UNAUTHORIZED", message);
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            }
        },
        None => next.run(request).await,
    }
}

/// Handler argument for routes that need a signed-in caller.
///
/// Rejects with 401 when the auth layer put no user into the request
/// extensions, which covers both "no header" and requests that never
/// passed through the layer.
///
/// ```ignore
/// async fn my_orders(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     // user.id is the verified caller
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Handler argument for staff-only routes.
///
/// An anonymous caller is rejected with 401, a signed-in caller
/// without the admin claim with 403.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user = parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or(AuthRejection::Unauthenticated)?;

            if !user.is_admin {
                return Err(AuthRejection::NotAdmin);
            }

            Ok(RequireAdmin(user))
        })
    }
}

/// How the extractors refuse a request.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No verified caller in the request extensions.
    Unauthenticated,
    /// Token was valid but the caller lacks the admin role.
    NotAdmin,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHORIZED", "No token, authorization denied"),
            ),
            AuthRejection::NotAdmin => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("FORBIDDEN", "Not authorized as admin"),
            ),
        };

        (status, Json(body)).into_response()
    }
}
