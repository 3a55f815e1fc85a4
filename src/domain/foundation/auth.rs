//! Domain-side view of an authenticated caller.
//!
//! These types carry **no token-library dependencies**; any issuer can
//! populate them through the `TokenVerifier` port.

use super::UserId;
use thiserror::Error;

/// Authenticated caller extracted from a validated JWT.
///
/// This is a **domain type** with no provider dependencies. The HTTP
/// middleware populates it and injects it into request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the token subject.
    pub id: UserId,

    /// Email address from the token claims, if present.
    pub email: Option<String>,

    /// Whether the token carries the admin role.
    pub is_admin: bool,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: Option<String>, is_admin: bool) -> Self {
        Self {
            id,
            email,
            is_admin,
        }
    }
}

/// What went wrong while establishing the caller's identity.
///
/// Phrased from the storefront's perspective rather than the token
/// library's, so handlers can map variants straight to responses.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No bearer token was supplied on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// The token is malformed or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token was once valid but its expiry has passed.
    #[error("Token expired")]
    TokenExpired,

    /// Token is valid but lacks the admin role required for this action.
    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

impl AuthError {
    /// Returns true if this error indicates the caller should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::TokenExpired
        )
    }
}
