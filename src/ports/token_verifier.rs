//! Token verification port for bearer-token authentication.
//!
//! The storefront does not issue tokens; it only verifies bearer
//! tokens minted by the external auth service. This port keeps the
//! HTTP middleware independent of the JWT library and signing scheme.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Verifies bearer tokens and extracts the calling user.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature and expiry
/// - Return `AuthError::InvalidToken` for malformed or bad-signature tokens
/// - Return `AuthError::TokenExpired` when only the expiry check fails
/// - Map the admin role claim onto `AuthenticatedUser::is_admin`
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a raw token (without the "Bearer " prefix).
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
