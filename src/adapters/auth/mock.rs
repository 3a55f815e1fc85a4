//! Mock token verifier for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// [`TokenVerifier`] holding a fixed map of accepted tokens.
///
/// Tokens outside the map fail with `InvalidToken`, which is exactly
/// how the middleware sees a stranger's token.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Default)]
pub struct MockTokenVerifier {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `token` as `user`.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens
            .write()
            .expect("MockTokenVerifier: lock poisoned")
            .insert(token.into(), user);
        self
    }

    /// Accepts `token` as a plain customer with the given id.
    pub fn with_customer(self, token: impl Into<String>, user_id: &str) -> Self {
        let user = AuthenticatedUser::new(
            UserId::new(user_id).unwrap(),
            Some(format!("{user_id}@test.example.com")),
            false,
        );
        self.with_user(token, user)
    }

    /// Accepts `token` as an admin with the given id.
    pub fn with_admin(self, token: impl Into<String>, user_id: &str) -> Self {
        let user = AuthenticatedUser::new(
            UserId::new(user_id).unwrap(),
            Some(format!("{user_id}@test.example.com")),
            true,
        );
        self.with_user(token, user)
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens
            .read()
            .expect("MockTokenVerifier: lock poisoned")
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
