//! HS256 bearer-token verification.
//!
//! The storefront never issues tokens; the external account service
//! signs them with a shared secret. This adapter checks the signature
//! and expiry and lifts the claims into [`AuthenticatedUser`].

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// Claims carried by the account service's tokens.
///
/// `isAdmin` is optional; customer tokens simply omit it.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(rename = "isAdmin", default)]
    is_admin: bool,
    exp: i64,
}

/// [`TokenVerifier`] backed by `jsonwebtoken` HS256 validation.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &Secret<String>) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.expose_secret().as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!(error = %e, "rejected bearer token");
                    AuthError::InvalidToken
                }
            }
        })?;

        let id = UserId::new(data.claims.user_id).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthenticatedUser::new(
            id,
            data.claims.email,
            data.claims.is_admin,
        ))
    }
}
