//! JWT verification settings.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Settings for verifying caller identity.
///
/// Tokens are minted by the storefront account service and verified
/// here with a shared HS256 secret. `Secret` keeps the value out of
/// debug output.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for JWT signature verification
    pub jwt_secret: Secret<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Secret::new(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_an_empty_secret() {
        let config = AuthConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("JWT_SECRET"))
        ));
    }

    #[test]
    fn accepts_a_configured_secret() {
        let config = AuthConfig {
            jwt_secret: Secret::new("shared-hs256-secret".to_string()),
        };
        assert!(config.validate().is_ok());
    }
}
