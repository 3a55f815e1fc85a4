//! Typed application configuration.
//!
//! All settings come from the process environment (optionally seeded
//! from a `.env` file via `dotenvy`). Variables carry the `BOUTIQA`
//! prefix and use `__` between nesting levels, so
//! `BOUTIQA__SERVER__PORT` lands in `server.port`.
//!
//! # Example
//!
//! ```no_run
//! use boutiqa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration should load");
//! config.validate().expect("configuration should be sane");
//!
//! println!("listening on {}", config.server.socket_addr());
//! ```

mod ai;
mod auth;
mod database;
mod error;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Every configuration section of the storefront backend.
///
/// `server` and `ai` fall back to defaults when absent; `database` and
/// `auth` carry required values and must be present in the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Postgres pool settings
    pub database: DatabaseConfig,

    /// JWT verification settings
    pub auth: AuthConfig,

    /// Chat assistant provider settings
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// A `.env` file in the working directory is applied first when it
    /// exists, so development machines can keep their settings out of
    /// the shell profile. Deserialization failures and missing required
    /// sections surface as [`ConfigError::LoadError`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BOUTIQA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Run the per-section sanity checks.
    ///
    /// Covers the listener port and timeout, the database URL and pool
    /// bounds, and the presence of the JWT shared secret. A selected AI
    /// provider with no API key is deliberately not an error; the chat
    /// gateway degrades to rule-based replies.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
