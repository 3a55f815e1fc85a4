//! HTTP listener settings: bind address, environment, logging, CORS.

use std::net::SocketAddr;

use serde::Deserialize;

use super::error::ValidationError;

/// Longest request timeout the server will accept, in seconds.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Deployment environment the process believes it is running in.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Settings for the HTTP listener and its middleware.
///
/// Every field carries a default, so an empty environment boots a
/// development server on 0.0.0.0:8080.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,

    /// TCP port to listen on
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,

    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// `tracing` filter directive used when RUST_LOG is unset
    #[serde(default = "ServerConfig::default_log_level")]
    pub log_level: String,

    /// Per-request timeout in seconds
    #[serde(default = "ServerConfig::default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated list of allowed CORS origins
    pub cors_origins: Option<String>,
}

impl ServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_log_level() -> String {
        "info,boutiqa=debug,sqlx=warn".to_string()
    }

    fn default_request_timeout() -> u64 {
        30
    }

    /// Address the listener binds to.
    ///
    /// Panics when `host` is not an IP address; hostnames are not
    /// resolved here.
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("server host and port must form a valid socket address")
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Splits `cors_origins` on commas, trimming whitespace around each
    /// entry. Empty when no origins were configured.
    pub fn cors_origins_list(&self) -> Vec<String> {
        match &self.cors_origins {
            Some(raw) => raw.split(',').map(|o| o.trim().to_string()).collect(),
            None => Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            environment: Environment::default(),
            log_level: Self::default_log_level(),
            request_timeout_secs: Self::default_request_timeout(),
            cors_origins: None,
        }
    }
}
