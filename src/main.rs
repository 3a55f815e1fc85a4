//! Boutiqa server binary.
//!
//! Wires configuration, the Postgres pool, the JWT verifier, and the
//! optional AI provider into the API router and serves it.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use boutiqa::adapters::ai::{CohereProvider, GroqProvider, TogetherProvider};
use boutiqa::adapters::auth::JwtTokenVerifier;
use boutiqa::adapters::http::{api_router, AppState};
use boutiqa::adapters::postgres::{
    PostgresOrderStore, PostgresProductStore, PostgresSettingsStore,
};
use boutiqa::adapters::smtp::LettreMailTransport;
use boutiqa::config::{AiProvider, AppConfig};
use boutiqa::ports::{GenerationProvider, TokenVerifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(environment = ?config.server.environment, "starting boutiqa");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let provider = generation_provider(&config);
    let state = AppState::new(
        Arc::new(PostgresOrderStore::new(pool.clone())),
        Arc::new(PostgresProductStore::new(pool.clone())),
        Arc::new(PostgresSettingsStore::new(pool)),
        Arc::new(LettreMailTransport::new()),
        provider,
        config.ai.available_providers(),
    );
    let verifier: Arc<dyn TokenVerifier> =
        Arc::new(JwtTokenVerifier::new(&config.auth.jwt_secret));

    let app = api_router(state, verifier)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the configured hosted generation provider.
///
/// Returns `None` when rule-based is selected or the selected provider
/// has no API key; the chat assistant then answers from rules alone.
fn generation_provider(config: &AppConfig) -> Option<Arc<dyn GenerationProvider>> {
    let Some(key) = config.ai.selected_key() else {
        if config.ai.provider != AiProvider::RuleBased {
            tracing::warn!(
                provider = config.ai.provider.as_str(),
                "selected AI provider has no API key, falling back to rule-based replies"
            );
        }
        return None;
    };

    let provider: Arc<dyn GenerationProvider> = match config.ai.provider {
        AiProvider::Cohere => Arc::new(CohereProvider::new(key.clone())),
        AiProvider::Together => Arc::new(TogetherProvider::new(key.clone())),
        AiProvider::Groq => Arc::new(GroqProvider::new(key.clone())),
        AiProvider::RuleBased => return None,
    };
    tracing::info!(provider = provider.name(), "AI provider configured");
    Some(provider)
}

/// Restrictive CORS when origins are configured, permissive otherwise.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
