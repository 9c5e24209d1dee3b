//! CineSearch backend - main application entry point.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build the token service and search client
//! 5. Build HTTP router and start server on configured port

use std::{sync::Arc, time::Duration};

use tracing_subscriber::EnvFilter;

use cinesearch_backend::{
    app,
    config::Config,
    db,
    repository::PgStore,
    services::{omdb_client::OmdbClient, token_service::TokenService},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}. Please check your .env file.", e);
    })?;
    tracing::info!(?config, "Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let omdb = OmdbClient::new(
        config.omdb_base_url.clone(),
        config.omdb_api_key.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )?;
    if config.omdb_api_key.is_empty() {
        tracing::warn!("OMDB_API_KEY is not set; searches will be rejected upstream");
    }

    let state = AppState::new(Arc::new(PgStore::new(pool)), tokens, omdb);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
