//! HTTP server initialization and runtime setup.
//!
//! Selects the star store, applies migrations and runs the Axum server.

use crate::config::Config;
use crate::domain::repositories::StarRepository;
use crate::infrastructure::persistence::{InMemoryStarRepository, PgStarRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn connect_database(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    Ok(pool)
}

/// Builds the star repository selected by the configuration.
///
/// # Errors
///
/// Returns an error if a database is configured but unreachable.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn StarRepository>> {
    let repository: Arc<dyn StarRepository> = match &config.database_url {
        Some(url) => {
            let pool = connect_database(config, url).await?;
            tracing::info!("Star store: PostgreSQL");
            Arc::new(PgStarRepository::new(Arc::new(pool)))
        }
        None => {
            tracing::warn!("No database configured, stars are kept in memory");
            Arc::new(InMemoryStarRepository::new())
        }
    };

    Ok(repository)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let state = AppState::new(repository);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
