//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, database connections, generator setup and the
//! Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::persistence::{MemoryLinkStore, PgLinkStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
///
/// Returns an error if no database URL is configured, the pool cannot be
/// created, or a migration fails.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

/// Builds the link store selected by `STORAGE_BACKEND`.
///
/// # Errors
///
/// Returns an error if the postgres backend is selected and the database is
/// unreachable.
pub async fn build_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    let store: Arc<dyn LinkStore> = match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory link store");
            Arc::new(MemoryLinkStore::new())
        }
        StorageBackend::Postgres => {
            let pool = connect_database(config).await?;
            tracing::info!("Using PostgreSQL link store");
            Arc::new(PgLinkStore::new(Arc::new(pool)))
        }
    };

    Ok(store)
}

/// Wires the store and generator described by `config` into [`AppState`].
///
/// # Errors
///
/// Returns an error if the store cannot be built or the generator rejects
/// the configured code length.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let store = build_store(config).await?;

    let generator = config
        .code_generator
        .build(config.code_length)
        .context("Failed to build code generator")?;

    let mut state = AppState::new(
        store,
        generator,
        config.max_attempts,
        config.storage_backend,
    );

    if let Some(ref key) = config.api_key {
        state = state.with_api_key(key.as_str());
    }

    Ok(state)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (in-memory, or PostgreSQL with migrations applied)
/// - Code generator
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
