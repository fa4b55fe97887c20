//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, cache setup, and the Axum server lifecycle.

use crate::config::{Config, DbDriver};
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{
    MemoryShortLinkRepository, PgShortLinkRepository, PoolSettings, connect_with_retry,
    run_migrations,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage (PostgreSQL with migrations, or the in-memory store)
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let cache = build_cache(&config).await;

    let state = AppState::new(repository, cache, config.links.clone());
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_seconds);

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the repository selected by `DB_DRIVER`.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn ShortLinkRepository>> {
    match config.db_driver {
        DbDriver::Memory => {
            tracing::warn!("Using in-memory storage, links are lost on restart");
            Ok(Arc::new(MemoryShortLinkRepository::new()))
        }
        DbDriver::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres driver")?;

            let pool = connect_with_retry(database_url, &pool_settings(config)).await?;
            run_migrations(&pool).await?;

            Ok(Arc::new(PgShortLinkRepository::new(Arc::new(pool))))
        }
    }
}

/// Pool settings derived from the `DB_*` variables.
pub fn pool_settings(config: &Config) -> PoolSettings {
    PoolSettings {
        max_connections: config.db_max_connections,
        connect_timeout: Duration::from_secs(config.db_connect_timeout),
        idle_timeout: Duration::from_secs(config.db_idle_timeout),
        max_lifetime: Duration::from_secs(config.db_max_lifetime),
        attempts: config.db_connect_retries,
        retry_delay: Duration::from_millis(config.db_connect_retry_delay_ms),
    }
}

async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    }
}

/// Resolves on SIGINT or SIGTERM.
///
/// After the signal, in-flight requests get `timeout` to finish before the process
/// exits regardless.
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!(
        timeout_secs = timeout.as_secs(),
        "Shutdown signal received, draining connections"
    );

    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        tracing::warn!("Graceful shutdown timed out, exiting");
        std::process::exit(0);
    });
}
