//! PostgreSQL pool setup.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

/// Pool sizing and retry settings for [`connect_with_retry`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    /// Total connection attempts, including the first one.
    pub attempts: usize,
    pub retry_delay: Duration,
}

/// Opens a connection pool, retrying with a fixed delay.
///
/// # Errors
///
/// Returns the last connection error once every attempt has failed.
pub async fn connect_with_retry(database_url: &str, settings: &PoolSettings) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.connect_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime);

    let strategy = FixedInterval::new(settings.retry_delay).take(settings.attempts.saturating_sub(1));

    let mut attempt = 0usize;
    let pool = Retry::spawn(strategy, || {
        attempt += 1;
        let options = options.clone();
        async move {
            options.connect(database_url).await.inspect_err(|e| {
                tracing::warn!(attempt, error = %e, "Database connection attempt failed");
            })
        }
    })
    .await
    .with_context(|| format!("Failed to connect to database after {} attempts", settings.attempts))?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Applies embedded migrations.
///
/// # Errors
///
/// Returns an error if any migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}
