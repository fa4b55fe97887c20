//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{LinkCounts, NewShortLink, ShortLinkRecord};
use crate::domain::errors::LinkError;
use crate::domain::repositories::ShortLinkRepository;

/// PostgreSQL repository over the `short_links` table.
///
/// The `(host, path)` primary key enforces path uniqueness; a violation is reported as
/// [`LinkError::DuplicatePath`].
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    host: String,
    path: String,
    raw_query: String,
    unguessable: bool,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLinkRecord {
    fn from(row: ShortLinkRow) -> Self {
        ShortLinkRecord::new(
            row.host,
            row.path,
            row.raw_query,
            row.unguessable,
            row.created_at,
        )
    }
}

/// Maps SQLx errors onto the link error taxonomy.
fn map_sqlx_error(e: sqlx::Error) -> LinkError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return LinkError::DuplicatePath;
    }

    tracing::error!(error = %e, "Database error");
    LinkError::storage(e)
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn get(&self, host: &str, path: &str) -> Result<Option<ShortLinkRecord>, LinkError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT host, path, raw_query, unguessable, created_at
            FROM short_links
            WHERE host = $1 AND path = $2
            "#,
        )
        .bind(host)
        .bind(path)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ShortLinkRecord::from))
    }

    async fn find_guessable(
        &self,
        host: &str,
        raw_query: &str,
    ) -> Result<Option<String>, LinkError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT path
            FROM short_links
            WHERE host = $1 AND raw_query = $2 AND NOT unguessable
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(host)
        .bind(raw_query)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn put(&self, new_link: NewShortLink) -> Result<(), LinkError> {
        sqlx::query(
            r#"
            INSERT INTO short_links (host, path, raw_query, unguessable)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&new_link.host)
        .bind(&new_link.path)
        .bind(&new_link.raw_query)
        .bind(new_link.unguessable)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn count(&self) -> Result<LinkCounts, LinkError> {
        let (guessable, unguessable) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE NOT unguessable),
                COUNT(*) FILTER (WHERE unguessable)
            FROM short_links
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(LinkCounts {
            guessable,
            unguessable,
        })
    }

    async fn ping(&self) -> Result<(), LinkError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}
