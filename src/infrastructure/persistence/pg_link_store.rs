//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, StoreError};
use crate::utils::db_error::is_unique_violation;

#[derive(sqlx::FromRow)]
struct LinkRow {
    short_id: String,
    original_url: String,
    hits: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.short_id, row.original_url, row.hits, row.created_at)
    }
}

/// PostgreSQL store for links.
///
/// Uniqueness comes from the primary key on `short_id` and hit counting from a
/// single `UPDATE ... SET hits = hits + 1`, so no client-side locking is
/// needed and several processes can share one table.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn save(&self, link: Link) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO links (short_id, original_url, hits, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&link.id)
        .bind(&link.url)
        .bind(link.hits)
        .bind(link.created_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            // `short_id` is the table's only unique column, whatever its constraint is named.
            if is_unique_violation(&e, None) {
                StoreError::DuplicateId
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT short_id, original_url, hits, created_at
            FROM links
            WHERE short_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::from).ok_or(StoreError::NotFound)
    }

    async fn increment_hits(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE links SET hits = hits + 1 WHERE short_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
