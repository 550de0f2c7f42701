//! PostgreSQL implementation of the click ledger.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::DailyCount;
use crate::domain::repositories::{ClickRepository, StoreError};

/// PostgreSQL repository for the append-only click ledger.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn append(&self, alias_id: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO click_events (alias_id)
            VALUES ($1)
            "#,
        )
        .bind(alias_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn daily_counts(
        &self,
        alias_id: &str,
        owner_id: &str,
    ) -> Result<Vec<DailyCount>, StoreError> {
        // Ownership is enforced in the join so counts for foreign aliases
        // never leave the database.
        let counts = sqlx::query_as::<_, DailyCount>(
            r#"
            SELECT (c.created_at AT TIME ZONE 'UTC')::date AS day,
                   COUNT(*) AS count
            FROM click_events c
            JOIN aliases a ON a.id = c.alias_id
            WHERE c.alias_id = $1 AND a.owner_id = $2
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(alias_id)
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(counts)
    }

    async fn purge_older_than(&self, days: i32) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM click_events
            WHERE created_at < now() - make_interval(days => $1)
            "#,
        )
        .bind(days)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }
}
