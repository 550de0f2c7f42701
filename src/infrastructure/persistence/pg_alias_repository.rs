//! PostgreSQL implementation of the alias repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Alias, NewAlias};
use crate::domain::repositories::{AliasRepository, StoreError};

/// PostgreSQL repository for alias storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. The hit
/// counter is only ever touched through [`AliasRepository::redirect_link`],
/// a single `UPDATE .. RETURNING` statement.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn create(&self, new_alias: NewAlias) -> Result<Alias, StoreError> {
        let alias = sqlx::query_as::<_, Alias>(
            r#"
            INSERT INTO aliases (id, link, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, link, total_hits, owner_id
            "#,
        )
        .bind(&new_alias.id)
        .bind(&new_alias.link)
        .bind(&new_alias.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(alias)
    }

    async fn by_id(&self, id: &str) -> Result<Option<Alias>, StoreError> {
        let alias = sqlx::query_as::<_, Alias>(
            r#"
            SELECT id, link, total_hits, owner_id
            FROM aliases
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(alias)
    }

    async fn redirect_link(&self, id: &str) -> Result<Option<String>, StoreError> {
        // One round trip: the increment and the link fetch must not be
        // separable, or concurrent visits lose updates.
        let link = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE aliases
            SET total_hits = total_hits + 1
            WHERE id = $1
            RETURNING link
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn by_owner(
        &self,
        owner_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Alias>, StoreError> {
        let aliases = sqlx::query_as::<_, Alias>(
            r#"
            SELECT id, link, total_hits, owner_id
            FROM aliases
            WHERE owner_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(aliases)
    }

    async fn delete(&self, id: &str, owner_id: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            DELETE FROM aliases
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
