//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx, plus
//! pool construction for the consuming bootstrap.
//!
//! # Repositories
//!
//! - [`PgAliasRepository`] - Alias storage and the atomic hit counter
//! - [`PgClickRepository`] - Click ledger, aggregation and retention purge

pub mod pg_alias_repository;
pub mod pg_click_repository;

pub use pg_alias_repository::PgAliasRepository;
pub use pg_click_repository::PgClickRepository;

use crate::config::Config;
use anyhow::Result;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Embedded migrations for the alias and click-event schema.
///
/// The consuming bootstrap applies these before serving:
/// `MIGRATOR.run(&pool).await?`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Builds a connection pool honoring the pool settings in [`Config`].
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");
    Ok(pool)
}
