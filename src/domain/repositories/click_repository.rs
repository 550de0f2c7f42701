//! Repository trait for the append-only click ledger.

use crate::domain::entities::DailyCount;
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for click events.
///
/// Events are immutable once appended; they are read back only as day-level
/// aggregates and removed only by the retention sweep.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event with a server-assigned timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ForeignKeyViolation`] if `alias_id` references
    /// no existing alias.
    async fn append(&self, alias_id: &str) -> Result<(), StoreError>;

    /// Groups events by UTC calendar day for one alias, restricted to
    /// aliases owned by `owner_id`.
    ///
    /// The ownership check is a join in the query itself, so counts for
    /// other owners' aliases are never materialized. The result is sparse
    /// (days without events are absent) and ordered by day ascending.
    async fn daily_counts(
        &self,
        alias_id: &str,
        owner_id: &str,
    ) -> Result<Vec<DailyCount>, StoreError>;

    /// Deletes events older than `days` days and returns how many were
    /// removed.
    async fn purge_older_than(&self, days: i32) -> Result<u64, StoreError>;
}
