//! Repository trait for alias data access.

use crate::domain::entities::{Alias, NewAlias};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for alias rows.
///
/// Provides creation, lookup, ownership-scoped listing and deletion, and the
/// atomic increment-and-fetch used on the redirect path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Inserts a new alias row with a zero hit counter.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if the id already exists and
    /// [`StoreError::ForeignKeyViolation`] if `owner_id` references no user.
    async fn create(&self, new_alias: NewAlias) -> Result<Alias, StoreError>;

    /// Point lookup by alias id.
    ///
    /// Returns `Ok(None)` when the alias does not exist.
    async fn by_id(&self, id: &str) -> Result<Option<Alias>, StoreError>;

    /// Atomically increments `total_hits` and returns the target link.
    ///
    /// Must execute as a single `UPDATE .. RETURNING` statement so that
    /// concurrent visits never lose an increment. Returns `Ok(None)` when
    /// zero rows matched.
    async fn redirect_link(&self, id: &str) -> Result<Option<String>, StoreError>;

    /// Lists aliases belonging to `owner_id` in primary-key order.
    async fn by_owner(
        &self,
        owner_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Alias>, StoreError>;

    /// Deletes the alias only when both id and owner match.
    ///
    /// Zero rows affected is success: deleting a missing or foreign alias
    /// is a no-op.
    async fn delete(&self, id: &str, owner_id: &str) -> Result<(), StoreError>;
}
