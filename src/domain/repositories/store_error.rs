//! Store-level error classification.

use crate::utils::db_error::{is_foreign_key_violation, is_unique_violation};

/// Failure kinds surfaced by repository implementations.
///
/// Constraint violations are classified here so that services can decide
/// how to react (retry an autogenerated id, report a taken alias, reject a
/// missing owner) without ever inspecting driver errors themselves.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write (duplicate primary key).
    #[error("duplicate key")]
    DuplicateKey,

    /// A foreign-key constraint rejected the write (referenced row absent).
    #[error("foreign key violation")]
    ForeignKeyViolation,

    /// Any other database failure.
    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation(&e) {
            return StoreError::DuplicateKey;
        }
        if is_foreign_key_violation(&e) {
            return StoreError::ForeignKeyViolation;
        }
        StoreError::Database(e)
    }
}
