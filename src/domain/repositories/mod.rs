//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//! - Failures surface as [`StoreError`], which preserves constraint-violation
//!   kinds so services can translate them into domain errors
//!
//! # Available Repositories
//!
//! - [`AliasRepository`] - Alias rows and the atomic hit counter
//! - [`ClickRepository`] - The append-only click ledger and its aggregation
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod alias_repository;
pub mod click_repository;
pub mod store_error;

pub use alias_repository::AliasRepository;
pub use click_repository::ClickRepository;
pub use store_error::StoreError;

#[cfg(test)]
pub use alias_repository::MockAliasRepository;
#[cfg(test)]
pub use click_repository::MockClickRepository;
