//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and the scheduled
//! retention sweep.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations and pool setup
//! - [`retention`] - Background purge task for stale click events

pub mod persistence;
pub mod retention;
