//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and collision handling. Services consume repository
//! traits and provide a clean API for the external routing layer.
//!
//! # Available Services
//!
//! - [`services::alias_service::AliasService`] - Alias creation, lookup,
//!   redirection and ownership-scoped management
//! - [`services::stats_service::StatsService`] - Click recording and the
//!   gap-filled 30-day statistics series

pub mod dto;
pub mod services;
