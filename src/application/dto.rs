//! Input types for the application services.
//!
//! Inputs are validated with the `validator` derive; rule violations are
//! translated to [`crate::error::AppError::Validation`] at the service
//! boundary.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for user-supplied alias ids.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[[:ascii:]]+$").unwrap());

/// Request to create a new alias.
///
/// When `alias` is omitted, the service generates an 8-character random id
/// and retries on collision; a supplied alias that already exists is a
/// conflict instead.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAlias {
    /// Optional user-supplied alias id (ASCII, at most 16 characters).
    #[validate(length(min = 1, max = 16))]
    #[validate(regex(path = "*ALIAS_REGEX", message = "alias must be ASCII"))]
    pub alias: Option<String>,

    /// Target link the alias redirects to.
    pub link: String,
}
