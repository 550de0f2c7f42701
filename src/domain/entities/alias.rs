//! Alias entity representing a short id mapped to a target link.

use serde::Serialize;

/// A short alias with its target link and usage counter.
///
/// `total_hits` counts successfully routed visits; it is incremented
/// atomically by the store during redirect-link retrieval and never
/// decreases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Alias {
    pub id: String,
    pub link: String,
    pub total_hits: i64,
    pub owner_id: String,
}

/// Input data for creating a new alias.
///
/// The `id` is either user-supplied or produced by the id generator;
/// `total_hits` always starts at zero on insert.
#[derive(Debug, Clone)]
pub struct NewAlias {
    pub id: String,
    pub link: String,
    pub owner_id: String,
}
