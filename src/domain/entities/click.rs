//! Daily click aggregate derived from the append-only event ledger.

use chrono::NaiveDate;
use serde::Serialize;

/// Number of click events recorded on one UTC calendar day.
///
/// Derived at query time from the click ledger; never stored. A fixed
/// 30-day series of these is produced by
/// [`crate::application::services::StatsService::stats`], with absent days
/// reported as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: i64,
}
