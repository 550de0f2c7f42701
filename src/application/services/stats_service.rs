//! Click recording and daily statistics.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use serde_json::json;
use tracing::{error, info};

use crate::domain::entities::DailyCount;
use crate::domain::repositories::{ClickRepository, StoreError};
use crate::error::AppError;

/// Number of days in the reported statistics window, today included.
const STATS_WINDOW_DAYS: u64 = 30;

/// Service for recording clicks and producing the 30-day statistics series.
pub struct StatsService<R: ClickRepository> {
    repository: Arc<R>,
}

impl<R: ClickRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records one click event for an alias.
    ///
    /// Called on the redirect path after the alias resolved; the event
    /// timestamp is assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RelatedResourceNotFound`] if the alias does not
    /// exist and [`AppError::Internal`] on any other ledger failure.
    pub async fn record(&self, alias_id: &str) -> Result<(), AppError> {
        match self.repository.append(alias_id).await {
            Ok(()) => Ok(()),
            Err(StoreError::ForeignKeyViolation) => Err(AppError::related_resource_not_found(
                "Alias does not exist",
                json!({ "aliasId": alias_id }),
            )),
            Err(e) => {
                error!(error = %e, "failed to record click");
                Err(AppError::internal("Failed to record click", json!({})))
            }
        }
    }

    /// Produces the daily click series for an alias owned by `owner_id`.
    ///
    /// The result always spans exactly 30 calendar days,
    /// `[today - 29, today]` in UTC, ascending, with zero counts filled in
    /// for days without events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StatsNotFound`] when the alias has no click
    /// history at all (which also covers aliases that do not exist or are
    /// not owned by the caller) and [`AppError::Internal`] on storage
    /// failures.
    pub async fn stats(&self, alias_id: &str, owner_id: &str) -> Result<Vec<DailyCount>, AppError> {
        let raw = self
            .repository
            .daily_counts(alias_id, owner_id)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to get stats");
                AppError::internal("Failed to get statistics", json!({}))
            })?;

        if raw.is_empty() {
            return Err(AppError::stats_not_found(
                "Statistics not found",
                json!({ "aliasId": alias_id }),
            ));
        }

        info!(alias = %alias_id, days_with_clicks = raw.len(), "statistics retrieved");
        Ok(fill_missing_days(raw, Utc::now().date_naive()))
    }
}

/// Expands sparse daily counts into a dense 30-day series ending at `today`.
///
/// Days absent from `raw` are emitted with a zero count; days outside the
/// window are dropped (they only exist until the next retention sweep).
fn fill_missing_days(raw: Vec<DailyCount>, today: NaiveDate) -> Vec<DailyCount> {
    let counts: HashMap<NaiveDate, i64> = raw.into_iter().map(|d| (d.day, d.count)).collect();
    let start = today - Days::new(STATS_WINDOW_DAYS - 1);

    (0..STATS_WINDOW_DAYS)
        .map(|offset| {
            let day = start + Days::new(offset);
            DailyCount {
                day,
                count: counts.get(&day).copied().unwrap_or(0),
            }
        })
        .collect()
}
