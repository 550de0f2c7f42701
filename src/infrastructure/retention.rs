//! Scheduled retention sweep for stale click events.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use crate::domain::repositories::ClickRepository;

/// Runs the retention sweep on a fixed period until the task is dropped.
///
/// The consuming bootstrap spawns this as an independent task:
///
/// ```ignore
/// tokio::spawn(run_retention_worker(repo, Duration::from_secs(86_400), 30));
/// ```
///
/// Each tick issues one bounded `DELETE`; the serving path is never blocked
/// on it. A failed sweep is logged and retried on the next tick, so a
/// transient database error cannot take the worker down. The first sweep
/// runs immediately after spawning.
pub async fn run_retention_worker<R>(repository: Arc<R>, period: Duration, retention_days: i32)
where
    R: ClickRepository + 'static,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match repository.purge_older_than(retention_days).await {
            Ok(removed) => {
                info!(removed, retention_days, "purged stale click events");
            }
            Err(e) => {
                error!(error = %e, "retention sweep failed, will retry on next tick");
            }
        }
    }
}
