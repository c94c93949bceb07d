//! Daily retention sweep: deletes readings past the retention window.

use chrono::{DateTime, Days, Duration, NaiveTime, TimeZone, Utc};
use tracing::info;

use crate::config::Config;
use crate::error::CollectorError;
use crate::report::FailureReporter;
use crate::store::Store;

/// Maximum age a reading may reach before it becomes eligible for deletion.
pub const RETENTION_WINDOW_DAYS: i64 = 365;

/// The sweep fires at local midnight at the rig site (UTC+7, no DST).
const SITE_UTC_OFFSET_HOURS: i64 = 7;

/// Readings created before this instant have outlived the retention window.
pub fn retention_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RETENTION_WINDOW_DAYS)
}

/// Next site-local midnight strictly after `after`.
pub fn next_sweep(after: DateTime<Utc>) -> DateTime<Utc> {
    let offset = Duration::hours(SITE_UTC_OFFSET_HOURS);
    let site_wall = (after + offset).naive_utc();
    let midnight = (site_wall.date() + Days::new(1)).and_time(NaiveTime::MIN);
    Utc.from_utc_datetime(&midnight) - offset
}

/// Runs until process exit. Failures — a refused store connection included —
/// are reported without cancelling the schedule; the next firing still
/// happens.
pub async fn run(config: Config, reporter: FailureReporter) {
    loop {
        let now = Utc::now();
        let wait = (next_sweep(now) - now).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;

        match sweep(&config).await {
            Ok(deleted) => info!(deleted, "retention sweep completed"),
            Err(err) => reporter.notify(&err).await,
        }
    }
}

/// One firing: fresh connection, one bulk delete.
async fn sweep(config: &Config) -> Result<u64, CollectorError> {
    let store = Store::connect(config).await?;
    store.delete_older_than(retention_cutoff(Utc::now())).await
}
