//! Fixed-interval poll loop: fetch -> extract -> persist, one tick at a time.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::config::RunMode;
use crate::error::CollectorError;
use crate::extract::extract;
use crate::report::FailureReporter;
use crate::sensor::SensorClient;
use crate::store::Store;
use crate::types::Reading;

/// Tick period. One reading per second is plenty for thermal trends.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

pub struct Poller {
    sensor: SensorClient,
    store: Store,
    reporter: FailureReporter,
    mode: RunMode,
}

impl Poller {
    pub fn new(
        sensor: SensorClient,
        store: Store,
        reporter: FailureReporter,
        mode: RunMode,
    ) -> Self {
        Self {
            sensor,
            store,
            reporter,
            mode,
        }
    }

    /// Run forever. A failed tick is reported and abandoned; the timer keeps
    /// firing. Ticks never overlap: the body is awaited between firings and
    /// missed firings are skipped rather than bursted.
    pub async fn run(self) {
        let mut ticker = interval(POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if let Err(err) = self.tick().await {
                self.reporter.report(&err).await;
            }
        }
    }

    async fn tick(&self) -> Result<(), CollectorError> {
        let tree = self.sensor.fetch().await?;
        let reading = extract(&tree)?;
        match self.mode {
            RunMode::Production => self.store.insert_reading(&reading).await?,
            RunMode::Development => println!("{}", diagnostic_line(&reading)),
        }
        Ok(())
    }
}

/// Console summary for development runs: capture time plus the first five
/// devices' temperatures, `-` where a device reports none.
pub fn diagnostic_line(reading: &Reading) -> String {
    let temps: Vec<String> = reading
        .devices
        .iter()
        .take(5)
        .map(|d| d.temperature.map_or_else(|| "-".into(), |t| format!("{t}")))
        .collect();
    format!(
        "{} | {}",
        reading.created.format("%Y-%m-%d %H:%M:%S"),
        temps.join(" ")
    )
}
