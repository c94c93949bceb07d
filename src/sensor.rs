//! Sensor source client: one GET against the monitor's JSON endpoint per tick.

use reqwest::Client;

use crate::config::Config;
use crate::error::CollectorError;
use crate::types::RawNode;

pub struct SensorClient {
    http: Client,
    url: String,
}

impl SensorClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            url: config.sensor_url(),
        }
    }

    /// Fetch and parse the current tree. No retry here — the poll schedule
    /// is the retry policy.
    pub async fn fetch(&self) -> Result<RawNode, CollectorError> {
        let response = self.http.get(&self.url).send().await.map_err(classify)?;
        let response = response.error_for_status().map_err(classify)?;
        response.json::<RawNode>().await.map_err(classify)
    }
}

/// A refused or timed-out connection means the monitoring agent itself is
/// down; anything else counts as a malformed response.
fn classify(err: reqwest::Error) -> CollectorError {
    if err.is_connect() || err.is_timeout() {
        CollectorError::SensorUnreachable(err.to_string())
    } else {
        CollectorError::SensorMalformed(err.to_string())
    }
}
