//! Failure boundary: classify, then exit, forward, or log.

use serde_json::json;
use tracing::{error, warn};

use crate::config::{Config, RunMode};
use crate::error::CollectorError;

#[derive(Clone)]
pub struct FailureReporter {
    http: reqwest::Client,
    /// Sink endpoint; only honored in production mode.
    sink: Option<String>,
}

impl FailureReporter {
    pub fn new(config: &Config) -> Self {
        let sink = match config.mode {
            RunMode::Production => config.report_url.clone(),
            RunMode::Development => None,
        };
        Self {
            http: reqwest::Client::new(),
            sink,
        }
    }

    /// Classify and handle. Fatal kinds terminate the process immediately;
    /// there is no cleanup to run.
    pub async fn report(&self, err: &CollectorError) {
        if err.is_fatal() {
            error!(kind = err.kind(), "{err}");
            std::process::exit(1);
        }
        self.notify(err).await;
    }

    /// The non-terminating half: forward to the sink when configured,
    /// otherwise log locally. Never raises.
    pub async fn notify(&self, err: &CollectorError) {
        match &self.sink {
            Some(url) => {
                let payload = json!({ "kind": err.kind(), "message": err.to_string() });
                if let Err(post_err) = self.http.post(url).json(&payload).send().await {
                    warn!("report sink rejected the error: {post_err}");
                    error!(kind = err.kind(), "{err}");
                }
            }
            None => error!(kind = err.kind(), "{err}"),
        }
    }
}
