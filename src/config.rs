//! Process configuration, read from the environment once at startup.
//! No module-level mutable state: everything lands in one `Config` value
//! that the tasks borrow or clone.

use std::env;

use crate::error::CollectorError;

/// Database the readings live in.
pub const DB_NAME: &str = "miner";

/// Fixed path the monitor serves its tree on.
pub const SENSOR_PATH: &str = "/data.json";

const DEFAULT_MONITOR_HOST: &str = "127.0.0.1";
const DEFAULT_MONITOR_PORT: u16 = 8085;

/// `development` swaps persistence for a diagnostic console line and keeps
/// failure reports local regardless of sink configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub monitor_host: String,
    pub monitor_port: u16,
    pub mode: RunMode,
    /// Opaque endpoint for the failure reporting sink, if any.
    pub report_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, CollectorError> {
        let db_host = require("POSTGRES_HOST")?;
        let db_port = require("POSTGRES_PORT")?
            .parse()
            .map_err(|_| CollectorError::ConfigMissing("POSTGRES_PORT"))?;

        Ok(Self {
            db_host,
            db_port,
            db_user: env::var("POSTGRES_USER").unwrap_or_else(|_| "postgres".into()),
            db_password: env::var("POSTGRES_PASSWORD").unwrap_or_default(),
            monitor_host: env::var("MONITOR_HOST").unwrap_or_else(|_| DEFAULT_MONITOR_HOST.into()),
            monitor_port: env::var("MONITOR_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MONITOR_PORT),
            mode: match env::var("RIGMON_ENV").as_deref() {
                Ok("development") => RunMode::Development,
                _ => RunMode::Production,
            },
            report_url: env::var("RIGMON_REPORT_URL").ok().filter(|v| !v.is_empty()),
        })
    }

    pub fn sensor_url(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.monitor_host, self.monitor_port, SENSOR_PATH
        )
    }
}

fn require(key: &'static str) -> Result<String, CollectorError> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(CollectorError::ConfigMissing(key))
}
