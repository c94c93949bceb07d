//! Configuration tests. Serialized with a lock: they mutate process-wide
//! environment variables.

use std::sync::Mutex;

use rigmon::config::{Config, RunMode};
use rigmon::error::CollectorError;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const KEYS: &[&str] = &[
    "POSTGRES_HOST",
    "POSTGRES_PORT",
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
    "MONITOR_HOST",
    "MONITOR_PORT",
    "RIGMON_ENV",
    "RIGMON_REPORT_URL",
];

fn clear_env() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}

#[test]
fn missing_host_is_config_missing() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("POSTGRES_PORT", "5432");

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, CollectorError::ConfigMissing("POSTGRES_HOST")));
    assert!(err.is_fatal());
}

#[test]
fn unparsable_port_is_config_missing() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("POSTGRES_HOST", "db.local");
    std::env::set_var("POSTGRES_PORT", "not-a-port");

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, CollectorError::ConfigMissing("POSTGRES_PORT")));
}

#[test]
fn defaults_fill_the_optional_keys() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("POSTGRES_HOST", "db.local");
    std::env::set_var("POSTGRES_PORT", "5432");

    let config = Config::from_env().unwrap();
    assert_eq!(config.db_host, "db.local");
    assert_eq!(config.db_port, 5432);
    assert_eq!(config.db_user, "postgres");
    assert_eq!(config.monitor_host, "127.0.0.1");
    assert_eq!(config.monitor_port, 8085);
    assert_eq!(config.mode, RunMode::Production);
    assert_eq!(config.report_url, None);
    assert_eq!(config.sensor_url(), "http://127.0.0.1:8085/data.json");
}

#[test]
fn development_mode_switches_and_empty_sink_is_ignored() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("POSTGRES_HOST", "db.local");
    std::env::set_var("POSTGRES_PORT", "5432");
    std::env::set_var("RIGMON_ENV", "development");
    std::env::set_var("RIGMON_REPORT_URL", "");

    let config = Config::from_env().unwrap();
    assert_eq!(config.mode, RunMode::Development);
    assert_eq!(config.report_url, None);
}

#[test]
fn monitor_overrides_and_sink_are_honored() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("POSTGRES_HOST", "db.local");
    std::env::set_var("POSTGRES_PORT", "5432");
    std::env::set_var("MONITOR_HOST", "10.0.0.7");
    std::env::set_var("MONITOR_PORT", "9090");
    std::env::set_var("RIGMON_REPORT_URL", "http://reports.local/errors");

    let config = Config::from_env().unwrap();
    assert_eq!(config.sensor_url(), "http://10.0.0.7:9090/data.json");
    assert_eq!(
        config.report_url.as_deref(),
        Some("http://reports.local/errors")
    );
}
