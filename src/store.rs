//! Thin persistence layer: one table of readings in Postgres.

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::types::Json;
use std::time::Duration;

use crate::config::{Config, DB_NAME};
use crate::error::CollectorError;
use crate::types::Reading;

/// Table the readings land in.
pub const TABLE: &str = "gpu";

#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Connect and make sure the table exists. The pool is capped at one
    /// connection: the poller is the only user of its handle, and the
    /// retention job opens its own.
    pub async fn connect(config: &Config) -> Result<Self, CollectorError> {
        let mut options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .database(DB_NAME);
        if !config.db_password.is_empty() {
            options = options.password(&config.db_password);
        }

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(|e| CollectorError::StoreUnreachable(e.to_string()))?;

        let create = format!(
            "CREATE TABLE IF NOT EXISTS {TABLE} (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                created TIMESTAMPTZ NOT NULL,
                device JSONB NOT NULL
            )"
        );
        sqlx::query(&create)
            .execute(&pool)
            .await
            .map_err(|e| CollectorError::StoreUnreachable(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Append one reading. No dedup; the schedule guarantees one per tick.
    pub async fn insert_reading(&self, reading: &Reading) -> Result<(), CollectorError> {
        let insert = format!("INSERT INTO {TABLE} (name, created, device) VALUES ($1, $2, $3)");
        sqlx::query(&insert)
            .bind(&reading.name)
            .bind(reading.created)
            .bind(Json(&reading.devices))
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(())
    }

    /// Bulk-delete readings older than the cutoff; returns how many went.
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, CollectorError> {
        let delete = format!("DELETE FROM {TABLE} WHERE created < $1");
        let result = sqlx::query(&delete)
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(result.rows_affected())
    }
}

/// I/O-class failures mean the connection is gone, which is the fatal class;
/// anything else only loses the current operation.
fn classify(err: sqlx::Error) -> CollectorError {
    let connection_lost = matches!(
        err,
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
    );
    if connection_lost {
        CollectorError::StoreUnreachable(err.to_string())
    } else {
        CollectorError::PersistFailed(err.to_string())
    }
}
