//! Failure taxonomy. Fatal-vs-recoverable is a pure function of the kind so
//! the policy can be tested on its own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("required '{0}' environment variable")]
    ConfigMissing(&'static str),

    #[error("datastore unreachable: {0}")]
    StoreUnreachable(String),

    #[error("sensor unreachable: {0}")]
    SensorUnreachable(String),

    #[error("sensor returned malformed data: {0}")]
    SensorMalformed(String),

    #[error("tree extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("persist failed: {0}")]
    PersistFailed(String),
}

impl CollectorError {
    /// A refused datastore or sensor connection means the rig is unusable,
    /// so the collector exits instead of spinning. Everything else is
    /// terminal only to the current unit of work.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigMissing(_) | Self::StoreUnreachable(_) | Self::SensorUnreachable(_)
        )
    }

    /// Short stable tag, used in the reporting sink payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigMissing(_) => "config_missing",
            Self::StoreUnreachable(_) => "store_unreachable",
            Self::SensorUnreachable(_) => "sensor_unreachable",
            Self::SensorMalformed(_) => "sensor_malformed",
            Self::ExtractionFailed(_) => "extraction_failed",
            Self::PersistFailed(_) => "persist_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CollectorError;

    #[test]
    fn connection_class_is_fatal() {
        assert!(CollectorError::ConfigMissing("POSTGRES_HOST").is_fatal());
        assert!(CollectorError::StoreUnreachable("refused".into()).is_fatal());
        assert!(CollectorError::SensorUnreachable("refused".into()).is_fatal());
    }

    #[test]
    fn tick_local_failures_are_recoverable() {
        assert!(!CollectorError::SensorMalformed("bad json".into()).is_fatal());
        assert!(!CollectorError::ExtractionFailed("no rig node".into()).is_fatal());
        assert!(!CollectorError::PersistFailed("constraint".into()).is_fatal());
    }

    #[test]
    fn kinds_are_stable_tags() {
        assert_eq!(
            CollectorError::SensorUnreachable(String::new()).kind(),
            "sensor_unreachable"
        );
        assert_eq!(
            CollectorError::PersistFailed(String::new()).kind(),
            "persist_failed"
        );
    }
}
