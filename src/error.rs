use std::io;
use thiserror::Error;

use crate::core::system_monitor::MetricSource;

/// Custom error type for sysdash
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{metric}: {message}")]
    MetricCollection {
        metric: MetricSource,
        message: String,
    },

    #[error("Metric collection incomplete: {0}")]
    PartialCollection(String),

    #[error("Metrics provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type alias for sysdash
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create a field-level collection error
    pub fn metric_collection<S: Into<String>>(metric: MetricSource, msg: S) -> Self {
        MonitorError::MetricCollection {
            metric,
            message: msg.into(),
        }
    }

    pub fn partial_collection<S: Into<String>>(msg: S) -> Self {
        MonitorError::PartialCollection(msg.into())
    }

    pub fn provider_unavailable<S: Into<String>>(msg: S) -> Self {
        MonitorError::ProviderUnavailable(msg.into())
    }

    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        MonitorError::Runtime(msg.into())
    }
}
