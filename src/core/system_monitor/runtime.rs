//! Tokio runtime that hosts the scheduler and the collector's blocking queries.

use std::future::Future;

use crate::error::{MonitorError, Result};

/// Upper bound on threads running provider queries at once
const MAX_BLOCKING_THREADS: usize = 16;

/// Wrapper around the Tokio runtime for metrics collection.
pub struct MonitorRuntime {
    runtime: tokio::runtime::Runtime,
}

impl MonitorRuntime {
    pub fn new() -> Result<Self> {
        // Two workers are plenty: the scheduler is the only long-lived task
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .max_blocking_threads(MAX_BLOCKING_THREADS)
            .enable_time()
            .thread_name("metrics-worker")
            .build()
            .map_err(|e| MonitorError::runtime(format!("failed to start tokio runtime: {}", e)))?;

        log::debug!("Metrics runtime started");
        Ok(Self { runtime })
    }

    /// Drive `future` to completion on the runtime
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
