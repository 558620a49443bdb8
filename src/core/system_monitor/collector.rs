use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::{JoinError, JoinHandle};

use super::metrics::*;
use super::provider::MetricsProvider;
use crate::error::{MonitorError, Result};
use crate::platform::default_disk_path;

/// Window the CPU utilization query observes
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Runs every provider query concurrently and merges the results into a `Snapshot`
pub struct SnapshotCollector {
    provider: Arc<dyn MetricsProvider>,
    disk_path: PathBuf,
    cpu_window: Duration,
}

impl SnapshotCollector {
    pub fn new(provider: Arc<dyn MetricsProvider>) -> Self {
        Self {
            provider,
            disk_path: default_disk_path(),
            cpu_window: CPU_SAMPLE_WINDOW,
        }
    }

    /// Report the filesystem containing `path` instead of the default one
    pub fn with_disk_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.disk_path = path.into();
        self
    }

    /// Collect one snapshot.
    ///
    /// Returns once all six queries have finished. A failed or panicked query
    /// leaves its field at the default value and adds a `FieldError`.
    pub async fn collect(&self) -> Snapshot {
        let started = Instant::now();

        let disk_path = self.disk_path.clone();
        let cpu_window = self.cpu_window;

        let disk = self.spawn(move |p| p.disk_usage(&disk_path));
        let cpu_info = self.spawn(|p| p.cpu_info());
        let cpu_percent = self.spawn(move |p| p.cpu_percent(cpu_window, true));
        let memory = self.spawn(|p| p.memory_info());
        let network = self.spawn(|p| p.network_counters(true));
        let temperatures = self.spawn(|p| p.temperatures());

        let (disk, cpu_info, cpu_percent, memory, network, temperatures) =
            tokio::join!(disk, cpu_info, cpu_percent, memory, network, temperatures);

        let mut errors = Vec::new();
        let snapshot = Snapshot {
            timestamp: chrono::Utc::now().timestamp(),
            disk: settle(MetricSource::Disk, disk, &mut errors),
            cpu_info: settle(MetricSource::CpuInfo, cpu_info, &mut errors),
            cpu_percent: settle(MetricSource::CpuPercent, cpu_percent, &mut errors),
            memory: settle(MetricSource::Memory, memory, &mut errors),
            network: settle(MetricSource::Network, network, &mut errors),
            temperatures: settle(MetricSource::Temperature, temperatures, &mut errors),
            errors,
        };

        log::debug!(
            "Snapshot collected in {:?} ({} failed sub-queries)",
            started.elapsed(),
            snapshot.errors.len()
        );

        snapshot
    }

    fn spawn<T, F>(&self, query: F) -> JoinHandle<Result<T>>
    where
        T: Send + 'static,
        F: FnOnce(&dyn MetricsProvider) -> Result<T> + Send + 'static,
    {
        let provider = Arc::clone(&self.provider);
        tokio::task::spawn_blocking(move || query(provider.as_ref()))
    }
}

/// Unwrap one sub-query result, recording the failure if there was one
fn settle<T: Default>(
    source: MetricSource,
    joined: std::result::Result<Result<T>, JoinError>,
    errors: &mut Vec<FieldError>,
) -> T {
    let message = match joined {
        Ok(Ok(value)) => return value,
        Ok(Err(MonitorError::MetricCollection { message, .. })) => message,
        Ok(Err(e)) => e.to_string(),
        Err(e) if e.is_panic() => "query panicked".to_string(),
        Err(e) => e.to_string(),
    };

    log::debug!("{} query failed: {}", source, message);
    errors.push(FieldError { source, message });
    T::default()
}
