use std::path::Path;
use std::time::Duration;

use super::metrics::{CpuInfo, DiskUsage, MemoryInfo, NetworkCounters, TemperatureReading};
use crate::error::Result;

/// Trait for host metrics providers
///
/// Every query is blocking and independent of the others, so the collector can
/// run all of them at the same time. Implementations are provided in the
/// platform layer.
pub trait MetricsProvider: Send + Sync {
    /// Usage of the filesystem mounted at (or containing) `path`
    fn disk_usage(&self, path: &Path) -> Result<DiskUsage>;

    /// CPU identity records (model name, clock, core count)
    fn cpu_info(&self) -> Result<Vec<CpuInfo>>;

    /// CPU utilization observed over `window`.
    ///
    /// Blocks for at least `window`. Returns one value per logical core when
    /// `per_core` is set, otherwise a single overall value.
    fn cpu_percent(&self, window: Duration, per_core: bool) -> Result<Vec<f32>>;

    fn memory_info(&self) -> Result<MemoryInfo>;

    /// Byte and packet counters, in a stable order.
    ///
    /// With `per_interface` unset the list holds a single summed entry.
    fn network_counters(&self, per_interface: bool) -> Result<Vec<NetworkCounters>>;

    fn temperatures(&self) -> Result<Vec<TemperatureReading>>;
}
