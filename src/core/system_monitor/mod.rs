//! System monitoring core functionality.
//!
//! This module provides the business logic for sampling host metrics once per
//! cycle, tracking network throughput between cycles and driving the
//! sample -> render loop.

mod collector;
mod delta;
mod metrics;
mod provider;
mod runtime;
mod scheduler;

pub use collector::{SnapshotCollector, CPU_SAMPLE_WINDOW};
pub use delta::{compute_delta, DeltaState};
pub use metrics::{
    CpuInfo, DiskUsage, FieldError, MemoryInfo, MetricSource, NetworkCounters, Snapshot,
    TemperatureReading,
};
pub use provider::MetricsProvider;
pub use runtime::MonitorRuntime;
pub use scheduler::{CyclePhase, FrameSink, Scheduler, REFRESH_INTERVAL};
