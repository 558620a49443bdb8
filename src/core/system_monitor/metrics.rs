use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MonitorError;

/// Complete system metrics snapshot, taken once per cycle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: i64, // Unix timestamp
    pub disk: DiskUsage,
    pub cpu_info: Vec<CpuInfo>,
    pub cpu_percent: Vec<f32>, // one entry per logical core
    pub memory: MemoryInfo,
    pub network: Vec<NetworkCounters>,
    pub temperatures: Vec<TemperatureReading>,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiskUsage {
    pub mount_point: String,
    pub fs_type: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CpuInfo {
    pub model_name: String,
    pub mhz: u64,
    pub cores: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MemoryInfo {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub used_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkCounters {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemperatureReading {
    pub label: String,
    pub celsius: f32,
}

/// The six independent sub-queries that make up a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricSource {
    Disk,
    CpuInfo,
    CpuPercent,
    Memory,
    Network,
    Temperature,
}

impl MetricSource {
    pub const ALL: [MetricSource; 6] = [
        MetricSource::Disk,
        MetricSource::CpuInfo,
        MetricSource::CpuPercent,
        MetricSource::Memory,
        MetricSource::Network,
        MetricSource::Temperature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricSource::Disk => "disk",
            MetricSource::CpuInfo => "cpu info",
            MetricSource::CpuPercent => "cpu percent",
            MetricSource::Memory => "memory",
            MetricSource::Network => "network",
            MetricSource::Temperature => "temperature",
        }
    }
}

impl fmt::Display for MetricSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed sub-query, kept alongside the (zero-valued) field it would have filled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub source: MetricSource,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

impl Snapshot {
    /// Whether the given sub-query failed this cycle
    pub fn failed(&self, source: MetricSource) -> bool {
        self.errors.iter().any(|e| e.source == source)
    }

    /// At least one sub-query produced data
    pub fn has_usable_data(&self) -> bool {
        MetricSource::ALL.iter().any(|source| !self.failed(*source))
    }

    /// Overall CPU utilization, averaged over the per-core samples
    pub fn cpu_usage_percent(&self) -> Option<f32> {
        if self.cpu_percent.is_empty() {
            return None;
        }
        let sum: f32 = self.cpu_percent.iter().sum();
        Some(sum / self.cpu_percent.len() as f32)
    }

    pub fn cpu_model(&self) -> Option<&str> {
        self.cpu_info
            .first()
            .map(|c| c.model_name.trim())
            .filter(|name| !name.is_empty())
    }

    /// The interface the throughput delta is tracked on (always index 0)
    pub fn primary_interface(&self) -> Option<&NetworkCounters> {
        self.network.first()
    }

    pub fn primary_temperature(&self) -> Option<&TemperatureReading> {
        self.temperatures.first()
    }

    /// All field-level failures merged into one error, if there were any
    pub fn aggregate_error(&self) -> Option<MonitorError> {
        if self.errors.is_empty() {
            return None;
        }
        let joined = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Some(MonitorError::partial_collection(joined))
    }
}
