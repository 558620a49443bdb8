//! `MetricsProvider` backed by the sysinfo crate.
//!
//! Each query builds its own sysinfo handle, so concurrent queries never share
//! state and need no locking.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sysinfo::{
    Components, CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System,
    MINIMUM_CPU_UPDATE_INTERVAL,
};

use crate::core::system_monitor::{
    CpuInfo, DiskUsage, MemoryInfo, MetricSource, MetricsProvider, NetworkCounters,
    TemperatureReading,
};
use crate::error::{MonitorError, Result};

/// Host metrics read through sysinfo
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoProvider;

impl SysinfoProvider {
    /// Create a provider, failing if sysinfo cannot read metrics on this OS
    pub fn new() -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MonitorError::provider_unavailable(format!(
                "sysinfo does not support {}",
                std::env::consts::OS
            )));
        }
        Ok(Self)
    }
}

impl MetricsProvider for SysinfoProvider {
    fn disk_usage(&self, path: &Path) -> Result<DiskUsage> {
        let disks = Disks::new_with_refreshed_list();
        let mounts: Vec<_> = disks
            .iter()
            .map(|disk| {
                (
                    disk.mount_point().to_path_buf(),
                    disk.file_system().to_string_lossy().to_string(),
                    disk.total_space(),
                    disk.available_space(),
                )
            })
            .collect();

        let (mount, fs_type, total, available) = select_mount(mounts, path).ok_or_else(|| {
            MonitorError::metric_collection(
                MetricSource::Disk,
                format!("no filesystem mounted at {}", path.display()),
            )
        })?;

        Ok(disk_usage_from_space(
            mount.to_string_lossy().to_string(),
            fs_type,
            total,
            available,
        ))
    }

    fn cpu_info(&self) -> Result<Vec<CpuInfo>> {
        let system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_frequency()),
        );

        let info = group_cpus(
            system
                .cpus()
                .iter()
                .map(|cpu| (cpu.brand().to_string(), cpu.frequency())),
        );
        if info.is_empty() {
            return Err(MonitorError::metric_collection(
                MetricSource::CpuInfo,
                "no CPU information available",
            ));
        }
        Ok(info)
    }

    fn cpu_percent(&self, window: Duration, per_core: bool) -> Result<Vec<f32>> {
        let mut system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );

        // sysinfo computes usage between two refreshes
        system.refresh_cpu_usage();
        std::thread::sleep(window.max(MINIMUM_CPU_UPDATE_INTERVAL));
        system.refresh_cpu_usage();

        if system.cpus().is_empty() {
            return Err(MonitorError::metric_collection(
                MetricSource::CpuPercent,
                "no CPUs reported",
            ));
        }

        if per_core {
            Ok(system.cpus().iter().map(|cpu| cpu.cpu_usage()).collect())
        } else {
            Ok(vec![system.global_cpu_usage()])
        }
    }

    fn memory_info(&self) -> Result<MemoryInfo> {
        let system = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        let total = system.total_memory();
        if total == 0 {
            return Err(MonitorError::metric_collection(
                MetricSource::Memory,
                "total memory reported as zero",
            ));
        }

        let used = system.used_memory();
        Ok(MemoryInfo {
            total_bytes: total,
            used_bytes: used,
            available_bytes: system.available_memory(),
            used_percent: percent_of(used, total),
        })
    }

    fn network_counters(&self, per_interface: bool) -> Result<Vec<NetworkCounters>> {
        let networks = Networks::new_with_refreshed_list();
        let counters: Vec<NetworkCounters> = networks
            .iter()
            .map(|(name, data)| NetworkCounters {
                name: name.to_string(),
                bytes_sent: data.total_transmitted(),
                bytes_recv: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_recv: data.total_packets_received(),
            })
            .collect();

        if per_interface {
            Ok(order_interfaces(counters))
        } else {
            Ok(vec![sum_interfaces(&counters)])
        }
    }

    fn temperatures(&self) -> Result<Vec<TemperatureReading>> {
        let components = Components::new_with_refreshed_list();
        Ok(components
            .iter()
            .filter_map(|comp| {
                comp.temperature()
                    .filter(|t| t.is_finite())
                    .map(|celsius| TemperatureReading {
                        label: comp.label().to_string(),
                        celsius,
                    })
            })
            .collect())
    }
}

/// Path whose filesystem is reported in the disk row
pub fn default_disk_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\")
    } else {
        PathBuf::from("/")
    }
}

fn percent_of(part: u64, total: u64) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn disk_usage_from_space(
    mount_point: String,
    fs_type: String,
    total: u64,
    available: u64,
) -> DiskUsage {
    let used = total.saturating_sub(available);
    DiskUsage {
        mount_point,
        fs_type,
        total_bytes: total,
        used_bytes: used,
        free_bytes: available,
        used_percent: percent_of(used, total),
    }
}

/// Pick the mount that contains `path`, preferring the most specific one
fn select_mount<T>(
    mounts: Vec<(PathBuf, String, T, T)>,
    path: &Path,
) -> Option<(PathBuf, String, T, T)> {
    mounts
        .into_iter()
        .filter(|(mount, ..)| path.starts_with(mount))
        .max_by_key(|(mount, ..)| mount.as_os_str().len())
}

/// Collapse logical CPUs into one record per model name
fn group_cpus(cpus: impl Iterator<Item = (String, u64)>) -> Vec<CpuInfo> {
    let mut grouped: Vec<CpuInfo> = Vec::new();
    for (brand, mhz) in cpus {
        let brand = brand.trim().to_string();
        match grouped.iter_mut().find(|c| c.model_name == brand) {
            Some(existing) => {
                existing.cores += 1;
                existing.mhz = existing.mhz.max(mhz);
            }
            None => grouped.push(CpuInfo {
                model_name: brand,
                mhz,
                cores: 1,
            }),
        }
    }
    grouped
}

/// Name prefixes of bridges, tunnels and container links
const VIRTUAL_PREFIXES: [&str; 11] = [
    "br-", "docker", "veth", "virbr", "cni", "flannel", "vmnet", "vboxnet", "tun", "tap", "utun",
];

fn is_loopback(name: &str) -> bool {
    name.to_ascii_lowercase().starts_with("lo")
}

fn is_virtual(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    VIRTUAL_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// 0 for physical, 1 for virtual, 2 for loopback
fn interface_rank(name: &str) -> u8 {
    if is_loopback(name) {
        2
    } else if is_virtual(name) {
        1
    } else {
        0
    }
}

/// sysinfo hands interfaces back in hash order; fix it so index 0 is stable.
/// Physical interfaces come first, then virtual ones, loopback last, each
/// group by name.
fn order_interfaces(mut counters: Vec<NetworkCounters>) -> Vec<NetworkCounters> {
    counters.sort_by(|a, b| {
        interface_rank(&a.name)
            .cmp(&interface_rank(&b.name))
            .then_with(|| a.name.cmp(&b.name))
    });
    counters
}

fn sum_interfaces(counters: &[NetworkCounters]) -> NetworkCounters {
    counters.iter().fold(
        NetworkCounters {
            name: "all".to_string(),
            ..Default::default()
        },
        |mut acc, c| {
            acc.bytes_sent = acc.bytes_sent.saturating_add(c.bytes_sent);
            acc.bytes_recv = acc.bytes_recv.saturating_add(c.bytes_recv);
            acc.packets_sent = acc.packets_sent.saturating_add(c.packets_sent);
            acc.packets_recv = acc.packets_recv.saturating_add(c.packets_recv);
            acc
        },
    )
}
