// Platform-specific code module

pub mod sysinfo_provider;

// Re-exports for cleaner imports
pub use sysinfo_provider::{default_disk_path, SysinfoProvider};
