// sysdash Library - Public API

// Re-export error types
pub mod error;
pub use error::{MonitorError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::system_monitor::{MetricsProvider, Snapshot};

// Initialize logging
//
// Defaults to warnings only: log lines go to stderr and would otherwise be
// drawn over the dashboard. RUST_LOG overrides the level.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
