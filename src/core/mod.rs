// Core business logic module

pub mod system_monitor;

// Re-export commonly used items
pub use system_monitor::{Scheduler, Snapshot, SnapshotCollector};
