//! Monitor command handler.
//!
//! Runs the live dashboard, or streams JSON snapshots when asked to.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::system_monitor::{MonitorRuntime, Scheduler, SnapshotCollector};
use crate::platform::SysinfoProvider;
use crate::ui::dashboard::{run_dashboard, DashboardConfig};
use crate::ui::JsonLines;

/// Execute the monitor command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let selection = matches.get_one::<usize>("interface").copied().unwrap_or(0);
    let once = matches.get_flag("once");
    let json_output = matches.get_flag("json");

    // Handle JSON output mode (non-TUI)
    if json_output {
        if selection != 0 {
            crate::ui::warn("--interface has no effect with --json");
        }
        return run_json_output(once);
    }

    run_dashboard(DashboardConfig { selection, once }).context("Failed to run system monitor")
}

/// Run in JSON output mode (for scripting)
fn run_json_output(once: bool) -> Result<()> {
    let provider = SysinfoProvider::new().context("System metrics are not available")?;
    let runtime = MonitorRuntime::new()?;

    let collector = SnapshotCollector::new(Arc::new(provider));
    let mut scheduler = Scheduler::new(collector, JsonLines::new(io::stdout()));

    runtime
        .block_on(async {
            if once {
                scheduler.run_cycles(1).await
            } else {
                scheduler.run().await
            }
        })
        .context("JSON output stopped")
}
