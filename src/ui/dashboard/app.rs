use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{cursor, execute, style::ResetColor};

use crate::core::system_monitor::{MonitorRuntime, Scheduler, SnapshotCollector};
use crate::platform::SysinfoProvider;

use super::render::Renderer;

/// Configuration for the dashboard
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// Interface shown in the inspector panel
    pub selection: usize,
    /// Draw a single frame and return
    pub once: bool,
}

/// Hides the cursor while the dashboard runs and restores it on drop
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Undo any styling and show the cursor again; safe to call more than once
pub fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, ResetColor, cursor::Show);
    let _ = stdout.flush();
}

/// Run the live dashboard on stdout
pub fn run_dashboard(config: DashboardConfig) -> Result<()> {
    let provider = SysinfoProvider::new().context("System metrics are not available")?;
    let runtime = MonitorRuntime::new()?;

    let collector = SnapshotCollector::new(Arc::new(provider));
    let renderer = Renderer::new(io::stdout(), config.selection);
    let mut scheduler = Scheduler::new(collector, renderer);

    log::info!(
        "Starting dashboard (interface {}, once: {})",
        config.selection,
        config.once
    );

    let _guard = TerminalGuard::new().context("Failed to prepare terminal")?;
    let outcome = runtime.block_on(async {
        if config.once {
            scheduler.run_cycles(1).await
        } else {
            scheduler.run().await
        }
    });

    outcome.context("System monitor stopped")
}
