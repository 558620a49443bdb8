//! Sample -> render loop.
//!
//! Each cycle collects a fresh snapshot, advances the delta state, hands both
//! to the sink and then sleeps for the refresh interval. Cycles never overlap.

use std::time::{Duration, Instant};

use super::collector::SnapshotCollector;
use super::delta::DeltaState;
use super::metrics::Snapshot;
use crate::error::{MonitorError, Result};

/// Pause between the end of one cycle and the start of the next
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Destination for each collected snapshot
pub trait FrameSink {
    fn present(&mut self, snapshot: &Snapshot, rx_delta: u64) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Sampling,
    Rendering,
}

pub struct Scheduler<S: FrameSink> {
    collector: SnapshotCollector,
    sink: S,
    delta: DeltaState,
    interval: Duration,
    phase: CyclePhase,
    cycles: u64,
}

impl<S: FrameSink> Scheduler<S> {
    pub fn new(collector: SnapshotCollector, sink: S) -> Self {
        Self {
            collector,
            sink,
            delta: DeltaState::new(),
            interval: REFRESH_INTERVAL,
            phase: CyclePhase::Sampling,
            cycles: 0,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Number of cycles presented so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run forever. Only returns on a fatal startup failure or a sink error.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.cycle().await?;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Run `count` cycles, sleeping between them but not after the last one
    pub async fn run_cycles(&mut self, count: u64) -> Result<()> {
        for i in 0..count {
            if i > 0 {
                tokio::time::sleep(self.interval).await;
            }
            self.cycle().await?;
        }
        Ok(())
    }

    /// One sample -> render pass. Returns the throughput delta it presented.
    pub async fn cycle(&mut self) -> Result<u64> {
        let started = Instant::now();

        self.set_phase(CyclePhase::Sampling);
        let snapshot = self.collector.collect().await;

        if self.cycles == 0 && !snapshot.has_usable_data() {
            let reason = snapshot
                .aggregate_error()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no metrics collected".to_string());
            log::error!("First collection produced no usable data: {}", reason);
            return Err(MonitorError::provider_unavailable(reason));
        }

        let rx_delta = self.delta.advance(&snapshot);

        self.set_phase(CyclePhase::Rendering);
        self.sink.present(&snapshot, rx_delta)?;
        self.cycles += 1;

        log::debug!(
            "Cycle {} finished in {:?} (rx delta {} bytes)",
            self.cycles,
            started.elapsed(),
            rx_delta
        );

        Ok(rx_delta)
    }

    fn set_phase(&mut self, phase: CyclePhase) {
        log::trace!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}
