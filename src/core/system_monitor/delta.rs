//! Per-cycle network throughput tracking.
//!
//! Only the primary interface (index 0 of the provider's list) is tracked.

use super::metrics::Snapshot;

/// Bytes received since the previous sample.
///
/// A missing previous sample yields 0, as does a counter that went backwards
/// (interface reset or wrap).
pub fn compute_delta(previous: Option<u64>, current: u64) -> u64 {
    previous.map_or(0, |prev| current.saturating_sub(prev))
}

/// Received-byte counter of the primary interface from the last cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeltaState {
    previous: Option<(String, u64)>,
}

impl DeltaState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this cycle's counter and return the delta against the last one
    pub fn advance(&mut self, snapshot: &Snapshot) -> u64 {
        let Some(primary) = snapshot.primary_interface() else {
            self.previous = None;
            return 0;
        };

        let previous = match &self.previous {
            Some((name, bytes)) if *name == primary.name => Some(*bytes),
            _ => None,
        };

        self.previous = Some((primary.name.clone(), primary.bytes_recv));
        compute_delta(previous, primary.bytes_recv)
    }

    pub fn previous_bytes_recv(&self) -> Option<u64> {
        self.previous.as_ref().map(|(_, bytes)| *bytes)
    }
}
