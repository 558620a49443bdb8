// JSON lines output, one object per cycle (for scripting)

use std::io::Write;

use serde::Serialize;

use crate::core::system_monitor::{FrameSink, Snapshot};
use crate::error::Result;

#[derive(Serialize)]
struct CycleRecord<'a> {
    snapshot: &'a Snapshot,
    rx_delta_bytes: u64,
}

pub struct JsonLines<W: Write> {
    out: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonLines<W> {
    fn present(&mut self, snapshot: &Snapshot, rx_delta: u64) -> Result<()> {
        let record = CycleRecord {
            snapshot,
            rx_delta_bytes: rx_delta,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
