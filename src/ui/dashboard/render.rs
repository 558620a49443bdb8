use std::io::Write;

use chrono::{DateTime, Local};
use crossterm::style::Color;

use super::frame::{Frame, Span, Style};
use super::layout::{
    Layout, MainRow, NetRow, FRAME_WIDTH, MAIN_PANEL_COL, MODEL_BUDGET, NET_PANEL_COL,
    VALUE_BUDGET,
};
use super::widgets::*;
use crate::core::system_monitor::{FrameSink, MetricSource, NetworkCounters, Snapshot};
use crate::error::Result;
use crate::ui::formatters::{
    format_celsius, format_percent, format_scaled_bytes, format_size, split_at_width,
    truncate_to_width,
};
use crate::ui::progress::{progress_bar, BAR_WIDTH};

/// Draws each snapshot onto a terminal (or any writer) as a full frame
pub struct Renderer<W: Write> {
    out: W,
    selection: usize,
}

impl<W: Write> Renderer<W> {
    /// `selection` picks the interface shown in the inspector panel
    pub fn new(out: W, selection: usize) -> Self {
        Self { out, selection }
    }

    pub fn render(&mut self, snapshot: &Snapshot, rx_delta: u64) -> Result<()> {
        let frame = compose_frame(snapshot, rx_delta, self.selection);
        frame.write_to(&mut self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for Renderer<W> {
    fn present(&mut self, snapshot: &Snapshot, rx_delta: u64) -> Result<()> {
        self.render(snapshot, rx_delta)
    }
}

/// Lay out one full frame: main panel, interface inspector and status line
pub fn compose_frame(snapshot: &Snapshot, rx_delta: u64, selection: usize) -> Frame {
    let model = snapshot.cpu_model().unwrap_or(PLACEHOLDER);
    let layout = Layout::for_model(model);

    let mut frame = Frame::new();
    render_main_panel(&mut frame, &layout, snapshot, model, rx_delta);
    render_network_panel(&mut frame, &layout, snapshot, selection);
    render_status_line(&mut frame, &layout, snapshot);
    frame.park_cursor(layout.park_row());
    frame
}

fn render_main_panel(
    frame: &mut Frame,
    layout: &Layout,
    snapshot: &Snapshot,
    model: &str,
    rx_delta: u64,
) {
    let col = MAIN_PANEL_COL;

    frame.text(layout.main_row(MainRow::Top), col, top_border());
    title_row(
        frame,
        layout.main_row(MainRow::Title),
        col,
        "System Monitor",
        TITLE_COLOR,
    );
    frame.text(layout.main_row(MainRow::Separator), col, separator());

    render_model_rows(frame, layout, model);

    let cpu = if snapshot.failed(MetricSource::CpuPercent) {
        None
    } else {
        snapshot.cpu_usage_percent().map(f64::from)
    };
    let memory = (!snapshot.failed(MetricSource::Memory)).then_some(snapshot.memory.used_percent);
    let disk = (!snapshot.failed(MetricSource::Disk)).then_some(snapshot.disk.used_percent);

    let usage_rows = [
        (MainRow::CpuUsed, "CPU Used:", CPU_COLOR, cpu),
        (MainRow::MemoryUsed, "Memory Used:", MEMORY_COLOR, memory),
        (MainRow::DiskUsed, "Disk Used:", DISK_COLOR, disk),
    ];
    for (row, label, color, percent) in usage_rows {
        labeled_row(
            frame,
            layout.main_row(row),
            col,
            label,
            color,
            usage_value(percent, color),
        );
    }

    let temperature = snapshot
        .primary_temperature()
        .map(|t| format_celsius(t.celsius))
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    labeled_row(
        frame,
        layout.main_row(MainRow::Temperature),
        col,
        "Temps:",
        TEMP_COLOR,
        vec![bracketed(&temperature)],
    );

    let throughput = match snapshot.primary_interface() {
        Some(_) => format_scaled_bytes(rx_delta as f64),
        None => PLACEHOLDER.to_string(),
    };
    labeled_row(
        frame,
        layout.main_row(MainRow::Network),
        col,
        "Network:",
        NETWORK_COLOR,
        vec![bracketed(&throughput)],
    );

    frame.text(layout.main_row(MainRow::Bottom), col, bottom_border());
}

/// Model name, wrapped onto a second row when it is too wide for one
fn render_model_rows(frame: &mut Frame, layout: &Layout, model: &str) {
    let col = MAIN_PANEL_COL;
    let row = layout.main_row(MainRow::CpuModel);

    let Some(continuation) = layout.model_continuation_row() else {
        labeled_row(frame, row, col, "CPU Model:", CPU_COLOR, vec![Span::raw(model)]);
        return;
    };

    let (head, tail) = split_at_width(model, MODEL_BUDGET);
    // Hyphenate only when the cut lands inside a word
    let mid_word = head.ends_with(|c: char| !c.is_whitespace())
        && tail.starts_with(|c: char| !c.is_whitespace());
    let head = if mid_word {
        format!("{}-", head)
    } else {
        head.trim_end().to_string()
    };

    labeled_row(frame, row, col, "CPU Model:", CPU_COLOR, vec![Span::raw(head)]);
    continuation_row(frame, continuation, col, tail.trim_start());
}

/// Columns left for the bracketed label after the bar and its space
const USAGE_LABEL_BUDGET: usize = VALUE_BUDGET - BAR_WIDTH - 1;

/// `██████░░░░ [61.20%]`, or an empty bar and `[N/A]` when unknown
fn usage_value(percent: Option<f64>, color: Color) -> Vec<Span> {
    let (bar, label) = match percent {
        Some(p) => (progress_bar(p, BAR_WIDTH), format_percent(p)),
        None => (progress_bar(0.0, BAR_WIDTH), PLACEHOLDER.to_string()),
    };

    vec![
        Span::styled(bar, Style::fg(color)),
        Span::raw(" "),
        bracketed_within(&label, USAGE_LABEL_BUDGET),
    ]
}

/// Clamp a requested interface index to the list; `None` when there is nothing to show
pub fn clamp_selection(selection: usize, interfaces: usize) -> Option<usize> {
    interfaces.checked_sub(1).map(|last| selection.min(last))
}

fn render_network_panel(
    frame: &mut Frame,
    layout: &Layout,
    snapshot: &Snapshot,
    selection: usize,
) {
    let col = NET_PANEL_COL;
    let interfaces = &snapshot.network;
    let selected = clamp_selection(selection, interfaces.len()).map(|i| (i, &interfaces[i]));

    frame.text(layout.net_row(NetRow::Top), col, top_border());
    title_row(
        frame,
        layout.net_row(NetRow::Title),
        col,
        "Network Info",
        NETWORK_COLOR,
    );
    frame.text(layout.net_row(NetRow::Separator), col, separator());

    let count = if snapshot.failed(MetricSource::Network) {
        PLACEHOLDER.to_string()
    } else {
        interfaces.len().to_string()
    };
    labeled_row(
        frame,
        layout.net_row(NetRow::Connections),
        col,
        "Connections:",
        NETWORK_COLOR,
        vec![bracketed(&count)],
    );

    let index = selected
        .map(|(i, _)| i.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    labeled_row(
        frame,
        layout.net_row(NetRow::Selection),
        col,
        "Selection:",
        SELECTION_COLOR,
        vec![bracketed(&index), Span::raw(" [<- / ->]")],
    );

    frame.text(layout.net_row(NetRow::Divider), col, separator());

    let field = |f: fn(&NetworkCounters) -> String| {
        selected
            .map(|(_, iface)| f(iface))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    };

    let rows: [(NetRow, &str, Color, String); 5] = [
        (NetRow::Name, "Name:", NETWORK_COLOR, field(|i| i.name.clone())),
        (
            NetRow::PacketsRecv,
            "Received:",
            PACKETS_COLOR,
            field(|i| i.packets_recv.to_string()),
        ),
        (
            NetRow::PacketsSent,
            "Sent:",
            PACKETS_COLOR,
            field(|i| i.packets_sent.to_string()),
        ),
        (
            NetRow::BytesRecv,
            "Rx Bytes:",
            PACKETS_COLOR,
            field(|i| format_size(i.bytes_recv)),
        ),
        (
            NetRow::BytesSent,
            "Tx Bytes:",
            PACKETS_COLOR,
            field(|i| format_size(i.bytes_sent)),
        ),
    ];
    for (row, label, color, value) in rows {
        labeled_row(
            frame,
            layout.net_row(row),
            col,
            label,
            color,
            vec![bracketed(&value)],
        );
    }

    frame.text(layout.net_row(NetRow::Bottom), col, bottom_border());
}

/// Aggregate error when something failed, otherwise when the data was taken
fn render_status_line(frame: &mut Frame, layout: &Layout, snapshot: &Snapshot) {
    let width = FRAME_WIDTH as usize;
    let span = match snapshot.aggregate_error() {
        Some(err) => Span::styled(
            truncate_to_width(&format!("⚠ {}", err), width),
            Style::fg(ERROR_COLOR).bold(),
        ),
        None => {
            let taken = DateTime::from_timestamp(snapshot.timestamp, 0)
                .map(|utc| utc.with_timezone(&Local).format("%H:%M:%S").to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            Span::styled(
                truncate_to_width(&format!("updated {}", taken), width),
                Style::default().dim(),
            )
        }
    };

    frame.put(layout.status_row(), MAIN_PANEL_COL, vec![span]);
}
