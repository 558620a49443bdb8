//! Frame geometry.
//!
//! Every row and column the dashboard draws at comes from this table. Rows
//! are 0-based terminal rows, columns 0-based terminal columns.

use crate::ui::formatters::display_width;

/// Outer width of each panel, borders included
pub const PANEL_WIDTH: u16 = 36;
/// Blank columns between the two panels
pub const PANEL_GAP: u16 = 4;
pub const MAIN_PANEL_COL: u16 = 0;
pub const NET_PANEL_COL: u16 = MAIN_PANEL_COL + PANEL_WIDTH + PANEL_GAP;
/// Total frame width; stays under a conventional 80 column terminal
pub const FRAME_WIDTH: u16 = NET_PANEL_COL + PANEL_WIDTH;

/// Width reserved for `CPU Used:` style labels (after the `┃ ` prefix)
pub const LABEL_WIDTH: usize = 13;
/// Offset of the value column inside a panel
pub const VALUE_OFFSET: u16 = 2 + LABEL_WIDTH as u16;
/// Columns available to a value before the right border
pub const VALUE_BUDGET: usize = (PANEL_WIDTH - 1 - VALUE_OFFSET) as usize;
/// A CPU model wider than this wraps onto a second row
pub const MODEL_BUDGET: usize = PANEL_WIDTH as usize / 2;
/// Rows inserted below the model row when it wraps
pub const REFLOW_PADDING: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainRow {
    Top,
    Title,
    Separator,
    CpuModel,
    CpuUsed,
    MemoryUsed,
    DiskUsed,
    Temperature,
    Network,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetRow {
    Top,
    Title,
    Separator,
    Connections,
    Selection,
    Divider,
    Name,
    PacketsRecv,
    PacketsSent,
    BytesRecv,
    BytesSent,
    Bottom,
}

const MAIN_ROWS: [(MainRow, u16); 10] = [
    (MainRow::Top, 0),
    (MainRow::Title, 1),
    (MainRow::Separator, 2),
    (MainRow::CpuModel, 3),
    (MainRow::CpuUsed, 4),
    (MainRow::MemoryUsed, 5),
    (MainRow::DiskUsed, 6),
    (MainRow::Temperature, 7),
    (MainRow::Network, 8),
    (MainRow::Bottom, 9),
];

const NET_ROWS: [(NetRow, u16); 12] = [
    (NetRow::Top, 0),
    (NetRow::Title, 1),
    (NetRow::Separator, 2),
    (NetRow::Connections, 3),
    (NetRow::Selection, 4),
    (NetRow::Divider, 5),
    (NetRow::Name, 6),
    (NetRow::PacketsRecv, 7),
    (NetRow::PacketsSent, 8),
    (NetRow::BytesRecv, 9),
    (NetRow::BytesSent, 10),
    (NetRow::Bottom, 11),
];

fn main_base(row: MainRow) -> u16 {
    MAIN_ROWS
        .iter()
        .find(|(r, _)| *r == row)
        .map(|(_, base)| *base)
        .unwrap_or_default()
}

fn net_base(row: NetRow) -> u16 {
    NET_ROWS
        .iter()
        .find(|(r, _)| *r == row)
        .map(|(_, base)| *base)
        .unwrap_or_default()
}

/// Shift a main panel row past the wrapped model field.
///
/// Rows at or above the model row never move; everything below moves by the
/// same amount, borders included.
pub fn reflow(base: u16, wrapped: bool) -> u16 {
    let model_row = main_base(MainRow::CpuModel);
    if wrapped && base > model_row {
        base + REFLOW_PADDING
    } else {
        base
    }
}

/// Geometry of one frame, fixed once the CPU model is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    wrapped: bool,
}

impl Layout {
    pub fn new(model_wraps: bool) -> Self {
        Self {
            wrapped: model_wraps,
        }
    }

    /// Layout for a frame showing `model` in the model row
    pub fn for_model(model: &str) -> Self {
        Self::new(display_width(model) > MODEL_BUDGET)
    }

    pub fn model_wraps(&self) -> bool {
        self.wrapped
    }

    pub fn main_row(&self, row: MainRow) -> u16 {
        reflow(main_base(row), self.wrapped)
    }

    /// Second model row, present only when the model wraps
    pub fn model_continuation_row(&self) -> Option<u16> {
        self.wrapped
            .then(|| main_base(MainRow::CpuModel) + REFLOW_PADDING)
    }

    pub fn net_row(&self, row: NetRow) -> u16 {
        net_base(row)
    }

    pub fn main_height(&self) -> u16 {
        self.main_row(MainRow::Bottom) + 1
    }

    pub fn net_height(&self) -> u16 {
        self.net_row(NetRow::Bottom) + 1
    }

    pub fn frame_height(&self) -> u16 {
        self.main_height().max(self.net_height())
    }

    /// Row for the error/status message, one blank row under the panels
    pub fn status_row(&self) -> u16 {
        self.frame_height() + 1
    }

    /// Where the cursor is left after a frame is drawn
    pub fn park_row(&self) -> u16 {
        self.status_row() + 1
    }

    /// Column of a panel's right border
    pub fn right_border_col(panel_col: u16) -> u16 {
        panel_col + PANEL_WIDTH - 1
    }
}
