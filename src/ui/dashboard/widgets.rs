use crossterm::style::Color;

use super::frame::{Frame, Span, Style};
use super::layout::{Layout, LABEL_WIDTH, PANEL_WIDTH, VALUE_BUDGET, VALUE_OFFSET};
use crate::ui::formatters::{display_width, truncate_to_width};

const INNER_WIDTH: usize = PANEL_WIDTH as usize - 2;

pub const CPU_COLOR: Color = Color::Blue;
pub const MEMORY_COLOR: Color = Color::Yellow;
pub const DISK_COLOR: Color = Color::Green;
pub const TEMP_COLOR: Color = Color::Red;
pub const NETWORK_COLOR: Color = Color::Magenta;
pub const PACKETS_COLOR: Color = Color::Cyan;
pub const SELECTION_COLOR: Color = Color::Grey;
pub const TITLE_COLOR: Color = Color::Cyan;
pub const ERROR_COLOR: Color = Color::Red;

pub const PLACEHOLDER: &str = "N/A";

pub fn top_border() -> String {
    format!("┏{}┓", "━".repeat(INNER_WIDTH))
}

pub fn separator() -> String {
    format!("┣{}┫", "━".repeat(INNER_WIDTH))
}

pub fn bottom_border() -> String {
    format!("┗{}┛", "━".repeat(INNER_WIDTH))
}

/// `┃      Title      ┃`, with the title centered
pub fn title_row(frame: &mut Frame, row: u16, col: u16, title: &str, color: Color) {
    let free = INNER_WIDTH.saturating_sub(display_width(title));
    let left = free / 2;
    let right = free - left;

    frame.put(
        row,
        col,
        vec![
            Span::raw(format!("┃{}", " ".repeat(left))),
            Span::styled(title, Style::fg(color).bold()),
            Span::raw(format!("{}┃", " ".repeat(right))),
        ],
    );
}

/// `┃ Label:       <value spans>` plus the right border
pub fn labeled_row(
    frame: &mut Frame,
    row: u16,
    col: u16,
    label: &str,
    color: Color,
    value: Vec<Span>,
) {
    let pad = LABEL_WIDTH.saturating_sub(display_width(label));

    let mut spans = vec![
        Span::raw("┃ "),
        Span::styled(label, Style::fg(color).bold()),
        Span::raw(" ".repeat(pad)),
    ];
    spans.extend(value);

    frame.put(row, col, spans);
    right_border(frame, row, col);
}

/// A value-column-only row, used for the wrapped half of the CPU model
pub fn continuation_row(frame: &mut Frame, row: u16, col: u16, text: &str) {
    frame.put(
        row,
        col,
        vec![
            Span::raw("┃"),
            Span::raw(" ".repeat(VALUE_OFFSET as usize - 1)),
            Span::raw(truncate_to_width(text, VALUE_BUDGET)),
        ],
    );
    right_border(frame, row, col);
}

pub fn right_border(frame: &mut Frame, row: u16, col: u16) {
    frame.text(row, Layout::right_border_col(col), "┃");
}

/// `[text]`, cut down so it never reaches the right border
pub fn bracketed(text: &str) -> Span {
    bracketed_within(text, VALUE_BUDGET)
}

/// `[text]` occupying at most `width` columns, brackets included
pub fn bracketed_within(text: &str, width: usize) -> Span {
    Span::raw(format!(
        "[{}]",
        truncate_to_width(text, width.saturating_sub(2))
    ))
}
