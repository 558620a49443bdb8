//! Positioned, styled text making up one dashboard frame.
//!
//! A frame is built as plain data first and only then written to the
//! terminal, so layout can be checked without a terminal attached.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::formatters::strip_control;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    fn is_plain(&self) -> bool {
        self.fg.is_none() && !self.bold && !self.dim
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Spans drawn left to right starting at `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub row: u16,
    pub col: u16,
    pub spans: Vec<Span>,
}

impl Placement {
    pub fn width(&self) -> usize {
        self.spans
            .iter()
            .flat_map(|s| s.text.chars())
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    placements: Vec<Placement>,
    park_row: u16,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `spans` at `(row, col)`. Control characters are removed from the text.
    pub fn put(&mut self, row: u16, col: u16, mut spans: Vec<Span>) {
        for span in &mut spans {
            if span.text.chars().any(char::is_control) {
                span.text = strip_control(&span.text);
            }
        }
        self.placements.push(Placement { row, col, spans });
    }

    pub fn text(&mut self, row: u16, col: u16, text: impl Into<String>) {
        self.put(row, col, vec![Span::raw(text)]);
    }

    /// Leave the cursor at the start of `row` once the frame is written
    pub fn park_cursor(&mut self, row: u16) {
        self.park_row = row;
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Rightmost column any placement reaches, plus one
    pub fn width(&self) -> usize {
        self.placements
            .iter()
            .map(|p| p.col as usize + p.width())
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.placements
            .iter()
            .map(|p| p.row as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// Paint the frame onto a blank character grid, styles dropped.
    ///
    /// Later placements overwrite earlier ones, the same as on a terminal.
    pub fn rasterize(&self) -> Vec<String> {
        let mut grid = vec![vec![' '; self.width()]; self.height()];

        for placement in &self.placements {
            let row = &mut grid[placement.row as usize];
            let mut col = placement.col as usize;
            for ch in placement.spans.iter().flat_map(|s| s.text.chars()) {
                let w = ch.width().unwrap_or(0);
                if w == 0 {
                    continue;
                }
                row[col] = ch;
                // Wide glyphs cover the next cell too
                for extra in 1..w {
                    row[col + extra] = '\0';
                }
                col += w;
            }
        }

        grid.into_iter()
            .map(|cells| {
                let line: String = cells.into_iter().filter(|c| *c != '\0').collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    pub fn to_plain_text(&self) -> String {
        self.rasterize().join("\n")
    }

    /// Clear the screen, then draw every placement at its absolute position
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

        for placement in &self.placements {
            queue!(out, MoveTo(placement.col, placement.row))?;
            for span in &placement.spans {
                write_span(out, span)?;
            }
        }

        queue!(out, MoveTo(0, self.park_row))?;
        out.flush()
    }
}

fn write_span<W: Write>(out: &mut W, span: &Span) -> io::Result<()> {
    if span.style.is_plain() {
        return queue!(out, Print(&span.text));
    }

    if let Some(color) = span.style.fg {
        queue!(out, SetForegroundColor(color))?;
    }
    if span.style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if span.style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    queue!(out, Print(&span.text), SetAttribute(Attribute::Reset))
}
