// Fixed-width block bars for percentage readouts

/// Number of cells in every dashboard bar
pub const BAR_WIDTH: usize = 10;

pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';

/// Cells to fill for `percent` in a bar of `width` cells.
///
/// The percentage is clamped to 0..=100 first; sensors occasionally report
/// slightly out-of-range values. NaN counts as 0.
pub fn filled_cells(percent: f64, width: usize) -> usize {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };

    let filled = (percent * width as f64 / 100.0).floor() as usize;
    filled.min(width)
}

/// Render a bar such as `████░░░░░░`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = filled_cells(percent, width);
    let mut bar = String::with_capacity(width * FILLED_GLYPH.len_utf8());
    bar.extend(std::iter::repeat(FILLED_GLYPH).take(filled));
    bar.extend(std::iter::repeat(EMPTY_GLYPH).take(width - filled));
    bar
}
