use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const BYTE_UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Scale a byte count by powers of 1024, e.g. `1536` -> `1.50 KiB`.
///
/// Stops at PiB; larger values are shown as a large PiB figure.
pub fn format_scaled_bytes(bytes: f64) -> String {
    let mut value = if bytes.is_finite() { bytes.max(0.0) } else { 0.0 };
    let mut unit = 0;

    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, BYTE_UNITS[unit])
}

/// Byte totals in the interface inspector
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

pub fn format_celsius(celsius: f32) -> String {
    format!("{:.2}°C", celsius)
}

/// Drop tabs, escapes and other control characters so `text` cannot move the cursor
pub fn strip_control(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Terminal columns `text` occupies
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Split `text` so the head fits in `width` columns
pub fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return text.split_at(idx);
        }
        used += w;
    }
    (text, "")
}

/// Cut `text` to `width` columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let (head, _) = split_at_width(text, width - 1);
    format!("{}…", head)
}
