use sysdash::core::system_monitor::{FieldError, MetricSource, NetworkCounters, Snapshot};
use sysdash::ui::dashboard::layout::{FRAME_WIDTH, NET_PANEL_COL, PANEL_WIDTH};
use sysdash::ui::{compose_frame, Renderer};

use super::support::sample_snapshot;

const MAIN_RIGHT_BORDER: usize = PANEL_WIDTH as usize - 1;

fn char_at(line: &str, col: usize) -> Option<char> {
    line.chars().nth(col)
}

fn line_with<'a>(lines: &'a [String], needle: &str) -> &'a str {
    lines
        .iter()
        .find(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no line contains {:?}", needle))
}

#[test]
fn test_end_to_end_frame_values() {
    let frame = compose_frame(&sample_snapshot(), 2048, 0);
    let lines = frame.rasterize();

    assert!(line_with(&lines, "CPU Used:").contains("████░░░░░░ [42.00%]"));
    assert!(line_with(&lines, "Memory Used:").contains("███████░░░ [77.00%]"));
    assert!(line_with(&lines, "Disk Used:").contains("███░░░░░░░ [30.00%]"));
    assert!(line_with(&lines, "Temps:").contains("[55.50°C]"));
    assert!(line_with(&lines, "Network:").contains("[2.00 KiB]"));
    assert!(line_with(&lines, "CPU Model:").contains("Apple M2"));
}

#[test]
fn test_main_panel_rows_in_order() {
    let lines = compose_frame(&sample_snapshot(), 0, 0).rasterize();

    assert!(lines[0].starts_with("┏"));
    assert!(lines[1].contains("System Monitor"));
    assert!(lines[2].starts_with("┣"));
    assert!(lines[3].starts_with("┃ CPU Model:"));
    assert!(lines[4].starts_with("┃ CPU Used:"));
    assert!(lines[5].starts_with("┃ Memory Used:"));
    assert!(lines[6].starts_with("┃ Disk Used:"));
    assert!(lines[7].starts_with("┃ Temps:"));
    assert!(lines[8].starts_with("┃ Network:"));
    assert!(lines[9].starts_with("┗"));
    assert!(lines[8].contains("[0.00 B]"));
}

#[test]
fn test_long_model_reflows_lower_rows() {
    let mut snapshot = sample_snapshot();
    snapshot.cpu_info[0].model_name = "Intel(R) Core(TM) i7-10750H CPU @ 2.60GHz".to_string();

    let lines = compose_frame(&snapshot, 0, 0).rasterize();

    assert!(lines[3].starts_with("┃ CPU Model:   Intel(R) Core(TM)"));
    assert!(lines[4].starts_with("┃              i7-10750H"));
    assert!(lines[5].starts_with("┃ CPU Used:"));
    assert!(lines[6].starts_with("┃ Memory Used:"));
    assert!(lines[7].starts_with("┃ Disk Used:"));
    assert!(lines[8].starts_with("┃ Temps:"));
    assert!(lines[9].starts_with("┃ Network:"));
    assert!(lines[10].starts_with("┗"));

    // Right borders line up on every content row, including the extra one
    for (row, line) in lines.iter().enumerate().take(10).skip(1) {
        let expected = if row == 2 { '┫' } else { '┃' };
        assert_eq!(char_at(line, MAIN_RIGHT_BORDER), Some(expected), "row {}", row);
    }
    assert_eq!(char_at(&lines[10], MAIN_RIGHT_BORDER), Some('┛'));
}

#[test]
fn test_short_model_keeps_right_borders_aligned() {
    let lines = compose_frame(&sample_snapshot(), 0, 0).rasterize();
    for (row, line) in lines.iter().enumerate().take(9).skip(3) {
        assert_eq!(char_at(line, MAIN_RIGHT_BORDER), Some('┃'), "row {}", row);
    }
    assert_eq!(char_at(&lines[9], MAIN_RIGHT_BORDER), Some('┛'));
}

#[test]
fn test_inspector_panel_sits_beside_main_panel() {
    let lines = compose_frame(&sample_snapshot(), 0, 0).rasterize();
    let col = NET_PANEL_COL as usize;

    assert_eq!(char_at(&lines[0], col), Some('┏'));
    assert!(lines[1].contains("Network Info"));
    assert!(lines[3].contains("Connections: [1]"));
    assert!(lines[4].contains("Selection:   [0] [<- / ->]"));
    assert!(lines[6].contains("Name:        [eth0]"));
    assert!(lines[7].contains("Received:    [34]"));
    assert!(lines[8].contains("Sent:        [12]"));
    assert_eq!(char_at(&lines[11], col), Some('┗'));
}

#[test]
fn test_selection_is_clamped_to_last_interface() {
    let mut snapshot = sample_snapshot();
    snapshot.network.push(NetworkCounters {
        name: "wlan0".to_string(),
        packets_recv: 99,
        ..Default::default()
    });

    let text = compose_frame(&snapshot, 0, 7).to_plain_text();
    assert!(text.contains("Selection:   [1]"));
    assert!(text.contains("Name:        [wlan0]"));
    assert!(text.contains("Received:    [99]"));
}

#[test]
fn test_empty_snapshot_renders_placeholders() {
    let snapshot = Snapshot {
        errors: MetricSource::ALL
            .iter()
            .map(|source| FieldError {
                source: *source,
                message: "unavailable".to_string(),
            })
            .collect(),
        ..Default::default()
    };

    let text = compose_frame(&snapshot, 0, 0).to_plain_text();
    assert!(text.contains("CPU Model:   N/A"));
    assert!(text.contains("CPU Used:    ░░░░░░░░░░ [N/A]"));
    assert!(text.contains("Temps:       [N/A]"));
    assert!(text.contains("Name:        [N/A]"));
    assert!(text.contains("⚠ Metric collection incomplete: disk: unavailable"));
}

#[test]
fn test_status_line_below_panels() {
    let mut snapshot = sample_snapshot();
    snapshot.errors.push(FieldError {
        source: MetricSource::Temperature,
        message: "no sensors".to_string(),
    });

    let lines = compose_frame(&snapshot, 0, 0).rasterize();
    assert_eq!(lines[12], "");
    assert!(lines[13].contains("temperature: no sensors"));

    let healthy = compose_frame(&sample_snapshot(), 0, 0).rasterize();
    assert!(healthy[13].starts_with("updated "));
}

#[test]
fn test_frame_never_exceeds_terminal_width() {
    let mut snapshot = sample_snapshot();
    snapshot.cpu_info[0].model_name = "X".repeat(120);
    snapshot.network[0].name = "enx00e04c6801a2-very-long-usb-adapter".to_string();
    snapshot.network[0].packets_recv = u64::MAX;
    snapshot.network[0].bytes_recv = u64::MAX;
    snapshot.memory.used_percent = 100.0;
    snapshot.errors.push(FieldError {
        source: MetricSource::Disk,
        message: "e".repeat(200),
    });

    let frame = compose_frame(&snapshot, u64::MAX, 0);
    assert!(frame.width() <= FRAME_WIDTH as usize);
    assert!(frame.width() <= 80);
}

#[test]
fn test_renderer_writes_positioned_output() {
    let mut renderer = Renderer::new(Vec::new(), 0);
    renderer.render(&sample_snapshot(), 2048).unwrap();
    let written = String::from_utf8(renderer.into_inner()).unwrap();

    // Clear + home first, then absolute positions: inspector top-left is row 1, col 41
    assert!(written.starts_with("\x1b[2J\x1b[1;1H"));
    assert!(written.contains("\x1b[1;41H┏"));
    assert!(written.contains("2.00 KiB"));
    assert!(written.contains("55.50°C"));
}

#[test]
fn test_interface_name_with_escape_codes_is_neutralized() {
    let mut snapshot = sample_snapshot();
    snapshot.network[0].name = "eth\t0\x1b[2J".to_string();
    snapshot.cpu_info[0].model_name = "Apple\x1b[31m M2".to_string();

    let mut renderer = Renderer::new(Vec::new(), 0);
    renderer.render(&snapshot, 0).unwrap();
    let written = String::from_utf8(renderer.into_inner()).unwrap();

    assert!(!written.contains('\t'));
    assert_eq!(written.matches("\x1b[2J").count(), 1);
    assert!(!written.contains("\x1b[31m"));
    assert!(written.contains("[eth0[2J]"));
}
