//! Terminal dashboard for system monitoring.
//!
//! Draws two side-by-side box panels with absolute cursor addressing: host
//! metrics on the left, a network interface inspector on the right.

mod app;
mod frame;
pub mod layout;
mod render;
mod widgets;

pub use app::{restore_terminal, run_dashboard, DashboardConfig, TerminalGuard};
pub use frame::{Frame, Placement, Span, Style};
pub use layout::Layout;
pub use render::{clamp_selection, compose_frame, Renderer};
