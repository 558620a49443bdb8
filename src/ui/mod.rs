// UI and formatting module

pub mod dashboard;
pub mod formatters;
pub mod json_output;
pub mod progress;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use dashboard::{compose_frame, run_dashboard, DashboardConfig, Renderer};
pub use formatters::{format_celsius, format_percent, format_scaled_bytes, format_size};
pub use json_output::JsonLines;
pub use progress::{progress_bar, BAR_WIDTH};
pub use prompts::{dimmed, error, warn};
