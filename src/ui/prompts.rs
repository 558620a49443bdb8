// Plain diagnostics printed outside the dashboard (stderr, so --json stays clean)

use colored::Colorize;

/// Display a warning message
pub fn warn(message: &str) {
    eprintln!("{}", format!("⚠️  Warning: {}", message).yellow().bold());
}

/// Display an error message
pub fn error(message: &str) {
    eprintln!("{}", message.red().bold());
}

/// Display a dimmed/secondary message
pub fn dimmed(message: &str) {
    eprintln!("{}", message.dimmed());
}
