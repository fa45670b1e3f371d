//! Utility functions and helpers

use tracing_subscriber::EnvFilter;

/// Initialize logging based on configuration.
///
/// The consensus decision paths never log; tracing output is limited to
/// trace-level diagnostics of the retarget and plot engines, useful when
/// replaying disputed blocks.
pub fn init_logging(level: &str, format: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
    }
}

/// Format a deadline in seconds for display
pub fn format_deadline(seconds: u64) -> String {
    if seconds >= 86_400 {
        format!(
            "{}d {}h {}m {}s",
            seconds / 86_400,
            seconds % 86_400 / 3_600,
            seconds % 3_600 / 60,
            seconds % 60
        )
    } else if seconds >= 3_600 {
        format!(
            "{}h {}m {}s",
            seconds / 3_600,
            seconds % 3_600 / 60,
            seconds % 60
        )
    } else if seconds >= 60 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}
