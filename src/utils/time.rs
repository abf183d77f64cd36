//! Time utilities

use std::time::Duration;

/// Whole milliseconds in a duration, rounded down
pub fn floor_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// Format a duration as a human-readable string
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();

    if micros < 1_000 {
        format!("{}us", micros)
    } else {
        format_milliseconds(floor_millis(duration))
    }
}

/// Format milliseconds as a human-readable string
pub fn format_milliseconds(ms: i64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let seconds = ms / 1000;
        let minutes = seconds / 60;
        let remaining_seconds = seconds % 60;
        format!("{}m {}s", minutes, remaining_seconds)
    }
}
