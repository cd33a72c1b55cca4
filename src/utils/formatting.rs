//! Formatting utilities used for CLI outputs.

use chrono::NaiveDateTime;

/// Render a duration in seconds as "HHh MMm SSs", or "--" for an unknown
/// duration (still in progress, or the end stamp was missed).
pub fn secs2readable(secs: Option<i64>) -> String {
    match secs {
        None => "--".to_string(),
        Some(s) => {
            let hours = s / 3600;
            let minutes = (s % 3600) / 60;
            let seconds = s % 60;
            format!("{:02}h {:02}m {:02}s", hours, minutes, seconds)
        }
    }
}

/// Render a stamp time as "HH:MM", or "--:--" when absent.
pub fn time_or_dashes(dt: Option<NaiveDateTime>) -> String {
    match dt {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
