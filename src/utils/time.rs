//! Time utilities: duration formatting and local clock strings.

use chrono::{DateTime, Local};

/// Placeholder shown for absent stamps and zero/absent durations.
pub const PLACEHOLDER: &str = "--:--";

/// Format a millisecond duration as HH:MM:SS.
///
/// `None` and zero both render the placeholder: a genuinely zero-length
/// interval is indistinguishable from "no data yet". Hours grow past two
/// digits unpadded. Negative durations keep their sign.
pub fn format_duration(ms: Option<i64>) -> String {
    let ms = match ms {
        Some(v) if v != 0 => v,
        _ => return PLACEHOLDER.to_string(),
    };

    let sign = if ms < 0 { "-" } else { "" };
    let secs = ms.abs() / 1000;

    let hours = secs / 3600;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;

    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}

/// Render an epoch-ms stamp as a local clock string.
pub fn format_clock(ts_ms: i64, use_12h: bool) -> String {
    let Some(utc) = DateTime::from_timestamp_millis(ts_ms) else {
        return PLACEHOLDER.to_string();
    };

    let local = utc.with_timezone(&Local);
    if use_12h {
        local.format("%I:%M:%S %p").to_string()
    } else {
        local.format("%H:%M:%S").to_string()
    }
}

/// Clock string for an optional stamp; absent stamps render the
/// placeholder.
pub fn format_opt_clock(ts_ms: Option<i64>, use_12h: bool) -> String {
    match ts_ms {
        Some(ts) => format_clock(ts, use_12h),
        None => PLACEHOLDER.to_string(),
    }
}
