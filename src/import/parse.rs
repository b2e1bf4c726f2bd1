//! Typed parsing of spreadsheet rows.
//!
//! Clock strings arrive as free text (`5:21:18 PM`, `17:21:18`); the
//! row's display date anchors them to a calendar day. Sub-second
//! precision does not survive a round trip: clock strings carry no
//! milliseconds.

use crate::models::entry::TimeEntry;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::time::PLACEHOLDER;
use chrono::Local;
use rand::Rng;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Raw CSV row as written by the spreadsheet exporters. Every field is
/// optional text; validation happens in [`parse_row`].
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "ID", default)]
    pub id: Option<String>,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Arrival Time", default)]
    pub arrival: Option<String>,
    #[serde(rename = "Start Time", default)]
    pub start: Option<String>,
    #[serde(rename = "End Time", default)]
    pub end: Option<String>,
}

/// H:MM:SS with an optional AM/PM suffix.
fn clock_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+):(\d+):(\d+)\s*(AM|PM)?").unwrap())
}

/// Build one entry from a raw row. Total: every failure has a fallback.
pub fn parse_row(row: &RawRow, now: i64) -> TimeEntry {
    let date = row
        .date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(date::today_display);

    let id = parse_id(row.id.as_deref(), now);

    // Arrival is required; an unparseable value degrades to `now`.
    let arrival = match row.arrival.as_deref() {
        Some(raw) if !is_blank(raw) => clock_to_timestamp(raw, &date).unwrap_or_else(|| {
            warning(format!("Could not parse arrival time '{}', using current time", raw.trim()));
            now
        }),
        _ => now,
    };

    let start = parse_stamp(row.start.as_deref(), &date, now, "start");
    let end = parse_stamp(row.end.as_deref(), &date, now, "end");

    TimeEntry {
        id,
        arrival,
        start,
        end,
        date,
    }
}

/// Optional stamp: the placeholder and absent fields map to `None`; a
/// present-but-garbled value degrades to `now` (data loss, not fatal).
fn parse_stamp(raw: Option<&str>, date: &str, now: i64, label: &str) -> Option<i64> {
    let raw = raw?;
    if is_blank(raw) {
        return None;
    }

    match clock_to_timestamp(raw, date) {
        Some(ts) => Some(ts),
        None => {
            warning(format!(
                "Could not parse {} time '{}', using current time",
                label,
                raw.trim()
            ));
            Some(now)
        }
    }
}

fn is_blank(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || s == PLACEHOLDER
}

/// Ids survive as-is when integral. Spreadsheet tools re-render large
/// ids in scientific notation, so a float parse (rounded) is the second
/// try; the last resort is the current time plus random jitter to keep
/// ids unique.
fn parse_id(raw: Option<&str>, now: i64) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return jittered_id(now);
    };

    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }

    if let Ok(f) = raw.parse::<f64>()
        && f.is_finite()
    {
        return f.round() as i64;
    }

    jittered_id(now)
}

fn jittered_id(now: i64) -> i64 {
    now + rand::thread_rng().gen_range(1..1000)
}

/// Combine a clock string with the row's display date (month/day/year)
/// into a local epoch-ms timestamp. 12-hour values normalize with the
/// standard noon/midnight rules: PM adds 12 unless already 12, AM maps
/// 12 to 0.
pub fn clock_to_timestamp(clock: &str, date_str: &str) -> Option<i64> {
    let day = date::parse_display_date(date_str)?;

    let caps = clock_regex().captures(clock)?;

    let mut hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    let seconds: u32 = caps[3].parse().ok()?;

    match caps.get(4).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(m) if m == "PM" && hours != 12 => hours += 12,
        Some(m) if m == "AM" && hours == 12 => hours = 0,
        _ => {}
    }

    let naive = day.and_hms_opt(hours, minutes, seconds)?;
    let local = naive.and_local_timezone(Local).single()?;

    Some(local.timestamp_millis())
}
