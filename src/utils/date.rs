//! Date helpers: display dates (MM/DD/YYYY) and dated export filenames.

use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's date in the display format entries carry (MM/DD/YYYY).
pub fn today_display() -> String {
    today().format("%m/%d/%Y").to_string()
}

/// Today's date in ISO form, used in default export filenames.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Parse a MM/DD/YYYY display date. Single-digit month/day accepted.
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let month: u32 = parts[0].parse().ok()?;
    let day: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
