// src/export/model.rs

use crate::core::calculator;
use crate::models::entry::TimeEntry;
use crate::utils::time::{format_clock, format_duration, format_opt_clock};
use serde::Serialize;

/// Flat row shape shared by the spreadsheet-style exporters. Clock
/// stamps are rendered as local time strings; absent stamps and
/// zero-like durations carry the placeholder.
#[derive(Serialize, Clone, Debug)]
pub struct EntryRow {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Arrival Time")]
    pub arrival: String,
    #[serde(rename = "Start Time")]
    pub start: String,
    #[serde(rename = "End Time")]
    pub end: String,
    #[serde(rename = "Wait Time")]
    pub wait_time: String,
    #[serde(rename = "Order Time")]
    pub order_time: String,
    #[serde(rename = "Total Time")]
    pub total_time: String,
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "ID",
        "Date",
        "Arrival Time",
        "Start Time",
        "End Time",
        "Wait Time",
        "Order Time",
        "Total Time",
    ]
}

/// Map entries to export rows against a single `now` snapshot, so every
/// in-progress duration in one artifact refers to the same instant.
pub fn entries_to_rows(entries: &[TimeEntry], now: i64, use_12h: bool) -> Vec<EntryRow> {
    entries
        .iter()
        .map(|e| {
            let d = calculator::calculate(e, now);
            EntryRow {
                id: e.id,
                date: e.date.clone(),
                arrival: format_clock(e.arrival, use_12h),
                start: format_opt_clock(e.start, use_12h),
                end: format_opt_clock(e.end, use_12h),
                wait_time: format_duration(Some(d.wait_ms)),
                order_time: format_duration(Some(d.order_ms)),
                total_time: format_duration(Some(d.total_ms)),
            }
        })
        .collect()
}

/// Convert a row into cells, in header order (for XLSX).
pub(crate) fn row_to_cells(r: &EntryRow) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.date.clone(),
        r.arrival.clone(),
        r.start.clone(),
        r.end.clone(),
        r.wait_time.clone(),
        r.order_time.clone(),
        r.total_time.clone(),
    ]
}
