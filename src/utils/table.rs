//! Table rendering for CLI outputs.

use crate::core::calculator;
use crate::models::entry::TimeEntry;
use crate::models::status::EntryStatus;
use crate::utils::time::{format_clock, format_duration, format_opt_clock};
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Display width of a cell, ignoring any color codes it carries.
fn cell_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        // Widths from header + content
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell_width(cell));
            }
        }

        let mut out = String::new();

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&col.header);
            out.push_str(&" ".repeat(widths[i] - UnicodeWidthStr::width(col.header.as_str()) + 2));
        }
        out.push('\n');

        // Separator
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows (padding computed on the stripped width so colored cells
        // line up)
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(cell);
                out.push_str(&" ".repeat(widths[i] - cell_width(cell) + 2));
            }
            out.push('\n');
        }

        out
    }
}

fn status_cell(status: EntryStatus) -> String {
    let colour = match status {
        EntryStatus::Waiting => Colour::Yellow,
        EntryStatus::InService => Colour::Cyan,
        EntryStatus::Done => Colour::Green,
    };
    colour.paint(status.as_str()).to_string()
}

/// Render the entry list with durations computed against `now`.
pub fn render_entries(entries: &[TimeEntry], now: i64, use_12h: bool) -> String {
    let mut table = Table::new(&[
        "ID", "Date", "Arrival", "Start", "End", "Wait", "Order", "Total", "Status",
    ]);

    for entry in entries {
        let d = calculator::calculate(entry, now);
        table.add_row(vec![
            entry.id.to_string(),
            entry.date.clone(),
            format_clock(entry.arrival, use_12h),
            format_opt_clock(entry.start, use_12h),
            format_opt_clock(entry.end, use_12h),
            format_duration(Some(d.wait_ms)),
            format_duration(Some(d.order_ms)),
            format_duration(Some(d.total_ms)),
            status_cell(entry.status()),
        ]);
    }

    table.render()
}
