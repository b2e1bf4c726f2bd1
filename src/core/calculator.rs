//! Wait/order/total duration arithmetic over entry timestamps.

use crate::models::entry::TimeEntry;

/// Millisecond durations derived for one entry. Ephemeral: recomputed
/// on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub wait_ms: i64,
    pub order_ms: i64,
    pub total_ms: i64,
}

/// Durations for one entry against an explicit `now` reference.
///
/// - wait:  arrival → start, or `now` while still waiting
/// - order: start → end, or `now` while in service; zero before start
/// - total: arrival → end, or `now` while the entry is open
///
/// No bounds checking: stamps recorded out of order produce negative
/// values, which the formatter renders with a sign.
pub fn calculate(entry: &TimeEntry, now: i64) -> Durations {
    let wait_ms = entry.start.unwrap_or(now) - entry.arrival;

    let order_ms = match entry.start {
        Some(start) => entry.end.unwrap_or(now) - start,
        None => 0,
    };

    let total_ms = entry.end.unwrap_or(now) - entry.arrival;

    Durations {
        wait_ms,
        order_ms,
        total_ms,
    }
}
