use super::status::EntryStatus;
use serde::{Deserialize, Serialize};

/// One arrival-to-departure record.
///
/// All three stamps are milliseconds since the epoch. `start` and `end`
/// are expected to be ordered after `arrival` but the store does not
/// enforce it; durations derived from out-of-order stamps come out
/// negative and are formatted with a sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub arrival: i64,
    pub start: Option<i64>,
    pub end: Option<i64>,
    /// Display date (MM/DD/YYYY), fixed at creation time.
    pub date: String,
}

impl TimeEntry {
    /// Constructor for entries created by `arrive`: both stamps unset.
    pub fn new(id: i64, arrival: i64, date: String) -> Self {
        Self {
            id,
            arrival,
            start: None,
            end: None,
            date,
        }
    }

    pub fn status(&self) -> EntryStatus {
        EntryStatus::of(self.start, self.end)
    }

    /// An entry stays open until its end stamp is set.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}
