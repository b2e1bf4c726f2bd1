use serde::Serialize;

/// Lifecycle stage derived from which stamps an entry carries.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EntryStatus {
    Waiting,
    InService,
    Done,
}

impl EntryStatus {
    pub fn of(start: Option<i64>, end: Option<i64>) -> Self {
        match (start, end) {
            (None, _) => EntryStatus::Waiting,
            (Some(_), None) => EntryStatus::InService,
            (Some(_), Some(_)) => EntryStatus::Done,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Waiting => "waiting",
            EntryStatus::InService => "in service",
            EntryStatus::Done => "done",
        }
    }
}
