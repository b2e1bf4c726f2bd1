use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::store::EntryStore;
use crate::utils::date;
use chrono::Local;

pub struct ArriveLogic;

impl ArriveLogic {
    /// Append a new waiting entry stamped now. Returns the created entry.
    pub fn apply(store: &mut EntryStore) -> AppResult<TimeEntry> {
        let now = Local::now().timestamp_millis();
        let entry = TimeEntry::new(next_id(store, now), now, date::today_display());
        store.append(entry.clone())?;
        Ok(entry)
    }
}

/// Ids are epoch milliseconds, like the arrival stamp. Two arrivals in
/// the same millisecond would collide, so bump past any taken value.
fn next_id(store: &EntryStore, now: i64) -> i64 {
    let mut id = now;
    while store.get(id).is_some() {
        id += 1;
    }
    id
}
