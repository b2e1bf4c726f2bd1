use crate::errors::{AppError, AppResult};
use crate::store::{EntryPatch, EntryStore};
use chrono::Local;

/// Stamps the service-start and service-end times on entries.
///
/// Each stamp is set exactly once; re-stamping is refused rather than
/// silently overwritten. When no id is given the oldest eligible entry
/// is taken, matching the queue discipline the data models.
pub struct StampLogic;

impl StampLogic {
    /// Set `start` on the given entry, or on the oldest waiting one.
    pub fn start(store: &mut EntryStore, id: Option<i64>) -> AppResult<i64> {
        let target = match id {
            Some(id) => id,
            None => store
                .entries()
                .iter()
                .find(|e| e.start.is_none())
                .map(|e| e.id)
                .ok_or(AppError::NoEligibleEntry("waiting"))?,
        };

        let entry = store.get(target).ok_or(AppError::EntryNotFound(target))?;
        if entry.start.is_some() {
            return Err(AppError::AlreadyStamped {
                id: target,
                field: "start",
            });
        }

        let now = Local::now().timestamp_millis();
        store.update(target, EntryPatch::start(now))?;
        Ok(target)
    }

    /// Set `end` on the given entry, or on the oldest in-service one.
    pub fn finish(store: &mut EntryStore, id: Option<i64>) -> AppResult<i64> {
        let target = match id {
            Some(id) => id,
            None => store
                .entries()
                .iter()
                .find(|e| e.start.is_some() && e.end.is_none())
                .map(|e| e.id)
                .ok_or(AppError::NoEligibleEntry("in-service"))?,
        };

        let entry = store.get(target).ok_or(AppError::EntryNotFound(target))?;
        if entry.end.is_some() {
            return Err(AppError::AlreadyStamped {
                id: target,
                field: "end",
            });
        }
        if entry.start.is_none() {
            return Err(AppError::NotStarted(target));
        }

        let now = Local::now().timestamp_millis();
        store.update(target, EntryPatch::end(now))?;
        Ok(target)
    }
}
