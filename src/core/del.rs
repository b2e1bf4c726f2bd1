use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove a single entry by id.
    pub fn apply(store: &mut EntryStore, id: i64) -> AppResult<()> {
        if !store.remove(id)? {
            return Err(AppError::EntryNotFound(id));
        }

        info(format!("Deleted entry {}", id));
        Ok(())
    }

    /// Drop the whole collection and the store file with it.
    pub fn reset(store: &mut EntryStore) -> AppResult<()> {
        let count = store.len();
        store.clear()?;

        info(format!("Removed {} entries and the store file", count));
        Ok(())
    }
}
