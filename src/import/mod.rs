//! CSV importer: spreadsheet artifact back into entries.
//!
//! The artifact is the row shape the exporters write (see
//! `export::model`). File-read and CSV-structure failures reject the
//! whole operation; a clock string that fails to parse degrades to the
//! current time for that field, with a diagnostic, and the operation
//! continues.

pub mod parse;

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::store::EntryStore;
use crate::ui::messages::info;
use chrono::Local;
use parse::RawRow;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Parse the artifact into entries without touching the store.
    pub fn read(path: &Path) -> AppResult<Vec<TimeEntry>> {
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| AppError::Import(format!("Failed to read file: {e}")))?;

        let now = Local::now().timestamp_millis();
        let mut entries = Vec::new();

        for (index, result) in reader.deserialize::<RawRow>().enumerate() {
            let row =
                result.map_err(|e| AppError::Import(format!("Malformed row {}: {e}", index + 1)))?;
            entries.push(parse::parse_row(&row, now));
        }

        Ok(entries)
    }

    /// Import into the store, appending by default or substituting the
    /// whole collection with `replace`.
    pub fn apply(store: &mut EntryStore, path: &Path, replace: bool) -> AppResult<usize> {
        let entries = Self::read(path)?;
        let count = entries.len();

        if replace {
            store.replace(entries)?;
        } else {
            store.extend(entries)?;
        }

        info(format!("Imported {} entries from {}", count, path.display()));
        Ok(count)
    }
}
