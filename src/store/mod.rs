//! JSON-array entry store.
//!
//! The persisted artifact is a single file holding a JSON array of
//! [`TimeEntry`]. Every mutation rewrites the whole file; `open`
//! rehydrates from it. Insertion order is preserved throughout. There is
//! no versioning or migration; a malformed file is an error at open time.

use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// Patch applied by [`EntryStore::update`]: at most one stamp per call
/// in practice, though nothing stops setting both.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryPatch {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl EntryPatch {
    pub fn start(ts: i64) -> Self {
        Self {
            start: Some(ts),
            end: None,
        }
    }

    pub fn end(ts: i64) -> Self {
        Self {
            start: None,
            end: Some(ts),
        }
    }
}

/// Exclusive owner of the entry collection.
pub struct EntryStore {
    path: PathBuf,
    entries: Vec<TimeEntry>,
}

impl EntryStore {
    /// Rehydrate from the store file if present, else start empty.
    pub fn open(path: &str) -> AppResult<Self> {
        let path = crate::utils::path::expand_tilde(path);
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            Vec::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Append one entry and persist.
    pub fn append(&mut self, entry: TimeEntry) -> AppResult<()> {
        self.entries.push(entry);
        self.persist()
    }

    /// Apply a stamp patch. Returns `false` (collection untouched, no
    /// write) when the id is not found.
    pub fn update(&mut self, id: i64, patch: EntryPatch) -> AppResult<bool> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        if let Some(ts) = patch.start {
            entry.start = Some(ts);
        }
        if let Some(ts) = patch.end {
            entry.end = Some(ts);
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove one entry. Returns `false` when the id is not found.
    pub fn remove(&mut self, id: i64) -> AppResult<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Empty the collection and delete the store file entirely.
    pub fn clear(&mut self) -> AppResult<()> {
        self.entries.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Append a batch (import) and persist once.
    pub fn extend(&mut self, entries: Vec<TimeEntry>) -> AppResult<()> {
        self.entries.extend(entries);
        self.persist()
    }

    /// Substitute the whole collection (import --replace) and persist.
    pub fn replace(&mut self, entries: Vec<TimeEntry>) -> AppResult<()> {
        self.entries = entries;
        self.persist()
    }

    fn persist(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
