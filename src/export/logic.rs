// src/export/logic.rs

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::matlab::export_matlab;
use crate::export::model::entries_to_rows;
use crate::export::xlsx::export_xlsx;
use crate::models::entry::TimeEntry;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use chrono::Local;
use std::path::PathBuf;

/// High-level export dispatch.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the collection.
    ///
    /// - `format`: csv | json | xlsx | matlab
    /// - `file`: output path; a dated default in the current directory
    ///   when omitted
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        entries: &[TimeEntry],
        cfg: &Config,
        format: ExportFormat,
        file: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        // Guarded no-op: nothing to write, no file is touched.
        if entries.is_empty() {
            warning("No entries to export.");
            return Ok(());
        }

        let path: PathBuf = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(default_filename(&format)),
        };

        ensure_writable(&path, force)?;

        // One snapshot for every in-progress duration in the artifact.
        let now = Local::now().timestamp_millis();

        match format {
            ExportFormat::Csv => {
                export_csv(&entries_to_rows(entries, now, cfg.use_12h_clock), &path)?
            }
            ExportFormat::Json => {
                export_json(&entries_to_rows(entries, now, cfg.use_12h_clock), &path)?
            }
            ExportFormat::Xlsx => {
                export_xlsx(&entries_to_rows(entries, now, cfg.use_12h_clock), &path)?
            }
            ExportFormat::Matlab => export_matlab(entries, &path)?,
        }

        Ok(())
    }
}

/// Dated default output name, per format.
pub fn default_filename(format: &ExportFormat) -> String {
    match format {
        ExportFormat::Matlab => format!("customer_service_analysis_{}.m", date::today_iso()),
        other => format!("time-entries-{}.{}", date::today_iso(), other.extension()),
    }
}
