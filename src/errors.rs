//! Unified application error type.
//! All modules (store, core, cli, export, import) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Malformed store file: {0}")]
    MalformedStore(#[from] serde_json::Error),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No entry found with id {0}")]
    EntryNotFound(i64),

    #[error("Entry {id} already has a {field} stamp")]
    AlreadyStamped { id: i64, field: &'static str },

    #[error("Entry {0} has no start stamp yet")]
    NotStarted(i64),

    #[error("No {0} entry to stamp")]
    NoEligibleEntry(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
