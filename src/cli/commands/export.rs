use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::store::EntryStore;
use clap::ValueEnum;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = EntryStore::open(&cfg.store)?;

        // --format wins; otherwise the configured default.
        let format = match format {
            Some(f) => f.clone(),
            None => ExportFormat::from_str(&cfg.default_format, true)
                .map_err(|_| AppError::InvalidExportFormat(cfg.default_format.clone()))?,
        };

        ExportLogic::export(store.entries(), cfg, format, file, *force)?;
    }
    Ok(())
}
