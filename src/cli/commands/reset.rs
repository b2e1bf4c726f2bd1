use crate::cli::commands::del::ask_confirmation;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::{info, success};

/// Clear all entries and remove the store file.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = EntryStore::open(&cfg.store)?;

    let prompt = format!(
        "Delete ALL {} entries and remove the store file? This action is irreversible.",
        store.len()
    );

    if !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    crate::core::del::DeleteLogic::reset(&mut store)?;
    success("All entries have been deleted.");

    Ok(())
}
