use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stamp::StampLogic;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::success;

/// Mark service start for an entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { id } = cmd {
        let mut store = EntryStore::open(&cfg.store)?;

        let stamped = StampLogic::start(&mut store, *id)?;
        success(format!("Service started for entry {}", stamped));
    }
    Ok(())
}
