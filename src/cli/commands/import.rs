use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::import::ImportLogic;
use crate::store::EntryStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, replace } = cmd {
        let mut store = EntryStore::open(&cfg.store)?;
        let path = expand_tilde(file);

        ImportLogic::apply(&mut store, &path, *replace)?;
    }
    Ok(())
}
