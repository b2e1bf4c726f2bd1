use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let prompt = format!("Delete entry {}? This action is irreversible.", id);

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = EntryStore::open(&cfg.store)?;

        DeleteLogic::apply(&mut store, *id)?;
        success(format!("Entry {} has been deleted.", id));
    }

    Ok(())
}
