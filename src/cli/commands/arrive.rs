use crate::config::Config;
use crate::core::arrive::ArriveLogic;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::success;
use crate::utils::time::format_clock;

/// Log a new arrival.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = EntryStore::open(&cfg.store)?;

    let entry = ArriveLogic::apply(&mut store)?;

    success(format!(
        "Arrival logged: entry {} at {}",
        entry.id,
        format_clock(entry.arrival, cfg.use_12h_clock)
    ));
    Ok(())
}
