use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, Tick};
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::utils::table::render_entries;

use std::io::{self, Write};
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { watch } = cmd {
        let store = EntryStore::open(&cfg.store)?;

        if store.is_empty() {
            println!("No entries recorded.");
            return Ok(());
        }

        if *watch {
            watch_loop(&store, cfg)?;
        } else {
            let tick = Tick::now();
            print!(
                "{}",
                render_entries(store.entries(), tick.timestamp, cfg.use_12h_clock)
            );
        }
    }
    Ok(())
}

/// Re-render the table on every clock tick until interrupted. The clock
/// is scoped to this loop; dropping it tears the ticker down.
fn watch_loop(store: &EntryStore, cfg: &Config) -> AppResult<()> {
    let clock = Clock::spawn(Duration::from_secs(1));
    let ticks = clock.subscribe();

    let mut frame = Tick::now();

    loop {
        // clear screen + cursor home
        print!("\x1b[2J\x1b[H");
        println!("Current Time: {}\n", frame.display);
        print!(
            "{}",
            render_entries(store.entries(), frame.timestamp, cfg.use_12h_clock)
        );
        io::stdout().flush()?;

        match ticks.recv() {
            Ok(tick) => frame = tick,
            Err(_) => break,
        }
    }

    Ok(())
}
