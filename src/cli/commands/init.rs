use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EntryStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty entry store (a JSON array)
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.store {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let store_path = if let Some(custom) = &cli.store {
        custom.clone()
    } else {
        cfg.store.clone()
    };

    println!("⚙️  Initializing qtracker…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Store      : {}", &store_path);

    // Rehydrate once so a malformed pre-existing store surfaces now
    // rather than on the first arrive.
    let store = EntryStore::open(&store_path)?;
    println!("✅ Store ready ({} entries)", store.len());

    println!("🎉 qtracker initialization completed!");
    Ok(())
}
