use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning("No configuration file found; defaults are in effect. Run `qtracker init`.");
                return Ok(());
            }

            let raw = std::fs::read_to_string(&path)?;
            let value: serde_yaml::Value = serde_yaml::from_str(&raw)
                .map_err(|e| crate::errors::AppError::Config(e.to_string()))?;

            let mut missing = Vec::new();
            for key in ["store", "default_format", "use_12h_clock"] {
                if value.get(key).is_none() {
                    missing.push(key);
                }
            }

            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in missing {
                    warning(format!("Missing field '{}' (default applied)", key));
                }
            }
        }
    }

    Ok(())
}
