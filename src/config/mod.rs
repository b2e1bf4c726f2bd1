use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path to the entries.json store file.
    pub store: String,
    /// Export format used when --format is omitted.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Render clock strings as 12-hour (AM/PM) instead of 24-hour.
    #[serde(default = "default_use_12h_clock")]
    pub use_12h_clock: bool,
}

fn default_format() -> String {
    "xlsx".to_string()
}
fn default_use_12h_clock() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            default_format: default_format(),
            use_12h_clock: default_use_12h_clock(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("qtracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".qtracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("qtracker.conf")
    }

    /// Return the full path of the entry store file
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("entries.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("Failed to read configuration file");
            serde_yaml::from_str(&content).expect("Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            default_format: default_format(),
            use_12h_clock: default_use_12h_clock(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Seed an empty JSON array so a later rehydration succeeds
        if !store_path.exists() {
            if let Some(parent) = store_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&store_path, "[]")?;
        }

        println!("✅ Store:       {:?}", store_path);

        Ok(())
    }
}
