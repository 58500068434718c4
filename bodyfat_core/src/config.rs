//! Configuration file support for the calculator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bodyfat/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where and how measurements and results are stored
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Name of the workbook holding both tables
    #[serde(default = "default_workbook")]
    pub workbook: String,

    #[serde(default = "default_measurements_table")]
    pub measurements_table: String,

    #[serde(default = "default_results_table")]
    pub results_table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            workbook: default_workbook(),
            measurements_table: default_measurements_table(),
            results_table: default_results_table(),
        }
    }
}

impl StoreConfig {
    /// Directory holding the workbook's table files
    pub fn workbook_dir(&self) -> PathBuf {
        self.data_dir.join(&self.workbook)
    }

    /// Reject names that cannot be used as table file names
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("workbook", &self.workbook),
            ("measurements_table", &self.measurements_table),
            ("results_table", &self.results_table),
        ] {
            if value.trim().is_empty() || value.contains(['/', '\\']) {
                return Err(Error::Config(format!(
                    "store.{} must be a non-empty name without path separators, got {:?}",
                    field, value
                )));
            }
        }

        if self.measurements_table == self.results_table {
            return Err(Error::Config(
                "store.measurements_table and store.results_table must differ".into(),
            ));
        }

        Ok(())
    }
}

/// Terminal presentation options
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("bodyfat")
}

fn default_workbook() -> String {
    "body-fat-percent-calculator".into()
}

fn default_measurements_table() -> String {
    "measurements".into()
}

fn default_results_table() -> String {
    "results".into()
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.store.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("bodyfat").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
