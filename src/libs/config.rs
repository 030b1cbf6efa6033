//! Configuration management for the taplog application.
//!
//! Settings are stored as JSON in the platform application data directory and
//! loaded with [`Config::read`]. Every section is optional so a missing file,
//! or a file written by an older version, still yields a usable configuration.
//!
//! ## Configuration Structure
//!
//! - **Storage**: backend preference (`auto`, `sqlite`, `flat`) and an
//!   optional data directory override.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taplog::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//!
//! // Run the interactive setup wizard and persist the answers
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Which persistence backend the store should open.
///
/// `Auto` probes the SQLite database first and silently falls back to flat
/// JSON files when it cannot be opened. The explicit variants skip the probe
/// and force one engine, which also makes the fallback path reachable in
/// environments where SQLite would normally succeed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    #[default]
    Auto,
    Sqlite,
    Flat,
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendPreference::Auto => "auto",
            BackendPreference::Sqlite => "sqlite",
            BackendPreference::Flat => "flat",
        };
        write!(f, "{}", name)
    }
}

/// Storage layer configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StorageConfig {
    /// Backend selection strategy applied once when the store opens.
    #[serde(default)]
    pub backend: BackendPreference,

    /// Directory for the database and flat files; platform default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Main configuration container for the entire application.
///
/// All sections are optional so the file stays minimal; absent sections are
/// omitted from the JSON entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default configuration when no file exists yet; parsing or
    /// filesystem errors on an existing file propagate to the caller.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Existing values are offered as defaults so re-running the wizard only
    /// changes what the user actually edits. The returned configuration is
    /// not saved; the caller decides when to persist it.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let current = config.storage.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleStorage, true);

        let backends = [BackendPreference::Auto, BackendPreference::Sqlite, BackendPreference::Flat];
        let selected = backends.iter().position(|b| *b == current.backend).unwrap_or(0);
        let backend = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorageBackend.to_string())
            .items(&backends.iter().map(|b| b.to_string()).collect::<Vec<_>>())
            .default(selected)
            .interact()?;

        let data_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataDir.to_string())
            .allow_empty(true)
            .default(current.data_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .interact_text()?;

        config.storage = Some(StorageConfig {
            backend: backends[backend],
            data_dir: if data_dir.trim().is_empty() { None } else { Some(PathBuf::from(data_dir.trim())) },
        });

        Ok(config)
    }
}
