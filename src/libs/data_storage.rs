use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "taplog";

/// Resolves the platform directory that holds all taplog data files
/// (database, flat storage files and configuration).
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let home = |key: &str| PathBuf::from(var(key).unwrap_or_else(|_| ".".into()));
        let base_path = match OS {
            "windows" => home("LOCALAPPDATA"),
            "macos" => home("HOME").join("Library/Application Support"),
            _ => home("HOME").join(".local/share"),
        };

        Self {
            base_path: base_path.join(APP_NAME),
        }
    }

    /// Uses an explicit directory instead of the platform default.
    pub fn with_base_path(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Full path for a data file, creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
