//! Application paths.
//!
//! Everything lives under `~/.pwvault`: the store file, the optional word
//! list, the shell history and the log file.

use anyhow::Result;
use std::path::PathBuf;

/// Default column to read words from in a CSV word list.
pub const DEFAULT_WORDLIST_COLUMN: usize = 1;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub wordlist_path: PathBuf,
    pub wordlist_column: usize,
    pub history_path: PathBuf,
    pub log_path: PathBuf,
}

impl AppConfig {
    /// Resolves the data directory under the user's home and creates it if
    /// missing.
    pub fn resolve() -> Result<Self> {
        let home = dirs_next::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        let data_dir = home.join(".pwvault");
        if !data_dir.exists() {
            std::fs::create_dir_all(&data_dir)?;
        }
        Ok(Self::in_dir(data_dir))
    }

    /// Builds a config rooted at an explicit directory.
    pub fn in_dir(data_dir: PathBuf) -> Self {
        Self {
            db_path: data_dir.join("vault.json"),
            wordlist_path: data_dir.join("words.csv"),
            wordlist_column: DEFAULT_WORDLIST_COLUMN,
            history_path: data_dir.join("history"),
            log_path: data_dir.join("pwvault.log"),
            data_dir,
        }
    }
}
