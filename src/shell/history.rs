//! Command history configuration.

use std::path::PathBuf;

/// Configuration for persistent command history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Path to the history file.
    pub path: PathBuf,
    /// Maximum number of entries to keep.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("history"),
            max_entries: 1000,
        }
    }
}

impl HistoryConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }
}
