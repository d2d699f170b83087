//! On-disk persistence of the entry store.
//!
//! The whole collection is written as one versioned JSON document after
//! every successful mutation and read back at startup. The storage medium
//! is treated as a trusted opaque blob; only the master-password hash is
//! protected (see [`crate::auth`]).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::entry::Entry;

/// Current store file format version.
pub const STORE_VERSION: u8 = 1;

/// The serialized form of a vault: format version, master-password hash,
/// and the full entry snapshot in insertion order.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreFile {
    pub version: u8,
    pub master_hash: String,
    pub entries: Vec<Entry>,
}

impl StoreFile {
    pub fn new(master_hash: String, entries: Vec<Entry>) -> Self {
        Self {
            version: STORE_VERSION,
            master_hash,
            entries,
        }
    }
}

/// Reads the store file at `path`. Returns `Ok(None)` when the file does
/// not exist or is empty, which callers treat as "fresh vault".
pub fn load_store_file(path: &Path) -> Result<Option<StoreFile>> {
    if !path.exists() {
        log::debug!("No store file at {}", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read store file {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(None);
    }

    let file: StoreFile = serde_json::from_str(&content)
        .with_context(|| format!("Store file {} is not valid JSON", path.display()))?;
    log::info!(
        "Loaded {} entries from {} (format v{})",
        file.entries.len(),
        path.display(),
        file.version
    );
    Ok(Some(file))
}

/// Writes the store file, creating parent directories as needed.
pub fn save_store_file(path: &Path, file: &StoreFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(file)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write store file {}", path.display()))?;
    log::debug!("Saved {} entries to {}", file.entries.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_entries() -> Vec<Entry> {
        vec![
            Entry::new("github.com", "octocat", Some("hunter2")).unwrap(),
            Entry::new("example.org", "alice", None).unwrap(),
        ]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vault.json");
        let original = StoreFile::new("hash".to_string(), sample_entries());

        save_store_file(&path, &original).unwrap();
        let loaded = load_store_file(&path).unwrap().expect("file should exist");

        assert_eq!(loaded.version, STORE_VERSION);
        assert_eq!(loaded.master_hash, "hash");
        assert_eq!(loaded.entries, original.entries);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load_store_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_empty_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vault.json");
        fs::write(&path, "").unwrap();
        assert!(load_store_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_garbage_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vault.json");
        fs::write(&path, "{broken").unwrap();
        assert!(load_store_file(&path).is_err());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("vault.json");
        let file = StoreFile::new("hash".to_string(), vec![]);

        save_store_file(&path, &file).unwrap();
        assert!(path.exists());
    }
}
