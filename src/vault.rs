//! Session lifecycle around the entry store.
//!
//! A [`Vault`] ties together the database path, the master-password hash and
//! the in-memory [`EntryStore`]: first-run setup, unlock by master password,
//! and saving the full snapshot after mutations.

use anyhow::{Result, anyhow};
use std::fs;
use std::path::PathBuf;

use crate::auth;
use crate::storage::{StoreFile, load_store_file, save_store_file};
use crate::store::EntryStore;

/// One unlocked password-manager session.
pub struct Vault {
    store: EntryStore,
    db_path: Option<PathBuf>,
    master_hash: Option<String>,
}

impl Vault {
    pub fn new() -> Self {
        Self {
            store: EntryStore::new(),
            db_path: None,
            master_hash: None,
        }
    }

    pub fn set_db_path(&mut self, path: PathBuf) {
        self.db_path = Some(path);
    }

    /// Whether no vault has been initialized yet (no store file, or an
    /// empty one).
    pub fn is_new_user(&self) -> bool {
        match &self.db_path {
            Some(path) => {
                !path.exists() || fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
            }
            None => true,
        }
    }

    /// First-run setup: hashes the master password and writes an empty
    /// store file.
    pub fn setup_new_user(&mut self, master_password: &str) -> Result<()> {
        if self.db_path.is_none() {
            return Err(anyhow!("Database path not set"));
        }

        self.master_hash = Some(auth::hash_master_password(master_password)?);
        self.store = EntryStore::new();
        self.save()?;
        log::info!("Initialized a new vault");
        Ok(())
    }

    /// Verifies the master password against the stored hash; on success the
    /// persisted entries are loaded into the store. A wrong password is
    /// `Ok(false)`, not an error.
    pub fn validate_master_password(&mut self, master_password: &str) -> Result<bool> {
        let path = self
            .db_path
            .as_ref()
            .ok_or_else(|| anyhow!("Database path not set"))?;

        let Some(file) = load_store_file(path)? else {
            return Ok(false);
        };

        if !auth::verify_master_password(master_password, &file.master_hash)? {
            log::warn!("Master password verification failed");
            return Ok(false);
        }

        self.store = EntryStore::from_entries(file.entries)
            .map_err(|e| anyhow!("Store file violates uniqueness: {}", e))?;
        self.master_hash = Some(file.master_hash);
        log::info!("Vault unlocked with {} entries", self.store.len());
        Ok(true)
    }

    /// Writes the current snapshot to disk.
    pub fn save(&self) -> Result<()> {
        self.save_store(&self.store)
    }

    /// Writes an externally held store to disk under this vault's master
    /// hash. Lets the shell own the store while the vault stays borrowed
    /// only for saving.
    pub fn save_store(&self, store: &EntryStore) -> Result<()> {
        let path = self
            .db_path
            .as_ref()
            .ok_or_else(|| anyhow!("Database path not set"))?;
        let hash = self
            .master_hash
            .as_ref()
            .ok_or_else(|| anyhow!("Master password not set"))?;

        save_store_file(path, &StoreFile::new(hash.clone(), store.snapshot()))
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntryStore {
        &mut self.store
    }

    /// Moves the store out of the vault, leaving an empty one behind.
    pub fn take_store(&mut self) -> EntryStore {
        std::mem::take(&mut self.store)
    }

    /// Drops the master hash from memory on exit.
    pub fn lock(&mut self) {
        self.master_hash = None;
    }
}

impl Default for Vault {
    fn default() -> Self {
        Self::new()
    }
}
