//! A single credential record.
//!
//! An [`Entry`] validates its own fields: `website` and `username` are never
//! empty or whitespace-only, and a stored password (when present) obeys the
//! same rule. The `created_at` timestamp doubles as a last-modified marker
//! and is refreshed by the store's update operation, not by the setters
//! themselves, so that constructing an entry does not count as an update.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Timestamp format used for `created_at`, e.g. `07.08.2026 14:03:59`.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// One stored credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    website: String,
    username: String,
    password: Option<String>,
    created_at: String,
}

impl Entry {
    /// Creates a validated entry, stamping `created_at` with the current
    /// local time.
    pub fn new(website: &str, username: &str, password: Option<&str>) -> StoreResult<Self> {
        validate("website", website)?;
        validate("username", username)?;
        if let Some(pw) = password {
            validate("password", pw)?;
        }

        Ok(Self {
            website: website.to_string(),
            username: username.to_string(),
            password: password.map(str::to_string),
            created_at: now(),
        })
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The `DD.MM.YYYY HH:MM:SS` timestamp of the last store-level update
    /// (or of construction, if the entry was never updated).
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn set_website(&mut self, value: &str) -> StoreResult<()> {
        validate("website", value)?;
        self.website = value.to_string();
        Ok(())
    }

    pub fn set_username(&mut self, value: &str) -> StoreResult<()> {
        validate("username", value)?;
        self.username = value.to_string();
        Ok(())
    }

    /// Replaces the password. A blank value is rejected; use
    /// [`clear_password`](Self::clear_password) to drop the password
    /// entirely.
    pub fn set_password(&mut self, value: &str) -> StoreResult<()> {
        validate("password", value)?;
        self.password = Some(value.to_string());
        Ok(())
    }

    /// Drops the stored password. This is the only way to return an entry to
    /// the "no password" state.
    pub fn clear_password(&mut self) {
        self.password = None;
    }

    /// Refreshes `created_at`. Called by the store when an update succeeds.
    pub(crate) fn touch(&mut self) {
        self.created_at = now();
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with username {} created/updated at {}.",
            self.website, self.username, self.created_at
        )
    }
}

fn now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn validate(field: &'static str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(field));
    }
    Ok(())
}

/// Selector for the mutable fields of an [`Entry`], as accepted by the
/// store's update operation. Parses both the single-letter form the original
/// menu used (`w`, `u`, `p`) and the full field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Website,
    Username,
    Password,
}

impl EntryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::Website => "website",
            EntryField::Username => "username",
            EntryField::Password => "password",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" | "website" => Ok(EntryField::Website),
            "u" | "username" => Ok(EntryField::Username),
            "p" | "password" => Ok(EntryField::Password),
            other => Err(StoreError::InvalidField(other.to_string())),
        }
    }
}
