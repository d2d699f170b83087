//! The in-memory entry collection.
//!
//! [`EntryStore`] keeps entries in insertion order and enforces two
//! invariants: no two entries share the same `(website, username)` pair, and
//! mutating operations only ever touch an entry that is actually present.
//! Entries are addressed by [`EntryId`], a surrogate handle assigned at
//! insertion — handles are never reused within a session and stay valid
//! across removals of other entries.
//!
//! Persistence is not the store's job: callers take a [`snapshot`]
//! (`EntryStore::snapshot`) after each successful mutation and write it
//! through the storage layer.

use crate::entry::{Entry, EntryField};
use crate::error::{StoreError, StoreResult};

/// Stable handle to an entry in an [`EntryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

/// Ordered collection of [`Entry`] values with uniqueness guarantees.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<(EntryId, Entry)>,
    next_id: u64,
}

impl EntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from a persisted snapshot, preserving order and
    /// re-checking the duplicate-pair invariant.
    pub fn from_entries(entries: Vec<Entry>) -> StoreResult<Self> {
        let mut store = Self::new();
        for entry in entries {
            store.add(entry)?;
        }
        Ok(store)
    }

    /// Appends an entry, refusing a `(website, username)` pair that is
    /// already present. Returns the handle of the new entry.
    pub fn add(&mut self, entry: Entry) -> StoreResult<EntryId> {
        if self.pair_exists(entry.website(), entry.username(), None) {
            return Err(StoreError::Duplicate {
                website: entry.website().to_string(),
                username: entry.username().to_string(),
            });
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, entry));
        Ok(id)
    }

    /// Removes the entry behind `id`, returning it.
    pub fn remove(&mut self, id: EntryId) -> StoreResult<Entry> {
        let pos = self.position(id).ok_or(StoreError::NotFound)?;
        Ok(self.entries.remove(pos).1)
    }

    /// Updates one field of a stored entry and refreshes its `created_at`
    /// timestamp.
    ///
    /// Failure order follows the operation contract: an unknown field
    /// selector, then a blank value, then a dead handle. Website and
    /// username changes that would collide with another entry's pair are
    /// refused to keep the store invariant intact.
    pub fn update(&mut self, id: EntryId, field: &str, value: &str) -> StoreResult<()> {
        let field: EntryField = field.parse()?;
        if value.trim().is_empty() {
            return Err(StoreError::Validation(field.as_str()));
        }
        let pos = self.position(id).ok_or(StoreError::NotFound)?;

        match field {
            EntryField::Website => {
                let username = self.entries[pos].1.username().to_string();
                if self.pair_exists(value, &username, Some(id)) {
                    return Err(StoreError::Duplicate {
                        website: value.to_string(),
                        username,
                    });
                }
                self.entries[pos].1.set_website(value)?;
            }
            EntryField::Username => {
                let website = self.entries[pos].1.website().to_string();
                if self.pair_exists(&website, value, Some(id)) {
                    return Err(StoreError::Duplicate {
                        website,
                        username: value.to_string(),
                    });
                }
                self.entries[pos].1.set_username(value)?;
            }
            EntryField::Password => {
                self.entries[pos].1.set_password(value)?;
            }
        }

        self.entries[pos].1.touch();
        Ok(())
    }

    /// Drops the password of a stored entry. Like `update`, this is a
    /// store-level event and refreshes `created_at`.
    pub fn clear_password(&mut self, id: EntryId) -> StoreResult<()> {
        let pos = self.position(id).ok_or(StoreError::NotFound)?;
        self.entries[pos].1.clear_password();
        self.entries[pos].1.touch();
        Ok(())
    }

    /// Returns the entry behind `id`, if it is still in the store.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.position(id).map(|pos| &self.entries[pos].1)
    }

    /// First entry (in insertion order) whose website matches `name`
    /// exactly. Case-sensitive, no normalization; absence is not an error.
    pub fn find_by_website(&self, name: &str) -> Option<(EntryId, &Entry)> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.website() == name)
            .map(|(id, entry)| (*id, entry))
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    /// The websites of all entries, in insertion order.
    pub fn websites(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|(_, entry)| entry.website())
            .collect()
    }

    /// Clones the full collection for persistence.
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|(eid, _)| *eid == id)
    }

    fn pair_exists(&self, website: &str, username: &str, skip: Option<EntryId>) -> bool {
        self.entries.iter().any(|(id, entry)| {
            Some(*id) != skip && entry.website() == website && entry.username() == username
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;

    fn entry(website: &str, username: &str) -> Entry {
        Entry::new(website, username, Some("secret")).unwrap()
    }

    fn stamp(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_add_and_list_preserves_order() {
        let mut store = EntryStore::new();
        store.add(entry("c.com", "carol")).unwrap();
        store.add(entry("a.com", "alice")).unwrap();
        store.add(entry("b.com", "bob")).unwrap();

        let websites = store.websites();
        assert_eq!(websites, vec!["c.com", "a.com", "b.com"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_duplicate_pair_rejected() {
        let mut store = EntryStore::new();
        store.add(entry("github.com", "octocat")).unwrap();

        let err = store.add(entry("github.com", "octocat")).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_website_different_username_allowed() {
        let mut store = EntryStore::new();
        store.add(entry("github.com", "octocat")).unwrap();
        store.add(entry("github.com", "hubot")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_by_handle() {
        let mut store = EntryStore::new();
        let id = store.add(entry("github.com", "octocat")).unwrap();
        store.add(entry("gitlab.com", "octocat")).unwrap();

        let removed = store.remove(id).unwrap();
        assert_eq!(removed.website(), "github.com");
        assert_eq!(store.len(), 1);
        assert!(store.find_by_website("github.com").is_none());

        // The handle is dead now.
        assert_eq!(store.remove(id), Err(StoreError::NotFound));
    }

    #[test]
    fn test_remove_unknown_handle() {
        let mut store = EntryStore::new();
        let id = store.add(entry("github.com", "octocat")).unwrap();
        store.remove(id).unwrap();

        let mut other = EntryStore::new();
        let foreign = other.add(entry("x.com", "y")).unwrap();
        assert_eq!(store.remove(foreign), Err(StoreError::NotFound));
    }

    #[test]
    fn test_update_password_refreshes_timestamp() {
        let mut store = EntryStore::new();
        let id = store.add(entry("github.com", "octocat")).unwrap();
        let before = store.get(id).unwrap().created_at().to_string();

        store.update(id, "p", "correct horse").unwrap();

        let updated = store.get(id).unwrap();
        assert_eq!(updated.password(), Some("correct horse"));
        assert_eq!(updated.website(), "github.com");
        assert_eq!(updated.username(), "octocat");
        // Same-second updates produce an equal stamp, never an earlier one.
        assert!(stamp(updated.created_at()) >= stamp(&before));
    }

    #[test]
    fn test_update_invalid_field() {
        let mut store = EntryStore::new();
        let id = store.add(entry("github.com", "octocat")).unwrap();

        assert_eq!(
            store.update(id, "x", "value"),
            Err(StoreError::InvalidField("x".to_string()))
        );
    }

    #[test]
    fn test_update_blank_value() {
        let mut store = EntryStore::new();
        let id = store.add(entry("github.com", "octocat")).unwrap();

        assert_eq!(
            store.update(id, "u", "   "),
            Err(StoreError::Validation("username"))
        );
    }

    #[test]
    fn test_update_failure_order() {
        let mut store = EntryStore::new();
        let id = store.add(entry("github.com", "octocat")).unwrap();
        store.remove(id).unwrap();

        // Dead handle, but the field selector is checked first.
        assert_eq!(
            store.update(id, "x", "value"),
            Err(StoreError::InvalidField("x".to_string()))
        );
        // Dead handle, blank value: validation is checked before presence.
        assert_eq!(
            store.update(id, "w", " "),
            Err(StoreError::Validation("website"))
        );
        assert_eq!(store.update(id, "w", "a.com"), Err(StoreError::NotFound));
    }

    #[test]
    fn test_update_refuses_colliding_pair() {
        let mut store = EntryStore::new();
        store.add(entry("github.com", "octocat")).unwrap();
        let id = store.add(entry("gitlab.com", "octocat")).unwrap();

        let err = store.update(id, "w", "github.com").unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(store.get(id).unwrap().website(), "gitlab.com");
    }

    #[test]
    fn test_update_website_to_itself_allowed() {
        let mut store = EntryStore::new();
        let id = store.add(entry("github.com", "octocat")).unwrap();
        store.update(id, "w", "github.com").unwrap();
        assert_eq!(store.get(id).unwrap().website(), "github.com");
    }

    #[test]
    fn test_clear_password() {
        let mut store = EntryStore::new();
        let id = store.add(entry("github.com", "octocat")).unwrap();

        store.clear_password(id).unwrap();
        assert!(store.get(id).unwrap().password().is_none());

        store.remove(id).unwrap();
        assert_eq!(store.clear_password(id), Err(StoreError::NotFound));
    }

    #[test]
    fn test_find_by_website_exact_match() {
        let mut store = EntryStore::new();
        store.add(entry("GitHub.com", "octocat")).unwrap();
        store.add(entry("github.com", "hubot")).unwrap();
        store.add(entry("github.com", "monalisa")).unwrap();

        // Case-sensitive, first in insertion order wins.
        let (_, found) = store.find_by_website("github.com").unwrap();
        assert_eq!(found.username(), "hubot");
        assert!(store.find_by_website("GITHUB.COM").is_none());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = EntryStore::new();
        store.add(entry("c.com", "carol")).unwrap();
        store.add(entry("a.com", "alice")).unwrap();

        let restored = EntryStore::from_entries(store.snapshot()).unwrap();
        let original: Vec<_> = store.entries().collect();
        let reloaded: Vec<_> = restored.entries().collect();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let snapshot = vec![entry("a.com", "alice"), entry("a.com", "alice")];
        assert!(matches!(
            EntryStore::from_entries(snapshot),
            Err(StoreError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_empty_store_is_valid() {
        let store = EntryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.entries().count(), 0);
        assert!(store.websites().is_empty());
    }
}
