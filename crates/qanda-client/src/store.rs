//! Durable credential storage.
//!
//! A flat key-value store holding the only state the client ever persists:
//! identity and opaque codes. Event content is never written here — it is
//! re-fetched from the server on every page load. Backend crates stay out of
//! the picture; a JSON file under the user's home directory is the production
//! backend, and an in-memory map backs tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read credential store: {0}")]
    Read(std::io::Error),
    #[error("failed to write credential store: {0}")]
    Write(std::io::Error),
    #[error("credential store is corrupt: {0}")]
    Parse(#[from] JsonError),
}

/// Flat string key-value storage for credentials.
///
/// Absent keys yield `None`, never an error; writes are visible to
/// subsequent reads immediately.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Key derivations for the namespaced credential entries.
///
/// The two bare constants are global to the session; the per-event variants
/// are suffixed with the event id so several events can be remembered at
/// once.
pub mod keys {
    use crate::types::EventId;

    /// Identity of the active user, shared across events.
    pub const USERNAME: &str = "event-username";
    /// Creator credential of the active session.
    pub const CREATOR_CODE: &str = "event-creator-code";

    pub fn event_name(id: &EventId) -> String {
        format!("event_name_{id}")
    }

    pub fn creator_code(id: &EventId) -> String {
        format!("creator_code_{id}")
    }

    pub fn join_event_name(id: &EventId) -> String {
        format!("join_event_name_{id}")
    }

    pub fn join_invite_code(id: &EventId) -> String {
        format!("join_invite_code_{id}")
    }

    pub fn join_username(id: &EventId) -> String {
        format!("join_username_{id}")
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store at `~/.qanda/credentials.json`.
///
/// The whole map lives in memory; every mutation rewrites the file so a
/// crash never loses more than the in-flight write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at the default path, creating an empty one if the
    /// file does not exist yet.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(Self::default_path())
    }

    /// Open the store at a custom path.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StoreError::Read(err)),
        };
        Ok(Self { path, entries })
    }

    /// Default store path (`~/.qanda/credentials.json`).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .expect("Failed to get home directory")
            .join(".qanda")
            .join("credentials.json")
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, contents).map_err(StoreError::Write)
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventId;

    #[test]
    fn absent_key_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("event-username"), None);
    }

    #[test]
    fn set_then_get_roundtrip() {
        let mut store = MemoryStore::new();
        store.set(keys::USERNAME, "alice").unwrap();
        assert_eq!(store.get(keys::USERNAME).as_deref(), Some("alice"));

        store.set(keys::USERNAME, "bob").unwrap();
        assert_eq!(store.get(keys::USERNAME).as_deref(), Some("bob"));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set(keys::CREATOR_CODE, "cc-1").unwrap();
        store.remove(keys::CREATOR_CODE).unwrap();
        store.remove(keys::CREATOR_CODE).unwrap();
        assert_eq!(store.get(keys::CREATOR_CODE), None);
    }

    #[test]
    fn per_event_keys_are_scoped_by_id() {
        let id = EventId::from("evt-42");
        assert_eq!(keys::event_name(&id), "event_name_evt-42");
        assert_eq!(keys::creator_code(&id), "creator_code_evt-42");
        assert_eq!(keys::join_event_name(&id), "join_event_name_evt-42");
        assert_eq!(keys::join_invite_code(&id), "join_invite_code_evt-42");
        assert_eq!(keys::join_username(&id), "join_username_evt-42");
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let mut store = FileStore::open_at(&path).unwrap();
        store.set(keys::USERNAME, "alice").unwrap();
        store.set(keys::CREATOR_CODE, "cc-1").unwrap();
        store.remove(keys::CREATOR_CODE).unwrap();
        drop(store);

        let reopened = FileStore::open_at(&path).unwrap();
        assert_eq!(reopened.get(keys::USERNAME).as_deref(), Some("alice"));
        assert_eq!(reopened.get(keys::CREATOR_CODE), None);
    }

    #[test]
    fn file_store_opens_empty_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open_at(dir.path().join("missing.json")).unwrap();
        assert_eq!(store.get(keys::USERNAME), None);
    }
}
