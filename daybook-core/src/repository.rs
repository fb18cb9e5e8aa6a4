//! Loads and saves the whole store through a `KeyValueStorage`.
//!
//! Both directions fail soft: unreadable data loads as an empty store and a
//! failed write is only logged.

use crate::constants::EVENTS_KEY;
use crate::storage::KeyValueStorage;
use crate::store::Store;

#[derive(Debug)]
pub struct EventRepository<S> {
    storage: S,
}

impl<S: KeyValueStorage> EventRepository<S> {
    pub fn new(storage: S) -> Self {
        EventRepository { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load(&self) -> Store {
        let raw = match self.storage.get(EVENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored events, starting empty");
                return Store::new();
            }
            Err(e) => {
                log::warn!("Could not read stored events: {}", e);
                return Store::new();
            }
        };

        match Store::from_json(&raw) {
            Ok(store) => {
                log::debug!("Loaded {} entries", store.len());
                store
            }
            Err(e) => {
                log::warn!("Ignoring malformed stored events: {}", e);
                Store::new()
            }
        }
    }

    pub fn save(&mut self, store: &Store) {
        let result = store
            .to_json()
            .and_then(|json| self.storage.set(EVENTS_KEY, &json));

        if let Err(e) = result {
            log::error!("Could not save events: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DaybookError, DaybookResult};
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::TempDir;

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> DaybookResult<Option<String>> {
            Err(DaybookError::Io(std::io::Error::other("unreadable")))
        }

        fn set(&mut self, _key: &str, _value: &str) -> DaybookResult<()> {
            Err(DaybookError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn test_load_missing_is_empty() {
        let repo = EventRepository::new(MemoryStorage::new());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(EVENTS_KEY, "{not json").unwrap();

        let repo = EventRepository::new(storage);
        assert_eq!(repo.load(), Store::new());
    }

    #[test]
    fn test_storage_errors_are_swallowed() {
        let mut repo = EventRepository::new(BrokenStorage);
        let store = repo.load();
        assert!(store.is_empty());

        repo.save(&store);
    }

    #[test]
    fn test_save_then_load_roundtrip_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let key = "2024-06-01".parse().unwrap();
        let (store, _) = Store::new().add_entry(key, "buy milk").unwrap();

        let mut repo = EventRepository::new(FileStorage::new(temp_dir.path()));
        repo.save(&store);

        let reopened = EventRepository::new(FileStorage::new(temp_dir.path()));
        assert_eq!(reopened.load(), store);
        assert!(temp_dir.path().join("events.json").exists());
    }
}
