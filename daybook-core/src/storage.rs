//! String key-value storage backing the event store.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::DaybookResult;

/// A durable string store. Values are always written whole.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> DaybookResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> DaybookResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> DaybookResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> DaybookResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        log::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// In-process storage, lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> DaybookResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DaybookResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
