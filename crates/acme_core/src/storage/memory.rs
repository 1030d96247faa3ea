//! In-memory key-value store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::KeyValueStorage;
use crate::error::{Result, ThemeError};

/// Map-backed storage. Reads and writes can be made to fail, to stand in for
/// an unavailable or full device store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_entry(key: &str, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.into());
        storage
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.get() {
            return Err(ThemeError::StorageRead("memory storage unavailable".into()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(ThemeError::StorageWrite("memory storage full".into()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(ThemeError::StorageWrite("memory storage full".into()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("app-theme").unwrap(), None);
        storage.set("app-theme", "{}").unwrap();
        assert_eq!(storage.get("app-theme").unwrap().as_deref(), Some("{}"));
        assert_eq!(storage.writes(), 1);
        storage.remove("app-theme").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_failures_are_switchable() {
        let storage = MemoryStorage::with_entry("k", "v");
        storage.set_fail_reads(true);
        assert!(matches!(storage.get("k"), Err(ThemeError::StorageRead(_))));
        storage.set_fail_writes(true);
        assert!(matches!(storage.set("k", "w"), Err(ThemeError::StorageWrite(_))));
        storage.set_fail_reads(false);
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(storage.writes(), 0);
    }
}
