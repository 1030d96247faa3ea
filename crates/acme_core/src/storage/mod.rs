//! Key-value storage backends for the persisted theme record.
//!
//! - [`MemoryStorage`]: process-local map, with switchable read/write failures.
//! - [`SqliteStorage`]: `kv` table in `<data_dir>/theme.db` (WAL, migrations on open).

mod layout;
mod memory;
mod migrations;
mod sqlite;

use std::rc::Rc;

use crate::error::Result;

pub use layout::ensure_data_dir_at;
pub use memory::MemoryStorage;
pub use sqlite::{SqliteStorage, StoredEntry};

/// String-keyed durable slots (`AsyncStorage`-style `get`/`set`).
pub trait KeyValueStorage {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
