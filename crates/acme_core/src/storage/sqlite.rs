//! SQLite-backed key-value store under the data directory.

use std::path::{Path, PathBuf};

use acme_observability::storage_span;
use anyhow::Context;
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use super::{layout, migrations, KeyValueStorage};
use crate::error::Result;

/// One stored slot with its last write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

pub struct SqliteStorage {
    conn: rusqlite::Connection,
    path: Option<PathBuf>,
}

impl SqliteStorage {
    /// Opens `<data_dir>/theme.db`, creating the dir if needed; enables WAL, runs migrations.
    pub fn open_at(data_dir: &Path) -> Result<Self> {
        let db_path = layout::ensure_data_dir_at(data_dir)?;
        let conn = rusqlite::Connection::open(&db_path).context("open theme.db")?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
        migrations::run_all(&conn)?;
        tracing::debug!(path = %db_path.display(), "theme db opened");
        Ok(Self {
            conn,
            path: Some(db_path),
        })
    }

    /// Private in-memory database (nothing survives the connection).
    pub fn open_in_memory() -> Result<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        migrations::run_all(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Path of the database file; `None` for in-memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Entry with its timestamp, if present.
    pub fn entry(&self, key: &str) -> Result<Option<StoredEntry>> {
        let row = self
            .conn
            .query_row(
                "SELECT key, value, updated_at FROM kv WHERE key = ?1",
                params![key],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )
            .optional()?;
        Ok(row.map(|(key, value, millis)| StoredEntry {
            key,
            value,
            updated_at: DateTime::from_timestamp_millis(millis).unwrap_or_default(),
        }))
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }
}

impl KeyValueStorage for SqliteStorage {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let span = storage_span!(self.backend(), "get", key);
        let _guard = span.enter();
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let span = storage_span!(self.backend(), "set", key);
        let _guard = span.enter();
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

impl std::fmt::Debug for SqliteStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStorage").field("path", &self.path).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_set_get() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert_eq!(storage.get("app-theme").unwrap(), None);
        storage.set("app-theme", "{\"a\":1}").unwrap();
        storage.set("app-theme", "{\"a\":2}").unwrap();
        assert_eq!(storage.get("app-theme").unwrap().as_deref(), Some("{\"a\":2}"));
        assert_eq!(storage.keys().unwrap(), vec!["app-theme".to_string()]);
        assert!(storage.path().is_none());
    }

    #[test]
    fn test_entry_has_timestamp() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        let before = Utc::now().timestamp_millis();
        storage.set("k", "v").unwrap();
        let entry = storage.entry("k").unwrap().unwrap();
        assert_eq!(entry.value, "v");
        assert!(entry.updated_at.timestamp_millis() >= before);
        assert!(storage.entry("missing").unwrap().is_none());
    }

    #[test]
    fn test_file_db_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = SqliteStorage::open_at(dir.path()).unwrap();
            storage.set("app-theme", "saved").unwrap();
        }
        let storage = SqliteStorage::open_at(dir.path()).unwrap();
        assert_eq!(storage.get("app-theme").unwrap().as_deref(), Some("saved"));
        storage.remove("app-theme").unwrap();
        assert_eq!(storage.get("app-theme").unwrap(), None);
        assert!(storage.path().unwrap().ends_with("theme.db"));
    }
}
