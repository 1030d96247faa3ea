//! Key-value persistence: the whole theme as one JSON record under a fixed key.

use acme_constant::app::THEME_STORAGE_KEY;
use acme_types::ColorTheme;

use super::ThemePersistence;
use crate::app::PersistenceKind;
use crate::error::{Result, ThemeError};
use crate::storage::KeyValueStorage;

pub struct KeyValuePersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> KeyValuePersistence<S> {
    /// Persistence under [`THEME_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, THEME_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> ThemePersistence for KeyValuePersistence<S> {
    fn backend(&self) -> &'static str {
        self.storage.backend()
    }

    fn kind(&self) -> PersistenceKind {
        PersistenceKind::KeyValue
    }

    fn restore(&self) -> Result<Option<ColorTheme>> {
        let raw = self
            .storage
            .get(&self.key)
            .map_err(read_error)?;
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| ThemeError::MalformedRecord {
                key: self.key.clone(),
                source,
            })
    }

    fn persist(&self, theme: &ColorTheme) -> Result<()> {
        let raw = serde_json::to_string(theme)?;
        self.storage
            .set(&self.key, &raw)
            .map_err(write_error)
    }
}

fn read_error(e: ThemeError) -> ThemeError {
    match e {
        ThemeError::StorageRead(_) => e,
        other => ThemeError::StorageRead(other.to_string()),
    }
}

fn write_error(e: ThemeError) -> ThemeError {
    match e {
        ThemeError::StorageWrite(_) => e,
        other => ThemeError::StorageWrite(other.to_string()),
    }
}
