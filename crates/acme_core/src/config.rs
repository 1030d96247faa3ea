//! Theme configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use acme_constant::app::{DATA_DIR, THEME_DB, THEME_STORAGE_KEY};

use crate::app::App;
use crate::error::{Result, ThemeError};

/// Which app to mount and where its persisted theme lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// App whose default palette and policy apply
    pub app: App,
    /// Directory holding `theme.db`
    pub data_dir: PathBuf,
    /// Record key for the persisted theme
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            app: App::default(),
            data_dir: default_data_dir(),
            storage_key: THEME_STORAGE_KEY.to_string(),
        }
    }
}

/// `<home>/.acme`, or `.acme` in the working directory when there is no home.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR))
}

impl ThemeConfig {
    pub fn new(app: App) -> Self {
        Self {
            app,
            ..Self::default()
        }
    }

    pub fn with_app(mut self, app: App) -> Self {
        self.app = app;
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(THEME_DB)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(app) = lookup("ACME_THEME_APP") {
            config.app = app.parse()?;
        }

        if let Some(dir) = lookup("ACME_THEME_DIR").filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(key) = lookup("ACME_THEME_KEY") {
            if key.trim().is_empty() {
                return Err(ThemeError::Config("ACME_THEME_KEY is empty".into()));
            }
            config.storage_key = key;
        }

        Ok(config)
    }
}
