//! Command dispatch.

pub mod palette;
pub mod theme;

use std::rc::Rc;

use acme_constant::ThemeVariant;
use acme_core::{ColorProvider, ColorTheme, KeyValueStorage, SqliteStorage, ThemeConfig, ThemeSlot};
use acme_observability::{record_error, theme_span};
use anyhow::{bail, Context, Result};

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    match cli.command {
        Command::Variants => palette::variants(config.app),
        Command::Show => theme::show(&Session::open(config)?),
        Command::Get { slot } => theme::get(&Session::open(config)?, &slot),
        Command::Set { slot, value } => theme::set(&Session::open(config)?, &slot, value),
        Command::Apply { file } => theme::apply(&Session::open(config)?, &file),
        Command::Use { variant } => theme::use_variant(&Session::open(config)?, &variant),
        Command::Reset => theme::reset(&Session::open(config)?),
        Command::Css { selector } => palette::css(&Session::open(config)?, &selector),
        Command::Diff { variant } => palette::diff(&Session::open(config)?, &variant),
    }
}

/// Env config (`ACME_THEME_*`), then command-line flags.
pub fn resolve_config(cli: &Cli) -> Result<ThemeConfig> {
    let mut config = ThemeConfig::from_env()?;
    if let Some(app) = &cli.app {
        config.app = app.parse()?;
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(key) = &cli.key {
        config.storage_key = key.clone();
    }
    Ok(config)
}

/// Slot by wire key (`cardForeground`) or kebab name (`card-foreground`).
pub fn parse_slot(name: &str) -> acme_core::Result<ThemeSlot> {
    Ok(name.parse()?)
}

pub fn parse_variant(name: &str) -> acme_core::Result<ThemeVariant> {
    Ok(name.parse()?)
}

/// A provider mounted over `<data_dir>/theme.db` for the configured app.
pub struct Session {
    config: ThemeConfig,
    storage: Rc<SqliteStorage>,
    provider: ColorProvider,
}

impl Session {
    pub fn open(config: ThemeConfig) -> Result<Self> {
        let storage = Rc::new(
            SqliteStorage::open_at(&config.data_dir)
                .with_context(|| format!("open theme store in {}", config.data_dir.display()))?,
        );
        let provider = ColorProvider::builder(config.app)
            .with_storage_key(config.storage_key.clone())
            .with_storage(Rc::clone(&storage))
            .mount();
        tracing::debug!(
            app = %config.app,
            restore = ?provider.restore_outcome(),
            "session opened"
        );
        Ok(Self {
            config,
            storage,
            provider,
        })
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }

    pub fn current(&self) -> ColorTheme {
        self.provider.access().colors
    }

    /// Replaces the theme and checks that it reached the store.
    pub fn commit(&self, theme: ColorTheme) -> Result<()> {
        let span = theme_span!(self.config.app.name(), "commit");
        let _guard = span.enter();

        self.provider.access().set_colors.set(theme);
        span.record("revision", self.provider.handle().revision());

        let current = self.current();
        let stored = match self.storage.get(&self.config.storage_key) {
            Ok(raw) => raw.and_then(|raw| serde_json::from_str::<ColorTheme>(&raw).ok()),
            Err(e) => {
                record_error(&e);
                return Err(e).context("read back saved theme");
            }
        };
        if stored.as_ref() != Some(&current) {
            bail!("theme was not saved to {}", self.config.db_path().display());
        }
        Ok(())
    }
}
