pub mod accessor;
pub mod app;
pub mod config;
pub mod error;
pub mod persistence;
pub mod provider;
pub mod storage;
pub mod store;
pub mod styles;

pub use accessor::{use_colors, Colors, MissingScopePolicy, ThemeAccessor};
pub use app::{App, PersistenceKind};
pub use config::ThemeConfig;
pub use error::{Result, ThemeError, MISSING_PROVIDER_MESSAGE};
pub use persistence::{
    render_root_css, AdapterState, CssPropertyTarget, CssVariablePersistence, KeyValuePersistence,
    PersistOutcome, PersistenceAdapter, RestoreOutcome, StyleDeclaration, ThemePersistence,
};
pub use provider::{ColorProvider, ProviderBuilder};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage, StoredEntry};
pub use store::{initialize, ScopeHandle, SetColors, Subscription};
pub use styles::{DynamicColors, FontStyle, FontWeight, TextStyle, ViewStyle};

pub use acme_types::{ColorTheme, ThemeOverrides, ThemeSlot};
