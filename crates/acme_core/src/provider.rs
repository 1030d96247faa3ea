//! Color provider: mounts a store for one app and wires its persistence.
//!
//! ```
//! use std::rc::Rc;
//! use acme_core::{App, ColorProvider, MemoryStorage};
//!
//! let storage = Rc::new(MemoryStorage::new());
//! let provider = ColorProvider::builder(App::Mobile)
//!     .with_storage(Rc::clone(&storage))
//!     .mount();
//! let colors = provider.access();
//! colors.set_colors.set(acme_constant::theme::mobile_dark());
//! assert_eq!(provider.handle().read(), acme_constant::theme::mobile_dark());
//! ```

use acme_constant::app::THEME_STORAGE_KEY;
use acme_types::ColorTheme;

use crate::accessor::Colors;
use crate::app::{App, PersistenceKind};
use crate::persistence::{
    AdapterState, CssPropertyTarget, CssVariablePersistence, KeyValuePersistence,
    PersistenceAdapter, RestoreOutcome, ThemePersistence,
};
use crate::storage::KeyValueStorage;
use crate::store::{initialize, ScopeHandle};

/// A mounted scope. Dropping it detaches persistence; outstanding handles keep
/// working but nothing is persisted any more.
#[derive(Debug)]
pub struct ColorProvider {
    app: App,
    handle: ScopeHandle,
    adapter: Option<PersistenceAdapter>,
    restore: Option<RestoreOutcome>,
}

pub struct ProviderBuilder {
    app: App,
    default_theme: ColorTheme,
    storage_key: String,
    persistence: Option<MakePersistence>,
}

/// Builds the persistence for a record key, deferred until mount.
type MakePersistence = Box<dyn FnOnce(&str) -> Box<dyn ThemePersistence>>;

impl ColorProvider {
    pub fn builder(app: App) -> ProviderBuilder {
        ProviderBuilder {
            app,
            default_theme: app.default_variant().default_theme(),
            storage_key: THEME_STORAGE_KEY.to_string(),
            persistence: None,
        }
    }

    /// Mounts `app` with no persistence.
    pub fn mount(app: App) -> Self {
        Self::builder(app).mount()
    }

    pub fn app(&self) -> App {
        self.app
    }

    pub fn handle(&self) -> &ScopeHandle {
        &self.handle
    }

    /// `{colors, setColors}` for this scope.
    pub fn access(&self) -> Colors {
        Colors {
            colors: self.handle.read(),
            set_colors: self.handle.setter(),
        }
    }

    pub fn adapter_state(&self) -> Option<AdapterState> {
        self.adapter.as_ref().map(PersistenceAdapter::state)
    }

    /// Outcome of the startup restore; `None` without persistence.
    pub fn restore_outcome(&self) -> Option<RestoreOutcome> {
        self.restore
    }

    pub fn persistence_backend(&self) -> Option<&'static str> {
        self.adapter.as_ref().map(PersistenceAdapter::backend)
    }

    /// Kind of the attached persistence, [`PersistenceKind::None`] without one.
    pub fn persistence_kind(&self) -> PersistenceKind {
        self.adapter
            .as_ref()
            .map_or(PersistenceKind::None, PersistenceAdapter::kind)
    }

    /// Whether the attached persistence is the one [`App::persistence_kind`] names.
    pub fn uses_app_persistence(&self) -> bool {
        self.persistence_kind() == self.app.persistence_kind()
    }
}

impl ProviderBuilder {
    /// Seed with `theme` instead of the app default.
    pub fn with_default_theme(mut self, theme: ColorTheme) -> Self {
        self.default_theme = theme;
        self
    }

    /// Record key for [`with_storage`](Self::with_storage). Defaults to `app-theme`.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Persist as one JSON record in `storage`, restored at mount.
    pub fn with_storage<S: KeyValueStorage + 'static>(mut self, storage: S) -> Self {
        self.persistence = Some(Box::new(move |key: &str| -> Box<dyn ThemePersistence> {
            Box::new(KeyValuePersistence::with_key(storage, key))
        }));
        self
    }

    /// Apply every slot as a CSS custom property on `target`.
    pub fn with_css_target<T: CssPropertyTarget + 'static>(mut self, target: T) -> Self {
        self.persistence = Some(Box::new(move |_: &str| -> Box<dyn ThemePersistence> {
            Box::new(CssVariablePersistence::new(target))
        }));
        self
    }

    /// Any other [`ThemePersistence`].
    pub fn with_persistence<P: ThemePersistence + 'static>(mut self, persistence: P) -> Self {
        self.persistence = Some(Box::new(move |_: &str| -> Box<dyn ThemePersistence> {
            Box::new(persistence)
        }));
        self
    }

    /// Creates the store, attaches persistence and runs the restore step.
    pub fn mount(self) -> ColorProvider {
        let handle = initialize(self.default_theme);
        let adapter = self
            .persistence
            .map(|make| PersistenceAdapter::attach(&handle, make(&self.storage_key)));
        let restore = adapter.as_ref().map(PersistenceAdapter::restore_once);
        tracing::debug!(
            app = %self.app,
            backend = adapter.as_ref().map(PersistenceAdapter::backend).unwrap_or("none"),
            restore = ?restore,
            "color provider mounted"
        );
        let provider = ColorProvider {
            app: self.app,
            handle,
            adapter,
            restore,
        };
        if !provider.uses_app_persistence() {
            tracing::debug!(
                app = %provider.app,
                expected = ?provider.app.persistence_kind(),
                attached = ?provider.persistence_kind(),
                "persistence differs from the app's own"
            );
        }
        provider
    }
}
