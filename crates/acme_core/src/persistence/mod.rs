//! Persistence adapter: mirrors a store's theme to durable storage.
//!
//! The adapter has two states. While `Uninitialized` it ignores writes;
//! [`PersistenceAdapter::restore_once`] reads the stored record, pushes it into
//! the store, syncs the current value once and moves to `Active`, where every
//! committed write is persisted. Storage failures are logged and dropped; the
//! in-memory theme is never affected by them. A failed restore skips the sync,
//! so an unreadable record stays in place until the next real write.

mod css;
mod key_value;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use acme_types::ColorTheme;

use crate::app::PersistenceKind;
use crate::error::Result;
use crate::store::{ScopeHandle, Subscription};

pub use css::{render_root_css, CssPropertyTarget, CssVariablePersistence, StyleDeclaration};
pub use key_value::KeyValuePersistence;

/// A durable home for one theme.
pub trait ThemePersistence {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    fn kind(&self) -> PersistenceKind;

    /// `false` for write-only sinks; the adapter then skips the restore read.
    fn supports_restore(&self) -> bool {
        true
    }

    /// Stored theme, `Ok(None)` when nothing is stored.
    fn restore(&self) -> Result<Option<ColorTheme>>;

    fn persist(&self, theme: &ColorTheme) -> Result<()>;
}

impl<P: ThemePersistence + ?Sized> ThemePersistence for Box<P> {
    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    fn kind(&self) -> PersistenceKind {
        (**self).kind()
    }

    fn supports_restore(&self) -> bool {
        (**self).supports_restore()
    }

    fn restore(&self) -> Result<Option<ColorTheme>> {
        (**self).restore()
    }

    fn persist(&self, theme: &ColorTheme) -> Result<()> {
        (**self).persist(theme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    Uninitialized,
    Active,
}

/// What [`PersistenceAdapter::restore_once`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Stored theme was written into the store.
    Restored,
    /// Nothing stored; default kept.
    Absent,
    /// Read failed or the record was malformed; default kept.
    Failed,
    /// Backend is write-only.
    Unsupported,
    /// The store was written before restore ran; the newer value was kept.
    Superseded,
    /// Restore already ran for this adapter.
    AlreadyActive,
}

/// What one persist attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Persisted,
    /// Same value as the last restored or persisted one.
    Unchanged,
    /// Restore has not run yet.
    Inactive,
    Failed,
}

struct AdapterInner {
    persistence: Box<dyn ThemePersistence>,
    handle: ScopeHandle,
    state: Cell<AdapterState>,
    attached_at: u64,
    last_synced: RefCell<Option<ColorTheme>>,
}

/// Observes one store and writes its theme through to a [`ThemePersistence`].
/// Dropping the adapter detaches it from the store.
pub struct PersistenceAdapter {
    inner: Rc<AdapterInner>,
    _subscription: Subscription,
}

impl PersistenceAdapter {
    /// Subscribes to `handle`. Nothing is read or written until [`restore_once`](Self::restore_once).
    pub fn attach(handle: &ScopeHandle, persistence: impl ThemePersistence + 'static) -> Self {
        let inner = Rc::new(AdapterInner {
            persistence: Box::new(persistence),
            handle: handle.clone(),
            state: Cell::new(AdapterState::Uninitialized),
            attached_at: handle.revision(),
            last_synced: RefCell::new(None),
        });
        let weak: Weak<AdapterInner> = Rc::downgrade(&inner);
        let subscription = handle.subscribe(move |theme| {
            if let Some(inner) = weak.upgrade() {
                inner.persist_on_change(theme);
            }
        });
        Self {
            inner,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> AdapterState {
        self.inner.state.get()
    }

    pub fn backend(&self) -> &'static str {
        self.inner.persistence.backend()
    }

    pub fn kind(&self) -> PersistenceKind {
        self.inner.persistence.kind()
    }

    /// Runs the startup restore. Only the first call does anything.
    pub fn restore_once(&self) -> RestoreOutcome {
        self.inner.restore_once()
    }

    /// Persists `theme` now, subject to the state and duplicate checks.
    pub fn persist_on_change(&self, theme: &ColorTheme) -> PersistOutcome {
        self.inner.persist_on_change(theme)
    }

    /// Raw restore read, without logging or touching the store.
    pub fn try_restore(&self) -> Result<Option<ColorTheme>> {
        self.inner.persistence.restore()
    }

    /// Raw persist, without the state and duplicate checks.
    pub fn try_persist(&self, theme: &ColorTheme) -> Result<()> {
        self.inner.persistence.persist(theme)
    }
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("backend", &self.backend())
            .field("state", &self.state())
            .finish()
    }
}

impl AdapterInner {
    fn restore_once(&self) -> RestoreOutcome {
        if self.state.get() == AdapterState::Active {
            tracing::debug!(backend = self.persistence.backend(), "restore already ran");
            return RestoreOutcome::AlreadyActive;
        }

        let outcome = self.restore();
        self.state.set(AdapterState::Active);
        if outcome == RestoreOutcome::Failed {
            return outcome;
        }
        let current = self.handle.read();
        self.persist_on_change(&current);
        outcome
    }

    fn restore(&self) -> RestoreOutcome {
        let backend = self.persistence.backend();
        if !self.persistence.supports_restore() {
            return RestoreOutcome::Unsupported;
        }
        match self.persistence.restore() {
            Ok(Some(theme)) => {
                if self.handle.revision() != self.attached_at {
                    tracing::warn!(
                        backend,
                        "theme changed before restore finished; keeping the newer value"
                    );
                    return RestoreOutcome::Superseded;
                }
                *self.last_synced.borrow_mut() = Some(theme.clone());
                self.handle.write(theme);
                tracing::info!(backend, "restored saved theme");
                RestoreOutcome::Restored
            }
            Ok(None) => {
                tracing::info!(backend, "no saved theme; keeping default");
                RestoreOutcome::Absent
            }
            Err(e) => {
                tracing::warn!(backend, error = %e, "Error loading theme; keeping default");
                RestoreOutcome::Failed
            }
        }
    }

    fn persist_on_change(&self, theme: &ColorTheme) -> PersistOutcome {
        if self.state.get() != AdapterState::Active {
            return PersistOutcome::Inactive;
        }
        if self.last_synced.borrow().as_ref() == Some(theme) {
            tracing::debug!(backend = self.persistence.backend(), "theme unchanged; skipping persist");
            return PersistOutcome::Unchanged;
        }
        match self.persistence.persist(theme) {
            Ok(()) => {
                *self.last_synced.borrow_mut() = Some(theme.clone());
                PersistOutcome::Persisted
            }
            Err(e) => {
                tracing::warn!(
                    backend = self.persistence.backend(),
                    error = %e,
                    "Error saving theme"
                );
                PersistOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use acme_constant::{app::THEME_STORAGE_KEY, theme};

    use super::*;
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use crate::store::initialize;

    fn mobile_adapter(storage: &Rc<MemoryStorage>) -> (ScopeHandle, PersistenceAdapter) {
        let handle = initialize(theme::mobile_light());
        let adapter = PersistenceAdapter::attach(&handle, KeyValuePersistence::new(Rc::clone(storage)));
        (handle, adapter)
    }

    #[test]
    fn test_restore_pushes_saved_theme() {
        let saved = serde_json::to_string(&theme::mobile_dark()).unwrap();
        let storage = Rc::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, saved));
        let (handle, adapter) = mobile_adapter(&storage);

        assert_eq!(adapter.state(), AdapterState::Uninitialized);
        assert_eq!(adapter.restore_once(), RestoreOutcome::Restored);
        assert_eq!(adapter.state(), AdapterState::Active);
        assert_eq!(handle.read(), theme::mobile_dark());
        // restored value is not written straight back
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_absent_record_keeps_default_and_seeds_storage() {
        let storage = Rc::new(MemoryStorage::new());
        let (handle, adapter) = mobile_adapter(&storage);
        assert_eq!(adapter.restore_once(), RestoreOutcome::Absent);
        assert_eq!(handle.read(), theme::mobile_light());
        assert_eq!(storage.writes(), 1);
        assert!(storage.get(THEME_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_malformed_record_keeps_default() {
        let storage = Rc::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "{\"background\":\"#000"));
        let (handle, adapter) = mobile_adapter(&storage);
        assert!(adapter.try_restore().is_err());
        assert_eq!(adapter.restore_once(), RestoreOutcome::Failed);
        assert_eq!(handle.read(), theme::mobile_light());
        assert_eq!(storage.writes(), 0);
        assert_eq!(
            storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("{\"background\":\"#000")
        );
    }

    #[test]
    fn test_restore_runs_once() {
        let storage = Rc::new(MemoryStorage::new());
        let (_handle, adapter) = mobile_adapter(&storage);
        assert_eq!(adapter.restore_once(), RestoreOutcome::Absent);
        assert_eq!(adapter.restore_once(), RestoreOutcome::AlreadyActive);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_writes_before_restore_are_not_persisted() {
        let storage = Rc::new(MemoryStorage::new());
        let (handle, adapter) = mobile_adapter(&storage);
        handle.write(theme::admin());
        assert_eq!(storage.writes(), 0);
        assert_eq!(adapter.persist_on_change(&theme::admin()), PersistOutcome::Inactive);
    }

    #[test]
    fn test_user_edit_before_restore_wins() {
        let saved = serde_json::to_string(&theme::mobile_dark()).unwrap();
        let storage = Rc::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, saved));
        let (handle, adapter) = mobile_adapter(&storage);
        handle.write(theme::admin());

        assert_eq!(adapter.restore_once(), RestoreOutcome::Superseded);
        assert_eq!(handle.read(), theme::admin());
        let stored: ColorTheme =
            serde_json::from_str(&storage.get(THEME_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, theme::admin());
    }

    #[test]
    fn test_every_write_persists_once() {
        let storage = Rc::new(MemoryStorage::new());
        let (handle, adapter) = mobile_adapter(&storage);
        adapter.restore_once();
        let base = storage.writes();

        handle.write(theme::mobile_dark());
        handle.write(theme::mobile_dark());
        handle.update(|t| t.ring = "#FF0000".into());
        assert_eq!(storage.writes(), base + 2);

        let stored: ColorTheme =
            serde_json::from_str(&storage.get(THEME_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, handle.read());
    }

    #[test]
    fn test_write_failure_leaves_store_intact() {
        let storage = Rc::new(MemoryStorage::new());
        let (handle, adapter) = mobile_adapter(&storage);
        adapter.restore_once();
        storage.set_fail_writes(true);

        handle.write(theme::mobile_dark());
        assert_eq!(handle.read(), theme::mobile_dark());
        assert_eq!(adapter.persist_on_change(&theme::admin()), PersistOutcome::Failed);
        assert!(adapter.try_persist(&theme::admin()).is_err());

        // next write after recovery goes through
        storage.set_fail_writes(false);
        handle.write(theme::user());
        let stored: ColorTheme =
            serde_json::from_str(&storage.get(THEME_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, theme::user());
    }

    #[test]
    fn test_read_failure_is_swallowed() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_fail_reads(true);
        let (handle, adapter) = mobile_adapter(&storage);
        assert_eq!(adapter.restore_once(), RestoreOutcome::Failed);
        assert_eq!(adapter.state(), AdapterState::Active);
        assert_eq!(handle.read(), theme::mobile_light());
    }

    #[test]
    fn test_read_failure_keeps_saved_record() {
        let saved = serde_json::to_string(&theme::mobile_dark()).unwrap();
        let storage = Rc::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, saved));
        storage.set_fail_reads(true);
        let (handle, adapter) = mobile_adapter(&storage);

        assert_eq!(adapter.restore_once(), RestoreOutcome::Failed);
        assert_eq!(handle.read(), theme::mobile_light());
        assert_eq!(storage.writes(), 0);

        storage.set_fail_reads(false);
        let stored: ColorTheme =
            serde_json::from_str(&storage.get(THEME_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, theme::mobile_dark());

        // a later edit is still persisted
        handle.write(theme::admin());
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_dropping_adapter_detaches() {
        let storage = Rc::new(MemoryStorage::new());
        let (handle, adapter) = mobile_adapter(&storage);
        adapter.restore_once();
        assert_eq!(handle.observer_count(), 1);
        drop(adapter);
        assert_eq!(handle.observer_count(), 0);
        let writes = storage.writes();
        handle.write(theme::admin());
        assert_eq!(storage.writes(), writes);
    }
}
