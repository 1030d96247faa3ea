//! Theme store: one current [`ColorTheme`] per scope, replaced through a setter.
//!
//! [`initialize`] creates a store and returns its [`ScopeHandle`]. Clones of
//! the handle share the store; separately initialized stores are independent.
//! Handles are `!Send`: all reads and writes happen on the owning thread.
//!
//! Observers run after each write is committed, once per write, in write
//! order. A write issued from inside an observer is committed immediately and
//! its notifications are queued behind the ones in flight.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use acme_types::ColorTheme;

type Observer = Rc<dyn Fn(&ColorTheme)>;

struct StoreState {
    current: RefCell<ColorTheme>,
    revision: Cell<u64>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_observer_id: Cell<u64>,
    pending: RefCell<VecDeque<ColorTheme>>,
    notifying: Cell<bool>,
}

/// Creates a store seeded with `default_theme`.
pub fn initialize(default_theme: ColorTheme) -> ScopeHandle {
    ScopeHandle {
        state: Rc::new(StoreState {
            current: RefCell::new(default_theme),
            revision: Cell::new(0),
            observers: RefCell::new(Vec::new()),
            next_observer_id: Cell::new(0),
            pending: RefCell::new(VecDeque::new()),
            notifying: Cell::new(false),
        }),
    }
}

/// Shared handle to one store.
#[derive(Clone)]
pub struct ScopeHandle {
    state: Rc<StoreState>,
}

impl ScopeHandle {
    /// Latest committed theme.
    pub fn read(&self) -> ColorTheme {
        self.state.current.borrow().clone()
    }

    /// Runs `f` on a snapshot of the current theme. `f` may write through this handle.
    pub fn with_colors<R>(&self, f: impl FnOnce(&ColorTheme) -> R) -> R {
        let snapshot = self.read();
        f(&snapshot)
    }

    /// Replaces the current theme and notifies observers.
    pub fn write(&self, theme: ColorTheme) {
        *self.state.current.borrow_mut() = theme.clone();
        let revision = self.state.revision.get() + 1;
        self.state.revision.set(revision);
        tracing::debug!(revision, "theme committed");

        self.state.pending.borrow_mut().push_back(theme);
        if self.state.notifying.replace(true) {
            return;
        }
        let _notifying = NotifyGuard(&self.state);
        while let Some(committed) = self.next_pending() {
            for observer in self.observers() {
                observer(&committed);
            }
        }
    }

    /// Read-modify-write on the current theme.
    pub fn update(&self, f: impl FnOnce(&mut ColorTheme)) {
        let mut theme = self.read();
        f(&mut theme);
        self.write(theme);
    }

    /// Number of writes committed since [`initialize`].
    pub fn revision(&self) -> u64 {
        self.state.revision.get()
    }

    /// Registers `observer` for every later write. Dropping the subscription removes it.
    #[must_use = "dropping the subscription unregisters the observer"]
    pub fn subscribe(&self, observer: impl Fn(&ColorTheme) + 'static) -> Subscription {
        let id = self.state.next_observer_id.get();
        self.state.next_observer_id.set(id + 1);
        self.state
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        Subscription {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.state.observers.borrow().len()
    }

    /// Setter bound to this store.
    pub fn setter(&self) -> SetColors {
        SetColors::Scoped(self.clone())
    }

    /// Whether both handles point at the same store.
    pub fn same_scope(&self, other: &ScopeHandle) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn next_pending(&self) -> Option<ColorTheme> {
        self.state.pending.borrow_mut().pop_front()
    }

    fn observers(&self) -> Vec<Observer> {
        self.state
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect()
    }
}

/// Ends a notification pass, also when an observer unwinds.
struct NotifyGuard<'a>(&'a StoreState);

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.0.pending.borrow_mut().clear();
        self.0.notifying.set(false);
    }
}

impl fmt::Debug for ScopeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeHandle")
            .field("revision", &self.revision())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Keeps an observer registered. Dropping it (or calling [`cancel`](Self::cancel)) unregisters.
pub struct Subscription {
    state: Weak<StoreState>,
    id: u64,
}

impl Subscription {
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.observers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// The `setColors` half of an accessor result.
#[derive(Clone, Debug)]
pub enum SetColors {
    /// Writes through to a store.
    Scoped(ScopeHandle),
    /// Fallback outside any scope; discards every call.
    Noop,
}

impl SetColors {
    pub fn set(&self, theme: ColorTheme) {
        match self {
            SetColors::Scoped(handle) => handle.write(theme),
            SetColors::Noop => tracing::debug!("setColors called outside a scope; ignored"),
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, SetColors::Noop)
    }
}
