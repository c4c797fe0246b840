//! Open/closed flag shared between a dialog, its handle and its listeners.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Watcher = Rc<dyn Fn(bool)>;

/// Subscription token returned by [`OpenState::watch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchId(u64);

#[derive(Default)]
struct Inner {
    is_open: Cell<bool>,
    watchers: RefCell<Vec<(WatchId, Watcher)>>,
    next_watch: Cell<u64>,
}

/// A single "is open" flag.
///
/// Clones share the same flag. `open` and `close` are idempotent: watchers only
/// hear about real transitions.
#[derive(Clone, Default)]
pub struct OpenState {
    inner: Rc<Inner>,
}

impl OpenState {
    /// A new, closed state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open.get()
    }

    pub fn open(&self) {
        self.set(true);
    }

    pub fn close(&self) {
        self.set(false);
    }

    /// Current flag plus the `open` and `close` transitions.
    ///
    /// Transitions from repeated calls compare equal, so dependents keyed on
    /// them never see a spurious change.
    pub fn split(&self) -> (bool, Transition, Transition) {
        (
            self.is_open(),
            Transition {
                state: self.clone(),
                to: true,
            },
            Transition {
                state: self.clone(),
                to: false,
            },
        )
    }

    /// Call `f` with the new value after every transition.
    pub fn watch(&self, f: impl Fn(bool) + 'static) -> WatchId {
        let id = WatchId(self.inner.next_watch.get());
        self.inner.next_watch.set(id.0 + 1);
        self.inner.watchers.borrow_mut().push((id, Rc::new(f)));
        id
    }

    pub fn unwatch(&self, id: WatchId) -> bool {
        let mut watchers = self.inner.watchers.borrow_mut();
        let before = watchers.len();
        watchers.retain(|(watch, _)| *watch != id);
        watchers.len() != before
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn set(&self, value: bool) {
        if self.inner.is_open.replace(value) == value {
            return;
        }
        // Watchers may open/close or (un)subscribe while we iterate.
        let watchers: Vec<Watcher> = self
            .inner
            .watchers
            .borrow()
            .iter()
            .map(|(_, watcher)| watcher.clone())
            .collect();
        for watcher in watchers {
            watcher(value);
        }
    }
}

impl PartialEq for OpenState {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for OpenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenState")
            .field("is_open", &self.is_open())
            .finish()
    }
}

/// A stable `open` or `close` operation bound to one [`OpenState`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    state: OpenState,
    to: bool,
}

impl Transition {
    pub fn call(&self) {
        self.state.set(self.to);
    }

    /// The value this transition sets.
    pub fn target(&self) -> bool {
        self.to
    }
}
