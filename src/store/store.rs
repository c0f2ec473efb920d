use std::any::Any;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

type Listener = Arc<dyn Fn() + Send + Sync>;
type Registry = RwLock<Vec<(u64, Listener)>>;

/// A single write request against a [`Store`].
///
/// A write either replaces the state wholesale or derives the next state from
/// the prior one. Carrying the distinction in the type keeps the write path
/// free of any runtime inspection of what it was handed.
pub enum Update<T> {
    /// Commit this value as the next state.
    Replace(T),
    /// Compute the next state from the prior committed state.
    ///
    /// The function must be a pure `T -> T`; it is called exactly once per
    /// write and receives the immediately-prior committed state.
    Apply(Box<dyn FnOnce(T) -> T>),
}

impl<T> Update<T> {
    /// Wrap a functional update.
    pub fn apply<F>(f: F) -> Self
    where
        F: FnOnce(T) -> T + 'static,
    {
        Update::Apply(Box::new(f))
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Update::Replace(value)
    }
}

/// An external state container with a listener registry.
///
/// A store owns exactly one piece of shared mutable state. Writes commit
/// synchronously and then notify every registered listener before returning;
/// listeners take no arguments and read fresh state back through the store.
///
/// Cloning a `Store` produces another handle to the same state cell and
/// listener registry.
pub struct Store<T> {
    state: Arc<RwLock<T>>,
    listeners: Arc<Registry>,
    next_token: Arc<AtomicU64>,
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Create a new store seeded with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            listeners: Arc::new(RwLock::new(Vec::new())),
            next_token: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the current committed state.
    pub fn get_state(&self) -> T {
        self.state.read().unwrap().clone()
    }

    /// Read the state through a borrow without cloning.
    ///
    /// Does not notify anyone and must not re-enter the store from `f`.
    pub fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Commit an update and notify every registered listener.
    ///
    /// The functional form is resolved before anything is committed: if the
    /// updater panics, the panic reaches the caller and the store is left at
    /// its prior state. No equality check is made against the prior state;
    /// every commit notifies, equal or not.
    pub fn set_state(&self, update: impl Into<Update<T>>) {
        let next = match update.into() {
            Update::Replace(value) => value,
            Update::Apply(f) => f(self.get_state()),
        };
        self.commit(next);
    }

    /// Replace the state with a new value.
    pub fn set(&self, value: T) {
        self.commit(value);
    }

    /// Update the state with a pure function of the prior state.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        let next = f(self.get_state());
        self.commit(next);
    }

    /// Register a listener to run after every committed write.
    ///
    /// Each call is its own registration under a fresh token, so subscribing
    /// the same closure twice yields two independent registrations. The
    /// returned [`Subscription`] removes exactly this registration.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let token = self.next_token.fetch_add(1, Ordering::SeqCst);
        self.listeners
            .write()
            .unwrap()
            .push((token, Arc::new(listener)));
        Subscription {
            registry: Arc::downgrade(&self.listeners),
            token,
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().unwrap().len()
    }

    fn commit(&self, next: T) {
        *self.state.write().unwrap() = next;
        self.notify();
    }

    /// Run every listener registered at the start of the pass, in insertion
    /// order.
    ///
    /// The pass iterates a snapshot of the registry with the lock released, so
    /// a listener may subscribe, unsubscribe, or write re-entrantly without
    /// skipping or double-invoking an unrelated listener. A panicking listener
    /// does not stop the pass; the first panic payload is re-raised to the
    /// writer once the pass completes.
    fn notify(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .read()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        let mut panicked: Option<Box<dyn Any + Send>> = None;
        for listener in snapshot {
            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| listener())) {
                panicked.get_or_insert(payload);
            }
        }
        if let Some(payload) = panicked {
            resume_unwind(payload);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
            next_token: Arc::clone(&self.next_token),
        }
    }
}

/// Detachment handle returned by [`Store::subscribe`].
///
/// Removal is explicit only: dropping a `Subscription` leaves its listener
/// registered. `unsubscribe` may be called any number of times; all calls
/// after the first are no-ops.
pub struct Subscription {
    registry: Weak<Registry>,
    token: u64,
}

impl Subscription {
    /// Remove this registration from the store. Idempotent.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .write()
                .unwrap()
                .retain(|(token, _)| *token != self.token);
        }
    }

    /// Whether this registration is still present in the store.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| {
                registry
                    .read()
                    .unwrap()
                    .iter()
                    .any(|(token, _)| *token == self.token)
            })
            .unwrap_or(false)
    }
}
