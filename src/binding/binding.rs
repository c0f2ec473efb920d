use crate::store::{Store, Subscription};
use std::sync::{Arc, RwLock};

/// A per-consumer adapter between a [`Store`] and a single UI consumer.
///
/// On attachment the binding projects the store's current state through its
/// selector and keeps the result as the consumer's observed value. It then
/// listens to the store: every committed write recomputes the projection
/// against fresh state, and only when the recomputed value differs from the
/// last observed one does the binding store it and invoke the host's
/// re-render hook. Unrelated slices of a composite state can therefore change
/// freely without re-rendering this consumer.
///
/// The comparison is the host layer's shallow one (`PartialEq` on the
/// projected value); the binding performs no deep equality and no
/// memoization. Keeping projections referentially stable for unrelated
/// changes is the selector author's job.
///
/// A binding moves through three states: attached on construction, updated in
/// place on store notifications, and detached terminally via [`detach`].
/// Replacing the store or the selector means detaching and constructing a new
/// binding; there is no way back from detached.
///
/// [`detach`]: Binding::detach
pub struct Binding<T, U> {
    store: Store<T>,
    observed: Arc<RwLock<U>>,
    subscription: Subscription,
}

impl<T, U> Binding<T, U>
where
    T: Clone + Send + Sync + 'static,
    U: Clone + PartialEq + Send + Sync + 'static,
{
    /// Attach a consumer to `store` through `selector`.
    ///
    /// `selector` must be a pure projection of the state; it runs once here
    /// against the current state and then once per store notification. If it
    /// panics during this initial projection the panic reaches the caller and
    /// nothing is registered. `notify` is the host's re-render hook, invoked
    /// after the observed value changes.
    pub fn attach<S, N>(store: &Store<T>, selector: S, notify: N) -> Self
    where
        S: Fn(&T) -> U + Send + Sync + 'static,
        N: Fn() + Send + Sync + 'static,
    {
        // Project against a clone so a panicking selector never unwinds
        // through a store lock.
        let current = store.get_state();
        let observed = Arc::new(RwLock::new(selector(&current)));

        let subscription = store.subscribe({
            let store = store.clone();
            let observed = Arc::clone(&observed);
            move || {
                let next = selector(&store.get_state());
                let changed = {
                    let mut slot = observed.write().unwrap();
                    if *slot != next {
                        *slot = next;
                        true
                    } else {
                        false
                    }
                };
                if changed {
                    notify();
                }
            }
        });

        Self {
            store: store.clone(),
            observed,
            subscription,
        }
    }

    /// The last observed projected value.
    ///
    /// Stays readable after [`detach`](Binding::detach); a detached binding
    /// simply stops receiving updates.
    pub fn value(&self) -> U {
        self.observed.read().unwrap().clone()
    }

    /// The store this binding was attached to.
    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    /// Stop listening to the store. Idempotent and terminal; re-attaching
    /// means constructing a new binding.
    pub fn detach(&self) {
        self.subscription.unsubscribe();
    }

    /// Whether the binding is still registered with the store.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }
}

impl<T> Binding<T, T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Attach with the identity projection: the consumer observes the whole
    /// state.
    pub fn identity<N>(store: &Store<T>, notify: N) -> Self
    where
        N: Fn() + Send + Sync + 'static,
    {
        Self::attach(store, |state: &T| state.clone(), notify)
    }
}

/// Create a binding from `store` through `selector`.
///
/// Free-function form of [`Binding::attach`].
///
/// # Example
///
/// ```
/// use tether::{create_binding, Store};
///
/// #[derive(Clone, PartialEq)]
/// struct State {
///     count: i32,
///     text: String,
/// }
///
/// let store = Store::new(State { count: 0, text: "hi".into() });
/// let count = create_binding(&store, |state: &State| state.count, || {});
///
/// store.update(|mut state| {
///     state.count += 1;
///     state
/// });
/// assert_eq!(count.value(), 1);
/// ```
pub fn create_binding<T, U, S, N>(store: &Store<T>, selector: S, notify: N) -> Binding<T, U>
where
    T: Clone + Send + Sync + 'static,
    U: Clone + PartialEq + Send + Sync + 'static,
    S: Fn(&T) -> U + Send + Sync + 'static,
    N: Fn() + Send + Sync + 'static,
{
    Binding::attach(store, selector, notify)
}
