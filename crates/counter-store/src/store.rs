use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, ListenerError};

type Reducer<S, A> = Box<dyn Fn(Rc<S>, &A) -> Rc<S>>;
type Listener = Rc<dyn Fn() -> Result<(), ListenerError>>;

/// Token identifying one registration made by `Store::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What `dispatch` does when a listener reports a failure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotifyPolicy {
    /// Stop at the first failing listener and return its error
    #[default]
    FailFast,
    /// Keep notifying the remaining listeners and return every failure
    Isolate,
}

/// Ordered listener registry
///
/// Ids are handed out monotonically, so iterating the map visits listeners
/// in subscription order.
#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<SubscriptionId, Listener>,
}

impl Registry {
    fn insert(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    fn snapshot(&self) -> Vec<(SubscriptionId, Listener)> {
        self.listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect()
    }
}

/// Store - holds application state and manages the Redux loop
///
/// The Store follows the Redux pattern:
/// - A single state value, replaced (never mutated) on each action
/// - Actions are dispatched to produce the next state
/// - A pure reducer handles state transitions
/// - Listeners are notified after every dispatch, in subscription order
///
/// All methods take `&self`, so a store can be shared through `Rc` and
/// listeners may read the state, subscribe, unsubscribe or dispatch again
/// while they are being notified.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use counter_store::{add, reduce, CounterState, Store};
///
/// let store = Rc::new(Store::new(reduce, CounterState::initial()));
///
/// // A weak handle keeps the listener from holding the store alive
/// let handle = Rc::downgrade(&store);
/// store.subscribe(move || {
///     if let Some(store) = handle.upgrade() {
///         println!("Count: {}", store.get_state().count);
///     }
/// });
///
/// store.dispatch(add()).unwrap();
/// assert_eq!(store.get_state().count, 1);
///
/// // The listener did not keep a strong reference
/// assert_eq!(Rc::strong_count(&store), 1);
/// ```
pub struct Store<S, A> {
    state: RefCell<Rc<S>>,
    reducer: Reducer<S, A>,
    listeners: Rc<RefCell<Registry>>,
    policy: NotifyPolicy,
}

impl<S: 'static, A: fmt::Debug + 'static> Store<S, A> {
    /// Create a new store with a reducer and initial state
    pub fn new(reducer: impl Fn(Rc<S>, &A) -> Rc<S> + 'static, initial_state: S) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial_state)),
            reducer: Box::new(reducer),
            listeners: Rc::new(RefCell::new(Registry::default())),
            policy: NotifyPolicy::default(),
        }
    }

    /// Choose how listener failures are handled
    pub fn with_policy(mut self, policy: NotifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    /// Get the current state
    pub fn get_state(&self) -> Rc<S> {
        Rc::clone(&self.state.borrow())
    }

    /// Run the reducer, replace the state, then notify every listener
    ///
    /// Listeners always run, even when the reducer returned the same state.
    /// The set of listeners is fixed when notification starts: registrations
    /// added or removed by a listener take effect on the next dispatch.
    ///
    /// A failing listener never rolls back the state replacement. See
    /// `NotifyPolicy` for what happens to the remaining listeners.
    pub fn dispatch(&self, action: A) -> Result<(), DispatchError> {
        log::debug!("Action: {:?}", action);

        let next = (self.reducer)(self.get_state(), &action);
        *self.state.borrow_mut() = next;

        self.notify()
    }

    /// Register a listener called after every dispatch
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.try_subscribe(move || {
            listener();
            Ok(())
        })
    }

    /// Register a listener that may report a failure back to `dispatch`
    pub fn try_subscribe(
        &self,
        listener: impl Fn() -> Result<(), ListenerError> + 'static,
    ) -> Subscription {
        let id = self.listeners.borrow_mut().insert(Rc::new(listener));
        log::trace!("Subscribed listener {}", id);

        Subscription {
            id,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of live registrations
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().listeners.len()
    }

    fn notify(&self) -> Result<(), DispatchError> {
        // Released before any listener runs so listeners can re-enter the store
        let snapshot = self.listeners.borrow().snapshot();

        let mut failures = Vec::new();
        for (id, listener) in snapshot {
            let Err(source) = listener() else {
                continue;
            };

            match self.policy {
                NotifyPolicy::FailFast => {
                    log::error!("Listener {} failed, skipping the rest: {}", id, source);
                    return Err(DispatchError::Listener { id, source });
                }
                NotifyPolicy::Isolate => {
                    log::warn!("Listener {} failed: {}", id, source);
                    failures.push((id, source));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::Listeners(failures))
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state.borrow())
            .field("listeners", &self.listeners.borrow().listeners.len())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Handle returned by `Store::subscribe`
///
/// Dropping the handle keeps the listener registered.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove exactly this registration
    ///
    /// Returns `false` when it was already removed or the store is gone.
    pub fn unsubscribe(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };

        let removed = registry.borrow_mut().listeners.remove(&self.id).is_some();
        if removed {
            log::trace!("Unsubscribed listener {}", self.id);
        }
        removed
    }
}
