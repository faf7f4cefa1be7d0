//! Redux-style state container for a single counter
//!
//! This crate provides:
//! - Counter actions and their constructors
//! - The pure counter reducer
//! - A generic `Store` holding one state value, one reducer and an ordered
//!   set of change listeners

pub mod actions;
pub mod error;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::{add, reset, subtract, CounterAction};
pub use error::{DispatchError, ListenerError};
pub use reducer::{reduce, reduce_or_init};
pub use state::CounterState;
pub use store::{NotifyPolicy, Store, Subscription, SubscriptionId};

/// Store specialised for the counter reducer
pub type CounterStore = Store<CounterState, CounterAction>;

/// Create a counter store starting from `initial`
pub fn counter_store(initial: CounterState) -> CounterStore {
    Store::new(reduce, initial)
}
