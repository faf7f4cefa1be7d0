//! Counter State

use serde::{Deserialize, Serialize};

/// State held by the counter store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    /// Create a state with the given count
    pub fn new(count: i64) -> Self {
        Self { count }
    }

    /// The state a fresh store starts with (`count = 0`)
    pub fn initial() -> Self {
        Self::default()
    }
}
