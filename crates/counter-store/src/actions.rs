//! Counter actions
//!
//! Actions carry no payload. On the wire they look like `{ "type": "ADD" }`;
//! any `type` outside the known set becomes `CounterAction::Unknown` and is
//! passed through by the reducer untouched.

use serde::{Deserialize, Serialize};

/// Actions for the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    /// Increment the count by one
    Add,
    /// Decrement the count by one
    Subtract,
    /// Set the count back to zero
    Reset,
    /// Any action type this reducer does not know about
    #[serde(other)]
    Unknown,
}

impl CounterAction {
    /// The action's `type` discriminant
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Reset => "RESET",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Create an `ADD` action
pub fn add() -> CounterAction {
    CounterAction::Add
}

/// Create a `SUBTRACT` action
pub fn subtract() -> CounterAction {
    CounterAction::Subtract
}

/// Create a `RESET` action
pub fn reset() -> CounterAction {
    CounterAction::Reset
}
