//! Errors raised while notifying store listeners

use thiserror::Error;

use crate::store::SubscriptionId;

/// Failure reported by a fallible listener
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by `Store::dispatch`
///
/// The new state is already in place when either variant is returned.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A listener failed and the remaining listeners were skipped.
    #[error("Listener {id} failed: {source}")]
    Listener {
        id: SubscriptionId,
        #[source]
        source: ListenerError,
    },

    /// One or more listeners failed; every other listener still ran.
    #[error("{} listener(s) failed during notification", .0.len())]
    Listeners(Vec<(SubscriptionId, ListenerError)>),
}

impl DispatchError {
    /// Ids of the listeners that failed
    pub fn failed_ids(&self) -> Vec<SubscriptionId> {
        match self {
            Self::Listener { id, .. } => vec![*id],
            Self::Listeners(failures) => failures.iter().map(|(id, _)| *id).collect(),
        }
    }
}
