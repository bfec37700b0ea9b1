//! Errors returned by runtime operations.

use crate::core::GuardError;
use thiserror::Error;

/// Errors that can occur while setting state or transiting.
///
/// Every variant leaves the machine's state unchanged.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("State '{name}' is not defined")]
    UnknownState { name: String },

    #[error("Transition from '{from}' to '{to}' not found")]
    TransitionNotFound { from: String, to: String },

    #[error("Transition '{from}->{to}' condition not met")]
    GuardNotSatisfied { from: String, to: String },

    /// The guard's own error, unchanged.
    #[error(transparent)]
    Guard(GuardError),

    #[error("Cannot transit to '{to}' before an initial state is set")]
    Uninitialized { to: String },
}

impl TransitionError {
    /// The guard error, if this failure came from a guard.
    pub fn guard_error(&self) -> Option<&GuardError> {
        match self {
            Self::Guard(err) => Some(err),
            _ => None,
        }
    }

    /// Consume the error, returning the guard's error if there is one.
    pub fn into_guard_error(self) -> Result<GuardError, Self> {
        match self {
            Self::Guard(err) => Ok(err),
            other => Err(other),
        }
    }
}
