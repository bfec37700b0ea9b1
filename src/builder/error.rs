//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur while registering states, transitions and hooks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State '{name}' is already defined")]
    DuplicateState { name: String },

    #[error("State '{name}' is not defined")]
    UnknownState { name: String },
}
