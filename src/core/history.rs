//! State change history tracking.
//!
//! Provides immutable tracking of the state changes an owning machine has
//! accepted, in the order they were applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a state change was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Unconditional jump through `set_state`.
    Forced,
    /// Guarded move along a registered transition.
    Transit,
}

/// Record of a single accepted state change.
///
/// # Example
///
/// ```rust
/// use hookfsm::core::{ChangeKind, StateChange};
/// use chrono::Utc;
///
/// let change = StateChange {
///     from: Some("created".to_string()),
///     to: "paid".to_string(),
///     kind: ChangeKind::Transit,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(change.to, "paid");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    /// The state being left, `None` for the very first `set_state`.
    pub from: Option<String>,
    /// The state being entered
    pub to: String,
    pub kind: ChangeKind,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state changes.
///
/// History is immutable - `record` returns a new history with the change
/// added.
///
/// # Example
///
/// ```rust
/// use hookfsm::core::{ChangeKind, StateChange, StateHistory};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateChange {
///         from: None,
///         to: "created".to_string(),
///         kind: ChangeKind::Forced,
///         timestamp: Utc::now(),
///     })
///     .record(StateChange {
///         from: Some("created".to_string()),
///         to: "paid".to_string(),
///         kind: ChangeKind::Transit,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.path(), vec!["created", "paid"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    changes: Vec<StateChange>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, change: StateChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Get the path of states traversed.
    ///
    /// Starts with the `from` of the first change when there is one, then
    /// the `to` of every change.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(from) = self.changes.first().and_then(|c| c.from.as_deref()) {
            path.push(from);
        }
        for change in &self.changes {
            path.push(change.to.as_str());
        }
        path
    }

    /// Time between the first and last recorded change.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Append a change in place. Used by the owning machine, which holds the
    /// only copy of its history.
    pub(crate) fn push(&mut self, change: StateChange) {
        self.changes.push(change);
    }

    pub fn changes(&self) -> &[StateChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
