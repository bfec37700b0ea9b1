//! Machine that owns one entity's current state.

use crate::core::{ChangeKind, Definition, StateChange, StateHistory};
use crate::engine::dispatch;
use crate::engine::error::TransitionError;
use crate::graph::GraphDescription;
use chrono::Utc;

/// State machine modelling a single entity over time.
///
/// The machine stores the current state and the context handed to every
/// guard and hook. All mutating calls take `&mut self`; to share one
/// instance between threads wrap it in a lock.
///
/// # Example
///
/// ```rust
/// use hookfsm::builder::MachineBuilder;
/// use hookfsm::engine::TransitionError;
///
/// let mut machine = MachineBuilder::new("order")
///     .add_states(["created", "paid", "cancelled"])?
///     .add_transition("created", "paid")?
///     .add_transition_guarded("paid", "cancelled", |refundable: &bool, _| Ok(*refundable))?
///     .build_owned(false);
///
/// machine.set_state("created")?;
/// machine.transit("paid")?;
///
/// let err = machine.transit("cancelled").unwrap_err();
/// assert!(matches!(err, TransitionError::GuardNotSatisfied { .. }));
/// assert_eq!(machine.current_state(), Some("paid"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Machine<C> {
    definition: Definition<C>,
    context: C,
    current: Option<String>,
    history: StateHistory,
}

impl<C> Machine<C> {
    /// Create a machine with no current state.
    pub fn new(definition: Definition<C>, context: C) -> Self {
        Self {
            definition,
            context,
            current: None,
            history: StateHistory::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn definition(&self) -> &Definition<C> {
        &self.definition
    }

    /// Current state, `None` until the first [`set_state`](Self::set_state).
    pub fn current_state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// States reachable from the current state in one step. Guards are not
    /// consulted.
    pub fn available_states(&self) -> Vec<&str> {
        match self.current.as_deref() {
            Some(current) => self.definition.available_states(current),
            None => Vec::new(),
        }
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    pub fn describe(&self) -> GraphDescription {
        GraphDescription::from_definition(&self.definition)
    }

    /// Jump to `state` without consulting transitions or guards.
    ///
    /// Used for initialization and administrative overrides. Hooks fire as
    /// for any accepted change.
    pub fn set_state(&mut self, state: &str) -> Result<(), TransitionError> {
        if !self.definition.has_state(state) {
            tracing::warn!(machine = %self.name(), %state, "state not defined");
            return Err(TransitionError::UnknownState {
                name: state.to_string(),
            });
        }

        let from = self.current.clone();
        self.change(from, state, ChangeKind::Forced);
        Ok(())
    }

    /// Move from the current state to `to` along a registered transition.
    pub fn transit(&mut self, to: &str) -> Result<(), TransitionError> {
        let Some(from) = self.current.clone() else {
            return Err(TransitionError::Uninitialized { to: to.to_string() });
        };

        dispatch::select(&self.definition, &self.context, &from, to)?;
        tracing::debug!(machine = %self.name(), %from, %to, "transit state");
        self.change(Some(from), to, ChangeKind::Transit);
        Ok(())
    }

    fn change(&mut self, from: Option<String>, to: &str, kind: ChangeKind) {
        let Self {
            definition,
            context,
            current,
            history,
        } = self;

        dispatch::apply(definition, context, from.as_deref(), to, || {
            *current = Some(to.to_string());
            history.push(StateChange {
                from: from.clone(),
                to: to.to_string(),
                kind,
                timestamp: Utc::now(),
            });
        });
    }
}
