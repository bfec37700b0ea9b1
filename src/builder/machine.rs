//! Builder for constructing state machines.

use crate::builder::config::MachineConfig;
use crate::builder::error::BuildError;
use crate::core::{Definition, FnGuard, Guard, GuardError};
use crate::engine::{Machine, SharedMachine};
use std::sync::Arc;

/// Fluent builder for a machine definition.
///
/// States must be registered before transitions or hooks refer to them.
/// Registration errors are returned, never panicked on.
///
/// # Example
///
/// ```rust
/// use hookfsm::builder::MachineBuilder;
///
/// let mut machine = MachineBuilder::<()>::new("door")
///     .add_states(["closed", "open"])?
///     .add_transition("closed", "open")?
///     .add_transition("open", "closed")?
///     .build_owned(());
///
/// machine.set_state("closed")?;
/// machine.transit("open")?;
/// assert_eq!(machine.current_state(), Some("open"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct MachineBuilder<C> {
    definition: Definition<C>,
}

impl<C> MachineBuilder<C> {
    /// Create a builder with default configuration and the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(MachineConfig::named(name))
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            definition: Definition::new(config),
        }
    }

    /// Register a state. Fails if the name is taken.
    pub fn add_state(mut self, name: impl Into<String>) -> Result<Self, BuildError> {
        self.definition.add_state(name)?;
        Ok(self)
    }

    /// Register several states in order, stopping at the first duplicate.
    pub fn add_states<I, S>(mut self, names: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.definition.add_state(name)?;
        }
        Ok(self)
    }

    /// Add an unguarded transition.
    ///
    /// Both endpoints must be registered. Adding an existing `(from, to)`
    /// again is a no-op.
    pub fn add_transition(mut self, from: &str, to: &str) -> Result<Self, BuildError> {
        self.definition.add_transition(from, to, None)?;
        Ok(self)
    }

    /// Add a transition guarded by a closure or function.
    ///
    /// The guard's label (used in graph exports) is its type name. Use
    /// [`add_transition_with_guard`](Self::add_transition_with_guard) with
    /// [`guard::named`](crate::core::guard::named) to choose the label.
    pub fn add_transition_guarded<F>(self, from: &str, to: &str, guard: F) -> Result<Self, BuildError>
    where
        F: Fn(&C, &str) -> Result<bool, GuardError> + Send + Sync + 'static,
    {
        self.add_transition_with_guard(from, to, FnGuard::new(guard))
    }

    /// Add a transition guarded by any [`Guard`] implementation.
    pub fn add_transition_with_guard<G>(
        mut self,
        from: &str,
        to: &str,
        guard: G,
    ) -> Result<Self, BuildError>
    where
        G: Guard<C> + 'static,
    {
        let guard: Arc<dyn Guard<C>> = Arc::new(guard);
        self.definition.add_transition(from, to, Some(guard))?;
        Ok(self)
    }

    /// Set the enter hook of a registered state, replacing any earlier one.
    pub fn set_state_enter_hook<F>(mut self, state: &str, hook: F) -> Result<Self, BuildError>
    where
        F: Fn(&mut C, &str) + Send + Sync + 'static,
    {
        self.definition.set_enter_hook(state, Arc::new(hook))?;
        Ok(self)
    }

    /// Set the exit hook of a registered state, replacing any earlier one.
    pub fn set_state_exit_hook<F>(mut self, state: &str, hook: F) -> Result<Self, BuildError>
    where
        F: Fn(&mut C, &str) + Send + Sync + 'static,
    {
        self.definition.set_exit_hook(state, Arc::new(hook))?;
        Ok(self)
    }

    /// Set the machine-wide enter hook. It fires for every state, including
    /// states registered after this call.
    pub fn set_global_enter_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut C, &str) + Send + Sync + 'static,
    {
        self.definition.set_global_enter_hook(Arc::new(hook));
        self
    }

    /// Set the machine-wide exit hook.
    pub fn set_global_exit_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut C, &str) + Send + Sync + 'static,
    {
        self.definition.set_global_exit_hook(Arc::new(hook));
        self
    }

    /// Finish construction and return the bare definition.
    pub fn build(self) -> Definition<C> {
        self.definition
    }

    /// Build an owning machine bound to `context`. Call
    /// [`Machine::set_state`] before the first transit.
    pub fn build_owned(self, context: C) -> Machine<C> {
        Machine::new(self.definition, context)
    }

    /// Build a shared machine.
    pub fn build_shared(self) -> SharedMachine<C> {
        SharedMachine::new(self.definition)
    }
}
