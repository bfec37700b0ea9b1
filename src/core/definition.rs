//! The immutable description of a machine: states, transitions and hooks.

use super::guard::Guard;
use super::hook::HookRef;
use super::state::{StateNode, StateRegistry};
use super::transition::{Transition, TransitionTable};
use crate::builder::{BuildError, HookOrder, MachineConfig};
use std::fmt;
use std::sync::Arc;

/// States, transitions and hooks shared by both engine variants.
///
/// A definition is assembled through [`MachineBuilder`](crate::builder::MachineBuilder)
/// and is read-only once a machine has been built from it.
pub struct Definition<C> {
    config: MachineConfig,
    states: StateRegistry<C>,
    transitions: TransitionTable<C>,
    global_enter: Option<HookRef<C>>,
    global_exit: Option<HookRef<C>>,
}

impl<C> Definition<C> {
    pub(crate) fn new(config: MachineConfig) -> Self {
        Self {
            config,
            states: StateRegistry::new(),
            transitions: TransitionTable::new(),
            global_enter: None,
            global_exit: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn hook_order(&self) -> HookOrder {
        self.config.hook_order
    }

    pub fn states(&self) -> &StateRegistry<C> {
        &self.states
    }

    pub fn transitions(&self) -> &TransitionTable<C> {
        &self.transitions
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains(name)
    }

    pub fn state(&self, name: &str) -> Option<&StateNode<C>> {
        self.states.get(name)
    }

    /// Outgoing edges of `state`, without evaluating guards.
    pub fn transitions_from<'a, 's>(
        &'a self,
        state: &'s str,
    ) -> impl Iterator<Item = &'a Transition<C>> + 's
    where
        'a: 's,
    {
        self.transitions.transitions_from(state)
    }

    pub fn find(&self, from: &str, to: &str) -> Option<&Transition<C>> {
        self.transitions.find(from, to)
    }

    /// Names reachable from `state` in one step, in transition-registration
    /// order. Guards are not consulted.
    pub fn available_states(&self, state: &str) -> Vec<&str> {
        self.transitions_from(state).map(|t| t.to.as_str()).collect()
    }

    pub fn global_enter_hook(&self) -> Option<&HookRef<C>> {
        self.global_enter.as_ref()
    }

    pub fn global_exit_hook(&self) -> Option<&HookRef<C>> {
        self.global_exit.as_ref()
    }

    pub(crate) fn add_state(&mut self, name: impl Into<String>) -> Result<(), BuildError> {
        let name = name.into();
        self.states.add(name.as_str())?;
        tracing::debug!(machine = %self.config.name, state = %name, "state registered");
        Ok(())
    }

    pub(crate) fn add_transition(
        &mut self,
        from: &str,
        to: &str,
        guard: Option<Arc<dyn Guard<C>>>,
    ) -> Result<(), BuildError> {
        for endpoint in [from, to] {
            if !self.states.contains(endpoint) {
                return Err(BuildError::UnknownState {
                    name: endpoint.to_string(),
                });
            }
        }

        let transition = Transition::new(from, to, guard);
        let key = transition.key.clone();
        if self.transitions.insert(transition) {
            tracing::debug!(machine = %self.config.name, transition = %key, "transition registered");
        } else {
            tracing::warn!(
                machine = %self.config.name,
                %from,
                %to,
                "skipped adding transition, it already exists"
            );
        }
        Ok(())
    }

    pub(crate) fn set_enter_hook(&mut self, state: &str, hook: HookRef<C>) -> Result<(), BuildError> {
        self.states.set_enter_hook(state, hook)
    }

    pub(crate) fn set_exit_hook(&mut self, state: &str, hook: HookRef<C>) -> Result<(), BuildError> {
        self.states.set_exit_hook(state, hook)
    }

    pub(crate) fn set_global_enter_hook(&mut self, hook: HookRef<C>) {
        self.global_enter = Some(hook);
    }

    pub(crate) fn set_global_exit_hook(&mut self, hook: HookRef<C>) {
        self.global_exit = Some(hook);
    }
}

impl<C> fmt::Debug for Definition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("config", &self.config)
            .field("states", &self.states)
            .field("transitions", &self.transitions)
            .field("global_enter", &self.global_enter.is_some())
            .field("global_exit", &self.global_exit.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> Definition<()> {
        let mut def = Definition::new(MachineConfig::named("order"));
        for state in ["created", "paid", "cancelled"] {
            def.add_state(state).unwrap();
        }
        def
    }

    #[test]
    fn transition_requires_registered_endpoints() {
        let mut def = definition();

        let missing_to = def.add_transition("created", "shipped", None);
        let missing_from = def.add_transition("shipped", "created", None);

        assert!(matches!(missing_to, Err(BuildError::UnknownState { ref name }) if name == "shipped"));
        assert!(matches!(missing_from, Err(BuildError::UnknownState { ref name }) if name == "shipped"));
        assert!(def.transitions().is_empty());
    }

    #[test]
    fn duplicate_transition_is_not_an_error() {
        let mut def = definition();

        def.add_transition("created", "paid", None).unwrap();
        def.add_transition("created", "paid", None).unwrap();

        assert_eq!(def.transitions().len(), 1);
    }

    #[test]
    fn available_states_ignore_guards() {
        let mut def = definition();
        let deny: Arc<dyn Guard<()>> =
            Arc::new(crate::core::FnGuard::new(|_: &(), _: &str| Ok(false)));

        def.add_transition("created", "paid", None).unwrap();
        def.add_transition("created", "cancelled", Some(deny)).unwrap();

        assert_eq!(def.available_states("created"), vec!["paid", "cancelled"]);
        assert!(def.available_states("paid").is_empty());
    }
}
