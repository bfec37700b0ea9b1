//! Registered states and their hooks.

use super::hook::HookRef;
use crate::builder::BuildError;
use std::collections::HashMap;
use std::fmt;

/// A named state with optional enter and exit hooks.
pub struct StateNode<C> {
    name: String,
    enter: Option<HookRef<C>>,
    exit: Option<HookRef<C>>,
}

impl<C> StateNode<C> {
    fn new(name: String) -> Self {
        Self {
            name,
            enter: None,
            exit: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enter_hook(&self) -> Option<&HookRef<C>> {
        self.enter.as_ref()
    }

    pub fn exit_hook(&self) -> Option<&HookRef<C>> {
        self.exit.as_ref()
    }
}

impl<C> fmt::Debug for StateNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateNode")
            .field("name", &self.name)
            .field("enter", &self.enter.is_some())
            .field("exit", &self.exit.is_some())
            .finish()
    }
}

/// The set of valid states, in registration order.
pub struct StateRegistry<C> {
    states: Vec<StateNode<C>>,
    index: HashMap<String, usize>,
}

impl<C> StateRegistry<C> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a state with no hooks.
    pub fn add(&mut self, name: impl Into<String>) -> Result<(), BuildError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(BuildError::DuplicateState { name });
        }

        self.index.insert(name.clone(), self.states.len());
        self.states.push(StateNode::new(name));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&StateNode<C>> {
        self.index.get(name).map(|&i| &self.states[i])
    }

    pub fn set_enter_hook(&mut self, name: &str, hook: HookRef<C>) -> Result<(), BuildError> {
        self.get_mut(name)?.enter = Some(hook);
        Ok(())
    }

    pub fn set_exit_hook(&mut self, name: &str, hook: HookRef<C>) -> Result<(), BuildError> {
        self.get_mut(name)?.exit = Some(hook);
        Ok(())
    }

    /// States in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StateNode<C>> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut StateNode<C>, BuildError> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.states[i]),
            None => Err(BuildError::UnknownState {
                name: name.to_string(),
            }),
        }
    }
}

impl<C> Default for StateRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for StateRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.states.iter()).finish()
    }
}
