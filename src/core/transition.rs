//! Directed edges between states.

use super::guard::Guard;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Composite key identifying the edge `from -> to`.
pub fn transition_key(from: &str, to: &str) -> String {
    format!("{from}->{to}")
}

/// An edge between two registered states, optionally guarded.
pub struct Transition<C> {
    pub from: String,
    pub to: String,
    pub key: String,
    pub guard: Option<Arc<dyn Guard<C>>>,
}

impl<C> Transition<C> {
    pub fn new(from: &str, to: &str, guard: Option<Arc<dyn Guard<C>>>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            key: transition_key(from, to),
            guard,
        }
    }

    pub fn guard(&self) -> Option<&dyn Guard<C>> {
        self.guard.as_deref()
    }

    pub fn guard_label(&self) -> Option<&str> {
        self.guard.as_ref().map(|g| g.label())
    }
}

impl<C> Clone for Transition<C> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            key: self.key.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<C> fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("key", &self.key)
            .field("guard", &self.guard_label())
            .finish()
    }
}

/// Edges in registration order, unique per `(from, to)` pair.
///
/// Endpoint validation is the caller's job; the table only enforces pair
/// uniqueness. The index is keyed by the pair itself, not by the display
/// key, since `"a->b" -> "c"` and `"a" -> "b->c"` format the same.
pub struct TransitionTable<C> {
    transitions: Vec<Transition<C>>,
    index: HashMap<String, HashMap<String, usize>>,
}

impl<C> TransitionTable<C> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an edge. Returns `false` and keeps the existing edge (and its
    /// guard) if the pair is already present.
    pub fn insert(&mut self, transition: Transition<C>) -> bool {
        let targets = self.index.entry(transition.from.clone()).or_default();
        if targets.contains_key(&transition.to) {
            return false;
        }

        targets.insert(transition.to.clone(), self.transitions.len());
        self.transitions.push(transition);
        true
    }

    pub fn find(&self, from: &str, to: &str) -> Option<&Transition<C>> {
        self.index
            .get(from)
            .and_then(|targets| targets.get(to))
            .map(|&i| &self.transitions[i])
    }

    /// All outgoing edges of `state`, guards not consulted.
    pub fn transitions_from<'a, 's>(
        &'a self,
        state: &'s str,
    ) -> impl Iterator<Item = &'a Transition<C>> + 's
    where
        'a: 's,
    {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition<C>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<C> Default for TransitionTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for TransitionTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.transitions.iter()).finish()
    }
}
