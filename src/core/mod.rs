//! Core state machine types.
//!
//! This module contains the building blocks shared by both engine variants:
//! - The state registry and per-state hooks
//! - The transition table and guard predicates
//! - The machine definition composing them
//! - Immutable history tracking

mod definition;
pub mod guard;
mod history;
mod hook;
mod state;
mod transition;

pub use definition::Definition;
pub use guard::{FnGuard, Guard, GuardError, Verdict};
pub use history::{ChangeKind, StateChange, StateHistory};
pub use hook::{Hook, HookKind, HookRef};
pub use state::{StateNode, StateRegistry};
pub use transition::{transition_key, Transition, TransitionTable};
