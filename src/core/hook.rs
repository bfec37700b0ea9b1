//! Enter and exit hooks.
//!
//! Hooks are side-effecting callbacks that run when a state change is
//! accepted. They receive the context mutably so they can write the new
//! state back into the entity record (or persist it).

use std::sync::Arc;

/// Callback invoked with the context and a state name.
pub trait Hook<C>: Send + Sync {
    fn call(&self, ctx: &mut C, state: &str);
}

impl<C, F> Hook<C> for F
where
    F: Fn(&mut C, &str) + Send + Sync,
{
    fn call(&self, ctx: &mut C, state: &str) {
        self(ctx, state)
    }
}

/// Shared handle to a hook.
pub type HookRef<C> = Arc<dyn Hook<C>>;

/// Which side of a state change a hook belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookKind {
    Enter,
    Exit,
}

impl HookKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
        }
    }
}
