//! Runtime state machines.
//!
//! Two ownership models share one transit algorithm:
//!
//! - [`Machine`] stores one entity's current state and context.
//! - [`SharedMachine`] stores neither; the caller passes the origin state and
//!   the entity record on every call, so one instance serves many entities.
//!
//! Each call executes at most one transition, synchronously, on the calling
//! thread.

mod dispatch;
mod error;
mod owned;
mod shared;

pub use error::TransitionError;
pub use owned::Machine;
pub use shared::SharedMachine;
