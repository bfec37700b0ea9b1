//! Hookfsm: a string-keyed finite state machine engine
//!
//! Register named states, connect them with transitions (optionally guarded
//! by runtime conditions), and observe every accepted state change through
//! enter and exit hooks. The engine is a passive, synchronous library: each
//! call executes at most one transition on the calling thread.
//!
//! # Core Concepts
//!
//! - **States**: Unique names with optional enter/exit hooks
//! - **Transitions**: Directed `from -> to` edges, unique per pair
//! - **Guards**: Predicates that allow, deny, or fail a transition attempt
//! - **Hooks**: Side-effecting callbacks, per state or machine-wide
//! - **Machines**: [`Machine`] owns one entity's current state;
//!   [`SharedMachine`] takes the origin state per call and serves many
//!   entities at once
//!
//! # Example
//!
//! ```rust
//! use hookfsm::builder::MachineBuilder;
//!
//! struct Order {
//!     virtual_goods: bool,
//!     status: String,
//! }
//!
//! let orders = MachineBuilder::new("order")
//!     .add_states(["created", "paid", "checkout", "finished"])?
//!     .add_transition("created", "paid")?
//!     .add_transition("paid", "checkout")?
//!     .add_transition_guarded("checkout", "finished", |order: &Order, _| {
//!         Ok(order.virtual_goods)
//!     })?
//!     .set_global_enter_hook(|order: &mut Order, state: &str| {
//!         order.status = state.to_string();
//!     })
//!     .build_shared();
//!
//! let mut order = Order { virtual_goods: true, status: "created".to_string() };
//! for next in ["paid", "checkout", "finished"] {
//!     let from = order.status.clone();
//!     orders.transit(&mut order, &from, next)?;
//! }
//! assert_eq!(order.status, "finished");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod graph;

// Re-export commonly used types
pub use crate::builder::{BuildError, HookOrder, MachineBuilder, MachineConfig};
pub use crate::core::{Guard, GuardError, Hook, StateHistory};
pub use crate::engine::{Machine, SharedMachine, TransitionError};
pub use crate::graph::{GraphDescription, GraphRenderer};
