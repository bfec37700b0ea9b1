//! Builder API for machine construction.
//!
//! States are registered first, then transitions between them, then hooks.
//! Every registration returns a `Result` so misuse surfaces as a
//! [`BuildError`] instead of aborting the process.

pub mod config;
pub mod error;
pub mod machine;

pub use config::{HookOrder, MachineConfig};
pub use error::BuildError;
pub use machine::MachineBuilder;
