//! Machine shared across many entities.

use crate::core::Definition;
use crate::engine::dispatch;
use crate::engine::error::TransitionError;
use crate::graph::GraphDescription;

/// State machine that keeps no per-entity state.
///
/// Each call names the state to leave and receives the entity record as
/// context; writing the new state back is the job of a hook. Because the
/// definition is read-only after construction, one instance can serve any
/// number of entities from any number of threads.
///
/// # Example
///
/// ```rust
/// use hookfsm::builder::MachineBuilder;
///
/// struct Ticket {
///     status: String,
/// }
///
/// let machine = MachineBuilder::new("ticket")
///     .add_states(["open", "closed"])?
///     .add_transition("open", "closed")?
///     .set_global_enter_hook(|ticket: &mut Ticket, state: &str| ticket.status = state.to_string())
///     .build_shared();
///
/// let mut ticket = Ticket { status: "open".to_string() };
/// let from = ticket.status.clone();
/// machine.transit(&mut ticket, &from, "closed")?;
/// assert_eq!(ticket.status, "closed");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SharedMachine<C> {
    definition: Definition<C>,
}

impl<C> SharedMachine<C> {
    pub fn new(definition: Definition<C>) -> Self {
        Self { definition }
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn definition(&self) -> &Definition<C> {
        &self.definition
    }

    /// States reachable from `from` in one step. Guards are not consulted.
    pub fn available_states(&self, from: &str) -> Vec<&str> {
        self.definition.available_states(from)
    }

    pub fn describe(&self) -> GraphDescription {
        GraphDescription::from_definition(&self.definition)
    }

    /// Move the entity described by `ctx` from `from` to `to`.
    ///
    /// Guards see `ctx` and `from`. On success the hooks run with `ctx`; on
    /// error nothing runs and `ctx` is untouched.
    pub fn transit(&self, ctx: &mut C, from: &str, to: &str) -> Result<(), TransitionError> {
        dispatch::select(&self.definition, ctx, from, to)?;
        tracing::debug!(machine = %self.name(), %from, %to, "transit state");
        dispatch::apply(&self.definition, ctx, Some(from), to, || {});
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;

    #[derive(Default)]
    struct Job {
        status: String,
        retries: u32,
    }

    fn machine() -> SharedMachine<Job> {
        MachineBuilder::new("jobs")
            .add_states(["queued", "running", "failed"])
            .unwrap()
            .add_transition("queued", "running")
            .unwrap()
            .add_transition("running", "failed")
            .unwrap()
            .add_transition_guarded("failed", "queued", |job: &Job, _| Ok(job.retries < 2))
            .unwrap()
            .set_state_enter_hook("queued", |job, _| job.retries += 1)
            .unwrap()
            .set_global_enter_hook(|job, state| job.status = state.to_string())
            .build_shared()
    }

    #[test]
    fn shared_machine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedMachine<Job>>();
    }

    #[test]
    fn transit_updates_entity_through_hooks() {
        let machine = machine();
        let mut job = Job::default();

        machine.transit(&mut job, "queued", "running").unwrap();
        assert_eq!(job.status, "running");
    }

    #[test]
    fn guard_uses_entity_fields() {
        let machine = machine();
        let mut job = Job {
            status: "failed".to_string(),
            retries: 1,
        };

        machine.transit(&mut job, "failed", "queued").unwrap();
        assert_eq!(job.status, "queued");
        assert_eq!(job.retries, 2);

        job.status = "failed".to_string();
        let err = machine.transit(&mut job, "failed", "queued").unwrap_err();
        assert!(matches!(err, TransitionError::GuardNotSatisfied { .. }));
        assert_eq!(job.status, "failed");
        assert_eq!(job.retries, 2);
    }

    #[test]
    fn unknown_origin_has_no_transitions() {
        let machine = machine();
        let mut job = Job::default();

        let err = machine.transit(&mut job, "ghost", "running").unwrap_err();
        assert!(matches!(err, TransitionError::TransitionNotFound { .. }));
        assert!(machine.available_states("ghost").is_empty());
        assert!(job.status.is_empty());
    }

    #[test]
    fn available_states_take_origin() {
        let machine = machine();
        assert_eq!(machine.available_states("queued"), vec!["running"]);
        assert_eq!(machine.available_states("failed"), vec!["queued"]);
    }
}
