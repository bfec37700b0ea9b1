//! Transit selection and hook dispatch shared by both machine variants.

use crate::builder::HookOrder;
use crate::core::{guard, Definition, HookKind, HookRef, Transition, Verdict};
use crate::engine::error::TransitionError;

/// Find the edge `from -> to` and evaluate its guard.
///
/// No hooks run and nothing is mutated here; on `Err` the caller must leave
/// its state as it was.
pub(crate) fn select<'d, C>(
    definition: &'d Definition<C>,
    ctx: &C,
    from: &str,
    to: &str,
) -> Result<&'d Transition<C>, TransitionError> {
    let machine = definition.name();

    // (from, to) keys are unique, so at most one outgoing edge matches.
    let Some(transition) = definition.transitions_from(from).find(|t| t.to == to) else {
        tracing::warn!(%machine, %from, %to, "transition not found");
        return Err(TransitionError::TransitionNotFound {
            from: from.to_string(),
            to: to.to_string(),
        });
    };

    tracing::debug!(%machine, transition = %transition.key, "start condition check");

    if transition.guard.is_none() {
        tracing::debug!(%machine, transition = %transition.key, "no condition, check skipped");
    }

    match guard::evaluate(transition.guard(), ctx, from) {
        Verdict::Allowed => Ok(transition),
        Verdict::Denied => {
            tracing::warn!(%machine, transition = %transition.key, "condition not met");
            Err(TransitionError::GuardNotSatisfied {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
        Verdict::Failed(err) => {
            tracing::warn!(%machine, transition = %transition.key, error = %err, "condition check failed");
            Err(TransitionError::Guard(err))
        }
    }
}

/// Run the hooks for an accepted change into `to`, calling `commit` at the
/// point where the new state takes effect.
///
/// Hooks are not isolated from each other: a panicking hook unwinds through
/// here, and whatever ran before it (including `commit`) stays done.
pub(crate) fn apply<C>(
    definition: &Definition<C>,
    ctx: &mut C,
    from: Option<&str>,
    to: &str,
    commit: impl FnOnce(),
) {
    tracing::info!(machine = %definition.name(), from = from.unwrap_or(""), %to, "set state");

    match definition.hook_order() {
        HookOrder::Visit => {
            enter(definition, ctx, to);
            commit();
            exit(definition, ctx, to);
        }
        HookOrder::Handover => {
            if let Some(from) = from {
                exit(definition, ctx, from);
            }
            commit();
            enter(definition, ctx, to);
        }
    }
}

fn enter<C>(definition: &Definition<C>, ctx: &mut C, state: &str) {
    run(definition, definition.global_enter_hook(), HookKind::Enter, "global", ctx, state);
    let local = definition.state(state).and_then(|s| s.enter_hook());
    run(definition, local, HookKind::Enter, "state", ctx, state);
}

fn exit<C>(definition: &Definition<C>, ctx: &mut C, state: &str) {
    let local = definition.state(state).and_then(|s| s.exit_hook());
    run(definition, local, HookKind::Exit, "state", ctx, state);
    run(definition, definition.global_exit_hook(), HookKind::Exit, "global", ctx, state);
}

fn run<C>(
    definition: &Definition<C>,
    hook: Option<&HookRef<C>>,
    kind: HookKind,
    scope: &'static str,
    ctx: &mut C,
    state: &str,
) {
    if let Some(hook) = hook {
        tracing::debug!(
            machine = %definition.name(),
            %state,
            hook = kind.as_str(),
            scope,
            "execute hook"
        );
        hook.call(ctx, state);
    }
}
