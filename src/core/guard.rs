//! Guard predicates for controlling transitions.
//!
//! A guard decides at transit time whether an edge may be taken. It sees the
//! caller's context and the name of the state the transition starts from,
//! and answers allow, deny, or fails with its own error. Guards are
//! re-evaluated on every attempt; nothing is cached.

use std::any::type_name;
use std::error::Error;

/// Error produced by a failing guard. Returned to the caller unchanged.
pub type GuardError = Box<dyn Error + Send + Sync>;

/// Predicate consulted before a guarded transition executes.
///
/// Guards must not mutate engine state. They may read external state through
/// the context, which is why they receive `&C` rather than `&mut C`.
///
/// # Example
///
/// ```rust
/// use hookfsm::core::{Guard, GuardError};
///
/// struct Account {
///     balance: i64,
/// }
///
/// struct HasFunds;
///
/// impl Guard<Account> for HasFunds {
///     fn check(&self, account: &Account, _current: &str) -> Result<bool, GuardError> {
///         Ok(account.balance > 0)
///     }
///
///     fn label(&self) -> &str {
///         "has_funds"
///     }
/// }
///
/// assert!(HasFunds.check(&Account { balance: 10 }, "open").unwrap());
/// assert!(!HasFunds.check(&Account { balance: 0 }, "open").unwrap());
/// ```
pub trait Guard<C>: Send + Sync {
    /// Evaluate the guard against `ctx` while the entity is in `current`.
    fn check(&self, ctx: &C, current: &str) -> Result<bool, GuardError>;

    /// Human-readable identifier, used as the edge label in graph exports.
    fn label(&self) -> &str;
}

/// Guard backed by a closure or function, with a label.
pub struct FnGuard<F> {
    label: String,
    predicate: F,
}

impl<F> FnGuard<F> {
    /// Wrap `predicate`, labelling it with its type name.
    ///
    /// For a plain function the type name is its path (`my_app::is_virtual`),
    /// which mirrors how a graph would name a function-pointer condition.
    pub fn new<C>(predicate: F) -> Self
    where
        F: Fn(&C, &str) -> Result<bool, GuardError> + Send + Sync,
    {
        Self {
            label: type_name::<F>().to_string(),
            predicate,
        }
    }

    /// Wrap `predicate` under an explicit label.
    pub fn named<C>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&C, &str) -> Result<bool, GuardError> + Send + Sync,
    {
        Self {
            label: label.into(),
            predicate,
        }
    }
}

impl<C, F> Guard<C> for FnGuard<F>
where
    F: Fn(&C, &str) -> Result<bool, GuardError> + Send + Sync,
{
    fn check(&self, ctx: &C, current: &str) -> Result<bool, GuardError> {
        (self.predicate)(ctx, current)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Create a guard with an explicit label.
///
/// # Example
///
/// ```rust
/// use hookfsm::core::{guard, Guard};
///
/// let positive = guard::named("is_positive", |n: &i32, _state: &str| Ok(*n > 0));
/// assert_eq!(Guard::<i32>::label(&positive), "is_positive");
/// assert!(positive.check(&5, "idle").unwrap());
/// ```
pub fn named<C, F>(label: impl Into<String>, predicate: F) -> FnGuard<F>
where
    F: Fn(&C, &str) -> Result<bool, GuardError> + Send + Sync,
{
    FnGuard::named(label, predicate)
}

/// Outcome of evaluating an optional guard.
#[derive(Debug)]
pub enum Verdict {
    /// No guard, or the guard returned `true`.
    Allowed,
    /// The guard returned `false`.
    Denied,
    /// The guard itself failed.
    Failed(GuardError),
}

/// Evaluate an optional guard. A missing guard always allows.
pub fn evaluate<C>(guard: Option<&dyn Guard<C>>, ctx: &C, current: &str) -> Verdict {
    let Some(guard) = guard else {
        return Verdict::Allowed;
    };

    match guard.check(ctx, current) {
        Ok(true) => Verdict::Allowed,
        Ok(false) => Verdict::Denied,
        Err(err) => Verdict::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Unreachable;

    impl fmt::Display for Unreachable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "backend unreachable")
        }
    }

    impl Error for Unreachable {}

    fn always_true(_: &u32, _: &str) -> Result<bool, GuardError> {
        Ok(true)
    }

    #[test]
    fn missing_guard_allows() {
        let verdict = evaluate::<u32>(None, &0, "idle");
        assert!(matches!(verdict, Verdict::Allowed));
    }

    #[test]
    fn true_guard_allows() {
        let guard = FnGuard::new(|n: &u32, _: &str| Ok(*n > 1));
        assert!(matches!(evaluate::<u32>(Some(&guard), &2, "idle"), Verdict::Allowed));
    }

    #[test]
    fn false_guard_denies() {
        let guard = FnGuard::new(|n: &u32, _: &str| Ok(*n > 1));
        assert!(matches!(evaluate::<u32>(Some(&guard), &0, "idle"), Verdict::Denied));
    }

    #[test]
    fn failing_guard_carries_its_error() {
        let guard = FnGuard::new(|_: &u32, _: &str| Err(Box::new(Unreachable) as GuardError));

        match evaluate::<u32>(Some(&guard), &0, "idle") {
            Verdict::Failed(err) => {
                assert!(err.downcast_ref::<Unreachable>().is_some());
                assert_eq!(err.to_string(), "backend unreachable");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn guard_sees_current_state() {
        let guard = FnGuard::new(|_: &(), current: &str| Ok(current == "paid"));

        assert!(guard.check(&(), "paid").unwrap());
        assert!(!guard.check(&(), "created").unwrap());
    }

    #[test]
    fn function_guard_is_labelled_by_path() {
        let guard = FnGuard::new(always_true);
        assert!(Guard::<u32>::label(&guard).ends_with("always_true"));
    }

    #[test]
    fn named_guard_keeps_label() {
        let guard = named("is_virtual", |_: &u32, _: &str| Ok(false));
        assert_eq!(Guard::<u32>::label(&guard), "is_virtual");
    }

    #[test]
    fn guard_is_reevaluated_each_time() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let guard = FnGuard::new(|_: &(), _: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        });

        evaluate::<()>(Some(&guard), &(), "a");
        evaluate::<()>(Some(&guard), &(), "a");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
