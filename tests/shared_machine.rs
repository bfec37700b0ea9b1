//! Behaviour of the shared machine, where the caller supplies the origin state.

use hookfsm::builder::{HookOrder, MachineBuilder, MachineConfig};
use hookfsm::core::GuardError;
use hookfsm::engine::{SharedMachine, TransitionError};
use std::fmt;

#[derive(Debug, Default)]
struct Ticket {
    status: String,
    log: Vec<String>,
}

impl Ticket {
    fn at(status: &str) -> Self {
        Self {
            status: status.to_string(),
            log: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct Locked;

impl fmt::Display for Locked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ticket is locked")
    }
}

impl std::error::Error for Locked {}

fn tickets(order: HookOrder) -> SharedMachine<Ticket> {
    MachineBuilder::with_config(MachineConfig::named("ticket").hook_order(order))
        .add_states(["open", "review", "closed"])
        .unwrap()
        .add_transition("open", "review")
        .unwrap()
        .add_transition("review", "closed")
        .unwrap()
        .add_transition_guarded("review", "open", |_: &Ticket, _| {
            Err(Box::new(Locked) as GuardError)
        })
        .unwrap()
        .set_state_enter_hook("review", |t: &mut Ticket, s: &str| {
            t.log.push(format!("local_enter:{s}"))
        })
        .unwrap()
        .set_state_exit_hook("open", |t, s| t.log.push(format!("local_exit:{s}")))
        .unwrap()
        .set_global_enter_hook(|t, s| {
            t.status = s.to_string();
            t.log.push(format!("global_enter:{s}"));
        })
        .set_global_exit_hook(|t, s| t.log.push(format!("global_exit:{s}")))
        .build_shared()
}

#[test]
fn visit_order_runs_hooks_of_entered_state_only() {
    let machine = tickets(HookOrder::Visit);
    let mut ticket = Ticket::at("open");

    machine.transit(&mut ticket, "open", "review").unwrap();

    assert_eq!(ticket.status, "review");
    assert_eq!(
        ticket.log,
        vec!["global_enter:review", "local_enter:review", "global_exit:review"]
    );
}

#[test]
fn handover_order_exits_the_supplied_origin() {
    let machine = tickets(HookOrder::Handover);
    let mut ticket = Ticket::at("open");

    machine.transit(&mut ticket, "open", "review").unwrap();

    assert_eq!(
        ticket.log,
        vec![
            "local_exit:open",
            "global_exit:open",
            "global_enter:review",
            "local_enter:review"
        ]
    );
}

#[test]
fn origin_comes_from_the_caller_not_the_record() {
    let machine = tickets(HookOrder::Visit);
    // The record claims "closed" but the caller asks to leave "review".
    let mut ticket = Ticket::at("closed");

    machine.transit(&mut ticket, "review", "closed").unwrap();
    assert_eq!(ticket.status, "closed");

    let err = machine.transit(&mut ticket, "closed", "open").unwrap_err();
    assert!(matches!(err, TransitionError::TransitionNotFound { .. }));
}

#[test]
fn guard_error_passes_through_and_runs_nothing() {
    let machine = tickets(HookOrder::Visit);
    let mut ticket = Ticket::at("review");

    let err = machine.transit(&mut ticket, "review", "open").unwrap_err();

    assert_eq!(err.to_string(), "ticket is locked");
    assert!(err.guard_error().is_some_and(|e| e.is::<Locked>()));
    assert_eq!(ticket.status, "review");
    assert!(ticket.log.is_empty());
}

#[test]
fn unknown_origin_is_not_found() {
    let machine = tickets(HookOrder::Visit);
    let mut ticket = Ticket::default();

    let err = machine.transit(&mut ticket, "nowhere", "open").unwrap_err();

    assert_eq!(err.to_string(), "Transition from 'nowhere' to 'open' not found");
    assert!(ticket.log.is_empty());
}

#[test]
fn available_states_are_per_origin() {
    let machine = tickets(HookOrder::Visit);

    assert_eq!(machine.available_states("open"), vec!["review"]);
    assert_eq!(machine.available_states("review"), vec!["closed", "open"]);
    assert!(machine.available_states("closed").is_empty());
    assert!(machine.available_states("nowhere").is_empty());
}

#[test]
fn graph_description_serializes_to_json() {
    let machine = tickets(HookOrder::Visit);

    let json = machine.describe().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["name"], "ticket");
    assert_eq!(value["nodes"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["edges"][0]["key"], "open->review");
    assert!(value["edges"][2]["label"].is_string());
}
