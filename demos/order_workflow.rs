//! Order Workflow
//!
//! This example drives a single order through its lifecycle with an
//! owning machine.
//!
//! Key concepts:
//! - Guarded transitions that depend on the order type
//! - Per-state and machine-wide enter hooks
//! - Change history and DOT export
//!
//! Run with: cargo run --example order_workflow

use hookfsm::builder::MachineBuilder;
use hookfsm::core::{guard, GuardError};
use hookfsm::engine::Machine;

#[derive(Debug, Clone, Copy, PartialEq)]
enum OrderType {
    Physical,
    Virtual,
}

#[derive(Debug)]
struct Order {
    id: u32,
    order_type: OrderType,
    status: String,
}

fn is_virtual(order: &Order, _: &str) -> Result<bool, GuardError> {
    Ok(order.order_type == OrderType::Virtual)
}

fn is_physical(order: &Order, _: &str) -> Result<bool, GuardError> {
    Ok(order.order_type == OrderType::Physical)
}

fn order_machine(order: Order) -> Result<Machine<Order>, Box<dyn std::error::Error>> {
    let machine = MachineBuilder::<Order>::new("order")
        .add_states([
            "created",
            "cancelled",
            "paid",
            "checkout",
            "delivering",
            "delivered",
            "finished",
        ])?
        .add_transition("created", "cancelled")?
        .add_transition("created", "paid")?
        .add_transition("paid", "checkout")?
        .add_transition("checkout", "delivering")?
        .add_transition("delivering", "delivered")?
        .add_transition("delivered", "finished")?
        .add_transition_with_guard("checkout", "finished", guard::named("is_virtual", is_virtual))?
        .add_transition_with_guard("paid", "cancelled", guard::named("is_physical", is_physical))?
        .set_state_enter_hook("cancelled", |order: &mut Order, _| {
            println!("  order {} cancelled, stopping delivery", order.id);
        })?
        .set_global_enter_hook(|order: &mut Order, state: &str| {
            order.status = state.to_string();
        })
        .build_owned(order);
    Ok(machine)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Order Workflow Example ===\n");

    let mut machine = order_machine(Order {
        id: 1,
        order_type: OrderType::Virtual,
        status: String::new(),
    })?;
    machine.set_state("created")?;

    for next in ["paid", "cancelled", "checkout", "finished"] {
        match machine.transit(next) {
            Ok(()) => println!("  -> {}", machine.context().status),
            Err(err) => println!("  x  {err}"),
        }
    }

    println!("\nPath: {}", machine.history().path().join(" -> "));
    println!("\nGraph:\n{}", machine.describe().to_dot());

    let mut physical = order_machine(Order {
        id: 2,
        order_type: OrderType::Physical,
        status: String::new(),
    })?;
    physical.set_state("created")?;
    physical.transit("paid")?;
    println!("From paid: {:?}", physical.available_states());
    physical.transit("cancelled")?;
    println!("Final status: {}", physical.into_context().status);

    Ok(())
}
