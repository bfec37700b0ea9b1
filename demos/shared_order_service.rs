//! Shared Order Service
//!
//! One machine serves many orders at once. Each order record carries its
//! own status, and the machine is handed that status on every call.
//!
//! Key concepts:
//! - A single `SharedMachine` behind an `Arc`
//! - Concurrent tokio tasks driving independent orders
//! - Structured logging via `tracing`
//!
//! Run with: RUST_LOG=hookfsm=debug cargo run --example shared_order_service

use hookfsm::builder::{HookOrder, MachineBuilder, MachineConfig};
use hookfsm::core::GuardError;
use hookfsm::engine::{SharedMachine, TransitionError};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Order {
    id: u32,
    express: bool,
    status: String,
}

impl Order {
    fn advance(&mut self, service: &SharedMachine<Order>, to: &str) -> Result<(), TransitionError> {
        let from = self.status.clone();
        service.transit(self, &from, to)
    }
}

fn service() -> Result<SharedMachine<Order>, Box<dyn std::error::Error>> {
    let config = MachineConfig::named("orders").hook_order(HookOrder::Handover);
    let machine = MachineBuilder::<Order>::with_config(config)
        .add_states(["created", "paid", "shipped", "delivered"])?
        .add_transition("created", "paid")?
        .add_transition("paid", "shipped")?
        .add_transition_guarded("created", "shipped", |order: &Order, _| {
            if order.id == 0 {
                return Err(GuardError::from("order id 0 is reserved"));
            }
            Ok(order.express)
        })?
        .add_transition("shipped", "delivered")?
        .set_global_exit_hook(|order: &mut Order, state: &str| {
            tracing::info!(order = order.id, %state, "leaving state");
        })
        .set_global_enter_hook(|order: &mut Order, state: &str| {
            order.status = state.to_string();
        })
        .build_shared();
    Ok(machine)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let service = Arc::new(service()?);

    let handles: Vec<_> = (1..=8u32)
        .map(|id| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let mut order = Order {
                    id,
                    express: id % 3 == 0,
                    status: "created".to_string(),
                };
                // Express orders try to skip payment; the guard decides.
                if order.advance(&service, "shipped").is_err() {
                    order.advance(&service, "paid")?;
                    order.advance(&service, "shipped")?;
                }
                order.advance(&service, "delivered")?;
                Ok::<_, TransitionError>(order)
            })
        })
        .collect();

    for handle in handles {
        let order = handle.await??;
        println!("order {} is {}", order.id, order.status);
    }

    println!("\n{}", service.describe().to_dot());
    Ok(())
}
