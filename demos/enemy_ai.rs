//! Enemy AI
//!
//! This example drives a small enemy behaviour machine.
//!
//! Key concepts:
//! - Registering states and linking enum transition codes
//! - Entry and exit hooks
//! - Recorded transition history
//! - Auditing the wiring before running
//!
//! Run with: cargo run --example enemy_ai

use statelink::{MachineError, StateMachineBuilder};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Transition {
    EnemyInProximity,
    EnemyOutOfRange,
    EnemyInAttackRange,
    EnemyOutOfAttackRange,
}

fn main() -> Result<(), MachineError> {
    println!("=== Enemy AI Example ===\n");

    let mut machine = StateMachineBuilder::new()
        .capacity(3)
        .history_limit(16)
        .build()
        .expect("capacity and history limit are non-zero");

    let idle = machine.add_state("Idle");
    let chase = machine.add_state("Chase");
    let attack = machine.add_state("Attack");

    machine
        .configure(idle)?
        .link(Transition::EnemyInProximity, chase)?
        .on_entry(|| println!("  [Idle] looking around"));
    machine
        .configure(chase)?
        .link(Transition::EnemyInAttackRange, attack)?
        .link(Transition::EnemyOutOfRange, idle)?
        .on_entry(|| println!("  [Chase] running after the player"))
        .on_exit(|| println!("  [Chase] stopping"));
    machine
        .configure(attack)?
        .link(Transition::EnemyOutOfAttackRange, chase)?
        .link(Transition::EnemyOutOfRange, idle)?
        .on_entry(|| println!("  [Attack] swinging"));

    println!("Wiring audit passed: {}\n", machine.audit().is_success());

    let script = [
        Transition::EnemyInProximity,
        Transition::EnemyOutOfRange,
        Transition::EnemyInProximity,
        Transition::EnemyInAttackRange,
    ];

    for transition in script {
        println!("{:?}:", transition);
        machine.perform_transition(transition)?;
    }

    println!(
        "\nFinal state: {}",
        machine.current_state_name().unwrap_or("<none>")
    );

    // Attack has no link for EnemyInProximity
    match machine.perform_transition(Transition::EnemyInProximity) {
        Ok(_) => println!("Unexpected transition"),
        Err(e) => println!("Rejected: {}", e),
    }

    println!("\nPath:");
    for id in machine.history().get_path() {
        if let Some(state) = machine.state(id) {
            println!("  -> {}", state.name());
        }
    }

    Ok(())
}
