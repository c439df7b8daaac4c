//! Statelink: a small embeddable finite state machine
//!
//! A machine has a fixed number of registration slots. Callers create named
//! states, link integer (or enum) transition codes between them, attach
//! entry/exit hooks, and drive the machine one transition at a time.
//!
//! # Core Concepts
//!
//! - **State**: a named node with a transition table and optional hooks
//! - **StateMachine**: bounded registry of states plus the current state
//! - **Late-bound targets**: a link may point at a state that is registered
//!   later; dispatch fails if it never is
//! - **Audit**: optional whole-machine check that reports every wiring
//!   problem at once
//!
//! Everything runs synchronously on the caller's thread. Hooks run inside
//! [`StateMachine::perform_transition`]; if one panics, the transition is
//! not rolled back.
//!
//! # Example
//!
//! ```rust
//! use statelink::StateMachine;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum Transition {
//!     EnemyInProximity,
//!     EnemyOutOfRange,
//!     EnemyInAttackRange,
//!     EnemyOutOfAttackRange,
//! }
//!
//! let mut machine = StateMachine::new(3);
//! let idle = machine.add_state("Idle");
//! let chase = machine.add_state("Chase");
//! let attack = machine.add_state("Attack");
//!
//! machine
//!     .configure(idle)?
//!     .link(Transition::EnemyInProximity, chase)?;
//! machine
//!     .configure(chase)?
//!     .link(Transition::EnemyInAttackRange, attack)?
//!     .link(Transition::EnemyOutOfRange, idle)?;
//! machine
//!     .configure(attack)?
//!     .link(Transition::EnemyOutOfAttackRange, chase)?
//!     .link(Transition::EnemyOutOfRange, idle)?;
//!
//! machine.perform_transition(Transition::EnemyInProximity)?;
//! machine.perform_transition(Transition::EnemyInAttackRange)?;
//!
//! assert_eq!(machine.current_state(), Some(attack));
//! # Ok::<(), statelink::MachineError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, MachineConfig, StateMachineBuilder};
pub use self::core::{
    MachineError, State, StateId, TransitionCode, TransitionHistory, TransitionRecord,
};
pub use machine::{MachinePhase, StateConfig, StateMachine};
pub use validation::WiringViolation;
