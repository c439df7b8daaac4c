//! The state machine runtime.
//!
//! [`StateMachine`] owns every state it creates, registers up to a fixed
//! number of them, and dispatches transitions between registered states.
//! [`StateConfig`] is the chainable view used to wire a single state.

mod config;
mod state_machine;

pub use config::StateConfig;
pub use state_machine::{MachinePhase, StateMachine};
