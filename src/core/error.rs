//! Errors raised while registering states and dispatching transitions.

use super::id::StateId;
use thiserror::Error;

/// Errors that can occur when configuring or driving a state machine.
///
/// Every variant describes a wiring mistake made by the caller. The machine
/// never retries or swallows them, and none of them leaves the machine
/// half-way through a transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State handle {id} does not belong to this machine")]
    InvalidState { id: StateId },

    #[error("'{state}' state has already been configured")]
    DuplicateState { state: String },

    #[error(
        "All ({capacity}) states have been configured. \
         Increase the capacity to register more states"
    )]
    CapacityExceeded { capacity: usize },

    #[error("Cannot link '{state}' to {target}: handle does not belong to this machine")]
    InvalidTarget { state: String, target: StateId },

    #[error("Transition {transition} already exists in '{state}' state")]
    DuplicateTransition { state: String, transition: String },

    #[error("There is no {transition} transition in '{state}' state")]
    UnknownTransition { state: String, transition: String },

    #[error("'{target}' state hasn't been configured")]
    UnregisteredTarget { target: String },

    #[error("No state has been configured yet")]
    NotConfigured,
}
