//! Wiring violations reported by the audit.

use thiserror::Error;

/// A wiring problem found in a configured machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WiringViolation {
    #[error("'{state}' links {transition} to '{target}', which hasn't been configured")]
    UnregisteredTarget {
        state: String,
        transition: String,
        target: String,
    },

    #[error("'{state}' cannot be reached from the initial state")]
    Unreachable { state: String },
}
