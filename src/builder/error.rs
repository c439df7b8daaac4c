//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Capacity not specified. Call .capacity(n) before .build()")]
    MissingCapacity,

    #[error("Capacity must be at least 1; a machine without slots can never run")]
    ZeroCapacity,

    #[error("History limit must be at least 1. Disable history tracking instead")]
    ZeroHistoryLimit,
}
