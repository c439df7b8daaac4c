//! Builder API for constructing state machines.
//!
//! [`StateMachineBuilder`] validates machine settings up front, and
//! [`MachineConfig`] lets the same settings come from a config file.

pub mod config;
pub mod error;
pub mod machine;

pub use config::MachineConfig;
pub use error::BuildError;
pub use machine::StateMachineBuilder;
