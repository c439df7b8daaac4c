//! Core state machine types.
//!
//! This module contains the building blocks shared by the machine, the
//! builder and the wiring audit:
//! - [`State`] nodes with their transition tables and hooks
//! - [`StateId`] handles and the [`TransitionCode`] key trait
//! - [`MachineError`], the failure taxonomy
//! - Bounded transition history

mod error;
mod history;
mod id;
mod state;

pub use error::MachineError;
pub use history::{TransitionHistory, TransitionRecord};
pub use id::{StateId, TransitionCode};
pub use state::{Hook, State};
