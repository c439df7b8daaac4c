//! Declarative machine settings.

use serde::{Deserialize, Serialize};

/// Machine settings that can be loaded from any serde format.
///
/// Only `capacity` is required. A `history_limit` turns history tracking
/// on even when `track_history` is left unset.
///
/// # Example
///
/// ```rust
/// use statelink::builder::{MachineConfig, StateMachineBuilder};
///
/// let config = MachineConfig {
///     capacity: 3,
///     track_history: true,
///     history_limit: Some(64),
/// };
///
/// let machine = StateMachineBuilder::<i32>::from_config(&config).build().unwrap();
/// assert_eq!(machine.capacity(), 3);
/// assert!(machine.is_tracking_history());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Number of registration slots
    pub capacity: usize,

    /// Record completed transitions
    #[serde(default)]
    pub track_history: bool,

    /// Keep at most this many history records
    #[serde(default)]
    pub history_limit: Option<usize>,
}
