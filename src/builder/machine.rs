//! Builder for constructing state machines.

use crate::builder::config::MachineConfig;
use crate::builder::error::BuildError;
use crate::core::{TransitionCode, TransitionHistory};
use crate::machine::StateMachine;
use std::marker::PhantomData;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use statelink::StateMachineBuilder;
///
/// let mut machine = StateMachineBuilder::new()
///     .capacity(2)
///     .history_limit(16)
///     .build()
///     .unwrap();
///
/// let idle = machine.add_state("Idle");
/// let chase = machine.add_state("Chase");
/// machine.configure(idle).unwrap().link(0, chase).unwrap();
/// machine.configure(chase).unwrap();
///
/// machine.perform_transition(0).unwrap();
/// assert_eq!(machine.history().len(), 1);
/// ```
pub struct StateMachineBuilder<T: TransitionCode = i32> {
    capacity: Option<usize>,
    track_history: bool,
    history_limit: Option<usize>,
    _phantom: PhantomData<T>,
}

impl<T: TransitionCode> StateMachineBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            capacity: None,
            track_history: false,
            history_limit: None,
            _phantom: PhantomData,
        }
    }

    /// Start from declarative settings.
    pub fn from_config(config: &MachineConfig) -> Self {
        let builder = Self::new()
            .capacity(config.capacity)
            .track_history(config.track_history);

        match config.history_limit {
            Some(limit) => builder.history_limit(limit),
            None => builder,
        }
    }

    /// Set the number of registration slots (required).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Record completed transitions.
    pub fn track_history(mut self, enabled: bool) -> Self {
        self.track_history = enabled;
        self
    }

    /// Keep only the most recent `limit` transitions. Enables tracking.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.track_history = true;
        self.history_limit = Some(limit);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or out of range.
    pub fn build(self) -> Result<StateMachine<T>, BuildError> {
        let capacity = self.capacity.ok_or(BuildError::MissingCapacity)?;
        if capacity == 0 {
            return Err(BuildError::ZeroCapacity);
        }

        let history = match (self.track_history, self.history_limit) {
            (false, _) => None,
            (true, None) => Some(TransitionHistory::new()),
            (true, Some(0)) => return Err(BuildError::ZeroHistoryLimit),
            (true, Some(limit)) => Some(TransitionHistory::with_limit(limit)),
        };

        Ok(StateMachine::with_history(capacity, history))
    }
}

impl<T: TransitionCode> Default for StateMachineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Transition {
        EnemyInProximity,
        EnemyOutOfRange,
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<Transition>::new().build();

        assert!(matches!(result, Err(BuildError::MissingCapacity)));
    }

    #[test]
    fn builder_rejects_zero_capacity() {
        let result = StateMachineBuilder::<Transition>::new().capacity(0).build();

        assert!(matches!(result, Err(BuildError::ZeroCapacity)));
    }

    #[test]
    fn builder_rejects_zero_history_limit() {
        let result = StateMachineBuilder::<Transition>::new()
            .capacity(2)
            .history_limit(0)
            .build();

        assert!(matches!(result, Err(BuildError::ZeroHistoryLimit)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::<Transition>::new()
            .capacity(3)
            .build()
            .unwrap();

        assert_eq!(machine.capacity(), 3);
        assert!(machine.is_empty());
        assert!(!machine.is_tracking_history());
    }

    #[test]
    fn history_limit_is_applied() {
        let mut machine = StateMachineBuilder::new()
            .capacity(2)
            .history_limit(1)
            .build()
            .unwrap();
        let idle = machine.add_state("Idle");
        let chase = machine.add_state("Chase");
        machine
            .configure(idle)
            .unwrap()
            .link(Transition::EnemyInProximity, chase)
            .unwrap();
        machine
            .configure(chase)
            .unwrap()
            .link(Transition::EnemyOutOfRange, idle)
            .unwrap();

        machine
            .perform_transition(Transition::EnemyInProximity)
            .unwrap();
        machine
            .perform_transition(Transition::EnemyOutOfRange)
            .unwrap();

        assert_eq!(machine.history().limit(), Some(1));
        assert_eq!(machine.history().len(), 1);
        assert_eq!(machine.history().get_path(), vec![chase, idle]);
    }

    #[test]
    fn from_config_copies_settings() {
        let config: MachineConfig = serde_json::from_str(
            r#"{ "capacity": 5, "history_limit": 8 }"#,
        )
        .unwrap();

        let machine = StateMachineBuilder::<Transition>::from_config(&config)
            .build()
            .unwrap();

        assert_eq!(machine.capacity(), 5);
        assert!(machine.is_tracking_history());
        assert_eq!(machine.history().limit(), Some(8));
    }
}
