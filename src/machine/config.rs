//! Configuration view over a single state.

use crate::core::{MachineError, State, StateId, TransitionCode};
use uuid::Uuid;

/// Chainable configuration handle returned by
/// [`StateMachine::configure`](super::StateMachine::configure) and
/// [`StateMachine::edit`](super::StateMachine::edit).
///
/// Only configuration operations are exposed here; resolving codes and
/// firing hooks belong to the machine.
///
/// # Example
///
/// ```rust
/// use statelink::StateMachine;
///
/// let mut machine = StateMachine::new(3);
/// let idle = machine.add_state("Idle");
/// let chase = machine.add_state("Chase");
/// let attack = machine.add_state("Attack");
///
/// machine
///     .configure(chase)
///     .unwrap()
///     .link(2, attack)
///     .unwrap()
///     .link(1, idle)
///     .unwrap()
///     .on_entry(|| println!("chasing"));
/// ```
pub struct StateConfig<'a, T: TransitionCode> {
    state: &'a mut State<T>,
    machine: Uuid,
    arena_len: usize,
}

impl<'a, T: TransitionCode> StateConfig<'a, T> {
    pub(crate) fn new(state: &'a mut State<T>, machine: Uuid, arena_len: usize) -> Self {
        Self {
            state,
            machine,
            arena_len,
        }
    }

    /// Link `transition` to `target`.
    ///
    /// The target does not have to be registered yet; that is checked when
    /// the transition is performed. Fails without touching the table if the
    /// target belongs to another machine or the code is already linked.
    pub fn link(self, transition: T, target: StateId) -> Result<Self, MachineError> {
        if target.machine() != self.machine || target.index() >= self.arena_len {
            return Err(MachineError::InvalidTarget {
                state: self.state.name().to_string(),
                target,
            });
        }

        self.state.link(transition, target)?;
        tracing::trace!(
            state = self.state.name(),
            transition = ?transition,
            target_state = %target,
            "linked transition"
        );
        Ok(self)
    }

    /// Set the hook run when the machine enters this state. Replaces any
    /// previous entry hook.
    pub fn on_entry<F>(self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.state.set_on_entry(Box::new(hook));
        tracing::trace!(state = self.state.name(), "set entry hook");
        self
    }

    /// Set the hook run when the machine leaves this state. Replaces any
    /// previous exit hook.
    pub fn on_exit<F>(self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.state.set_on_exit(Box::new(hook));
        tracing::trace!(state = self.state.name(), "set exit hook");
        self
    }

    /// Handle of the state being configured.
    pub fn id(&self) -> StateId {
        self.state.id()
    }

    /// Name of the state being configured.
    pub fn name(&self) -> &str {
        self.state.name()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::MachineError;
    use crate::machine::StateMachine;

    #[test]
    fn link_chains_multiple_codes() {
        let mut machine = StateMachine::new(3);
        let idle = machine.add_state("Idle");
        let chase = machine.add_state("Chase");
        let attack = machine.add_state("Attack");

        let config = machine
            .configure(chase)
            .unwrap()
            .link(2, attack)
            .unwrap()
            .link(1, idle)
            .unwrap();
        assert_eq!(config.id(), chase);
        assert_eq!(config.name(), "Chase");

        let state = machine.state(chase).unwrap();
        assert_eq!(state.resolve(2), Ok(attack));
        assert_eq!(state.resolve(1), Ok(idle));
    }

    #[test]
    fn link_rejects_foreign_target() {
        let mut machine = StateMachine::new(1);
        let mut other: StateMachine = StateMachine::new(1);
        let idle = machine.add_state("Idle");
        let foreign = other.add_state("Chase");

        let result = machine.configure(idle).unwrap().link(0, foreign);

        assert_eq!(
            result.err(),
            Some(MachineError::InvalidTarget {
                state: "Idle".to_string(),
                target: foreign,
            })
        );
        assert!(machine.state(idle).unwrap().resolve(0).is_err());
    }

    #[test]
    fn link_rejects_duplicate_code() {
        let mut machine = StateMachine::new(2);
        let idle = machine.add_state("Idle");
        let chase = machine.add_state("Chase");

        let result = machine
            .configure(idle)
            .unwrap()
            .link(0, chase)
            .unwrap()
            .link(0, chase);

        assert!(matches!(
            result,
            Err(MachineError::DuplicateTransition { .. })
        ));
    }

    #[test]
    fn hooks_are_stored_on_the_state() {
        let mut machine: StateMachine = StateMachine::new(1);
        let idle = machine.add_state("Idle");

        machine.configure(idle).unwrap().on_entry(|| {}).on_exit(|| {});

        let state = machine.state(idle).unwrap();
        assert!(state.has_entry_hook());
        assert!(state.has_exit_hook());
    }
}
