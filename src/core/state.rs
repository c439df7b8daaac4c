//! A single node of a state machine.
//!
//! A state owns its outgoing transition table and its entry/exit hooks.
//! Targets are stored as [`StateId`] handles into the owning machine's
//! arena, so states can reference each other in cycles without shared
//! ownership.

use super::error::MachineError;
use super::id::{StateId, TransitionCode};
use std::collections::HashMap;
use std::fmt;

/// Side-effecting callback run when a state is entered or exited.
pub type Hook = Box<dyn FnMut() + Send>;

/// A named state with its transition table and lifecycle hooks.
///
/// States are created by [`StateMachine::add_state`](crate::StateMachine::add_state)
/// and wired through [`StateConfig`](crate::StateConfig). The name is only
/// used for diagnostics; identity is the [`StateId`].
pub struct State<T: TransitionCode> {
    id: StateId,
    name: String,
    transitions: HashMap<T, StateId>,
    on_entry: Option<Hook>,
    on_exit: Option<Hook>,
}

impl<T: TransitionCode> State<T> {
    pub(crate) fn new(id: StateId, name: String) -> Self {
        Self {
            id,
            name,
            transitions: HashMap::new(),
            on_entry: None,
            on_exit: None,
        }
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle of this state in its machine.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Resolve a transition code to the linked target.
    ///
    /// Pure lookup; repeated calls with the same code return the same target.
    pub fn resolve(&self, transition: T) -> Result<StateId, MachineError> {
        self.transitions
            .get(&transition)
            .copied()
            .ok_or_else(|| MachineError::UnknownTransition {
                state: self.name.clone(),
                transition: format!("{:?}", transition),
            })
    }

    /// Iterate over the outgoing links of this state, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (T, StateId)> + '_ {
        self.transitions.iter().map(|(code, target)| (*code, *target))
    }

    /// Whether an entry hook has been set.
    pub fn has_entry_hook(&self) -> bool {
        self.on_entry.is_some()
    }

    /// Whether an exit hook has been set.
    pub fn has_exit_hook(&self) -> bool {
        self.on_exit.is_some()
    }

    /// Add a link. Leaves the table untouched if the code is already linked.
    pub(crate) fn link(&mut self, transition: T, target: StateId) -> Result<(), MachineError> {
        if self.transitions.contains_key(&transition) {
            return Err(MachineError::DuplicateTransition {
                state: self.name.clone(),
                transition: format!("{:?}", transition),
            });
        }

        self.transitions.insert(transition, target);
        Ok(())
    }

    pub(crate) fn set_on_entry(&mut self, hook: Hook) {
        self.on_entry = Some(hook);
    }

    pub(crate) fn set_on_exit(&mut self, hook: Hook) {
        self.on_exit = Some(hook);
    }

    pub(crate) fn fire_entry(&mut self) {
        if let Some(hook) = self.on_entry.as_mut() {
            hook();
        }
    }

    pub(crate) fn fire_exit(&mut self) {
        if let Some(hook) = self.on_exit.as_mut() {
            hook();
        }
    }
}

impl<T: TransitionCode> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .field("on_entry", &self.on_entry.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use uuid::Uuid;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Transition {
        EnemyInProximity,
        EnemyOutOfRange,
    }

    fn state(machine: Uuid, index: usize, name: &str) -> State<Transition> {
        State::new(StateId::new(machine, index), name.to_string())
    }

    #[test]
    fn resolve_returns_linked_target() {
        let machine = Uuid::new_v4();
        let mut idle = state(machine, 0, "Idle");
        let chase = StateId::new(machine, 1);

        idle.link(Transition::EnemyInProximity, chase).unwrap();

        assert_eq!(idle.resolve(Transition::EnemyInProximity), Ok(chase));
        assert_eq!(idle.resolve(Transition::EnemyInProximity), Ok(chase));
    }

    #[test]
    fn resolve_unknown_code_fails_with_state_name() {
        let idle = state(Uuid::new_v4(), 0, "Idle");

        let err = idle.resolve(Transition::EnemyOutOfRange).unwrap_err();

        assert_eq!(
            err,
            MachineError::UnknownTransition {
                state: "Idle".to_string(),
                transition: "EnemyOutOfRange".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_link_is_rejected_and_keeps_first_target() {
        let machine = Uuid::new_v4();
        let mut idle = state(machine, 0, "Idle");
        let chase = StateId::new(machine, 1);
        let attack = StateId::new(machine, 2);

        idle.link(Transition::EnemyInProximity, chase).unwrap();
        let result = idle.link(Transition::EnemyInProximity, attack);

        assert!(matches!(
            result,
            Err(MachineError::DuplicateTransition { .. })
        ));
        assert_eq!(idle.resolve(Transition::EnemyInProximity), Ok(chase));
    }

    #[test]
    fn hooks_are_noops_when_unset() {
        let mut idle = state(Uuid::new_v4(), 0, "Idle");

        assert!(!idle.has_entry_hook());
        assert!(!idle.has_exit_hook());
        idle.fire_entry();
        idle.fire_exit();
    }

    #[test]
    fn last_hook_wins() {
        let mut idle = state(Uuid::new_v4(), 0, "Idle");
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        idle.set_on_entry(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let counter = Arc::clone(&second);
        idle.set_on_entry(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        idle.fire_entry();

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exit_hook_runs_on_fire_exit() {
        let mut chase = state(Uuid::new_v4(), 1, "Chase");
        let exits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&exits);
        chase.set_on_exit(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        chase.fire_exit();
        chase.fire_exit();
        chase.fire_entry();

        assert_eq!(exits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn states_with_same_name_are_distinct() {
        let machine = Uuid::new_v4();
        let a = state(machine, 0, "Idle");
        let b = state(machine, 1, "Idle");

        assert_eq!(a.name(), b.name());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn debug_omits_hook_bodies() {
        let mut idle = state(Uuid::new_v4(), 0, "Idle");
        idle.set_on_exit(Box::new(|| {}));

        let debug = format!("{:?}", idle);
        assert!(debug.contains("\"Idle\""));
        assert!(debug.contains("on_exit: true"));
    }
}
