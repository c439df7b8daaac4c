//! Fixed-capacity registry of states and the transition dispatcher.

use crate::core::{
    MachineError, State, StateId, TransitionCode, TransitionHistory, TransitionRecord,
};
use crate::machine::config::StateConfig;
use chrono::Utc;
use uuid::Uuid;

/// Registration progress of a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachinePhase {
    /// No state registered yet
    Empty,

    /// At least one state registered, free slots remain
    PartiallyConfigured,

    /// Every slot is taken; further registration fails
    FullyConfigured,
}

/// Finite state machine with a fixed number of registration slots.
///
/// States are created with [`add_state`](Self::add_state), registered with
/// [`configure`](Self::configure) and driven with
/// [`perform_transition`](Self::perform_transition). The first registered
/// state becomes the current state.
///
/// Mutation needs `&mut self`, so one instance cannot be configured or driven
/// from several threads at once. Hooks are `Send`, which lets a machine move
/// between threads; sharing one requires an external lock.
#[derive(Debug)]
pub struct StateMachine<T: TransitionCode = i32> {
    id: Uuid,
    capacity: usize,
    states: Vec<State<T>>,
    slots: Vec<StateId>,
    current: Option<StateId>,
    history: TransitionHistory<T>,
    track_history: bool,
}

impl<T: TransitionCode> StateMachine<T> {
    /// Create an empty machine with `capacity` registration slots.
    pub fn new(capacity: usize) -> Self {
        Self::with_history(capacity, None)
    }

    pub(crate) fn with_history(capacity: usize, history: Option<TransitionHistory<T>>) -> Self {
        let track_history = history.is_some();
        Self {
            id: Uuid::new_v4(),
            capacity,
            states: Vec::new(),
            slots: Vec::with_capacity(capacity),
            current: None,
            history: history.unwrap_or_default(),
            track_history,
        }
    }

    /// Create a new, unregistered state and return its handle.
    ///
    /// The state can be linked to and wired before it is registered.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateId {
        let id = StateId::new(self.id, self.states.len());
        let state = State::new(id, name.into());
        tracing::trace!(state = state.name(), id = %id, "created state");
        self.states.push(state);
        id
    }

    /// Register a state and return its configuration view.
    ///
    /// The first registered state becomes the current state. Fails if the
    /// handle belongs to another machine, if the state is already registered,
    /// or if every slot is taken; nothing changes on failure.
    pub fn configure(&mut self, id: StateId) -> Result<StateConfig<'_, T>, MachineError> {
        if !self.owns(id) {
            return Err(MachineError::InvalidState { id });
        }

        if self.slots.contains(&id) {
            return Err(MachineError::DuplicateState {
                state: self.states[id.index()].name().to_string(),
            });
        }

        if self.slots.len() >= self.capacity {
            return Err(MachineError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        if self.current.is_none() {
            self.current = Some(id);
        }
        self.slots.push(id);

        tracing::debug!(
            state = self.states[id.index()].name(),
            slot = self.slots.len() - 1,
            capacity = self.capacity,
            "configured state"
        );

        Ok(self.config_view(id))
    }

    /// Configuration view of a state without registering it.
    pub fn edit(&mut self, id: StateId) -> Result<StateConfig<'_, T>, MachineError> {
        if !self.owns(id) {
            return Err(MachineError::InvalidState { id });
        }

        Ok(self.config_view(id))
    }

    /// Move to the state linked to `transition` from the current state.
    ///
    /// The current state's exit hook runs, then the cursor moves, then the
    /// target's entry hook runs. Unknown codes and unregistered targets are
    /// detected before any hook runs and leave the current state unchanged.
    /// A panicking hook is not rolled back.
    pub fn perform_transition(&mut self, transition: T) -> Result<StateId, MachineError> {
        let from = self.current.ok_or(MachineError::NotConfigured)?;
        let target = self.states[from.index()].resolve(transition)?;

        let Some(to) = self.slots.iter().copied().find(|slot| *slot == target) else {
            let target_name = self.states[target.index()].name().to_string();
            tracing::warn!(
                from = self.states[from.index()].name(),
                target_state = %target_name,
                transition = ?transition,
                "transition target is not configured"
            );
            return Err(MachineError::UnregisteredTarget {
                target: target_name,
            });
        };

        self.states[from.index()].fire_exit();
        self.current = Some(to);
        self.states[to.index()].fire_entry();

        tracing::debug!(
            from = self.states[from.index()].name(),
            to = self.states[to.index()].name(),
            transition = ?transition,
            "performed transition"
        );

        if self.track_history {
            self.history.record(TransitionRecord {
                from,
                to,
                transition,
                timestamp: Utc::now(),
            });
        }

        Ok(to)
    }

    /// Handle of the current state, `None` until a state is registered.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// Name of the current state, `None` until a state is registered.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current.map(|id| self.states[id.index()].name())
    }

    /// Look up a state created by this machine, registered or not.
    pub fn state(&self, id: StateId) -> Option<&State<T>> {
        if self.owns(id) {
            self.states.get(id.index())
        } else {
            None
        }
    }

    /// Registered states in registration order.
    pub fn registered(&self) -> impl Iterator<Item = &State<T>> + '_ {
        self.slots.iter().map(|id| &self.states[id.index()])
    }

    /// Whether the handle occupies one of this machine's slots.
    pub fn is_registered(&self, id: StateId) -> bool {
        self.slots.contains(&id)
    }

    /// Number of registration slots fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no state has been registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether every slot is taken.
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Registration progress, derived from the number of taken slots.
    pub fn phase(&self) -> MachinePhase {
        if self.slots.is_empty() {
            MachinePhase::Empty
        } else if self.is_full() {
            MachinePhase::FullyConfigured
        } else {
            MachinePhase::PartiallyConfigured
        }
    }

    /// Completed transitions; always empty unless history tracking is enabled.
    pub fn history(&self) -> &TransitionHistory<T> {
        &self.history
    }

    /// Whether completed transitions are recorded.
    pub fn is_tracking_history(&self) -> bool {
        self.track_history
    }

    fn owns(&self, id: StateId) -> bool {
        id.machine() == self.id && id.index() < self.states.len()
    }

    fn config_view(&mut self, id: StateId) -> StateConfig<'_, T> {
        let machine = self.id;
        let arena_len = self.states.len();
        StateConfig::new(&mut self.states[id.index()], machine, arena_len)
    }
}
