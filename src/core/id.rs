//! State handles and transition code keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use uuid::Uuid;

/// Handle to a state stored in a [`StateMachine`](crate::StateMachine).
///
/// Handles are cheap to copy and compare. Identity is the handle itself:
/// two states created with the same name get distinct handles. A handle is
/// only meaningful to the machine that created it; every other machine
/// rejects it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StateId {
    machine: Uuid,
    index: usize,
}

impl StateId {
    pub(crate) fn new(machine: Uuid, index: usize) -> Self {
        Self { machine, index }
    }

    /// Position of the state in its machine's arena, in creation order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn machine(&self) -> Uuid {
        self.machine
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Key identifying an edge out of a state.
///
/// Implemented for every `Copy + Eq + Hash + Debug` type, so plain integers
/// and fieldless enums both work as transition codes.
///
/// # Example
///
/// ```rust
/// use statelink::StateMachine;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Signal {
///     Go,
///     Stop,
/// }
///
/// let mut machine: StateMachine<Signal> = StateMachine::new(2);
/// let red = machine.add_state("Red");
/// let green = machine.add_state("Green");
///
/// machine.configure(red).unwrap().link(Signal::Go, green).unwrap();
/// machine.configure(green).unwrap().link(Signal::Stop, red).unwrap();
///
/// machine.perform_transition(Signal::Go).unwrap();
/// assert_eq!(machine.current_state(), Some(green));
/// ```
pub trait TransitionCode: Copy + Eq + Hash + fmt::Debug + 'static {}

impl<T> TransitionCode for T where T: Copy + Eq + Hash + fmt::Debug + 'static {}
