//! Transition history tracking.
//!
//! A machine built with history enabled records every completed transition,
//! optionally keeping only the most recent ones.

use super::id::{StateId, TransitionCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single completed transition.
///
/// # Example
///
/// ```rust
/// use statelink::StateMachineBuilder;
///
/// let mut machine = StateMachineBuilder::new()
///     .capacity(2)
///     .track_history(true)
///     .build()
///     .unwrap();
/// let a = machine.add_state("A");
/// let b = machine.add_state("B");
/// machine.configure(a).unwrap().link(0, b).unwrap();
/// machine.configure(b).unwrap();
///
/// machine.perform_transition(0).unwrap();
///
/// let record = &machine.history().transitions()[0];
/// assert_eq!(record.from, a);
/// assert_eq!(record.to, b);
/// assert_eq!(record.transition, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord<T> {
    /// The state being transitioned from
    pub from: StateId,
    /// The state being transitioned to
    pub to: StateId,
    /// The code that triggered the transition
    pub transition: T,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of completed transitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionHistory<T> {
    transitions: Vec<TransitionRecord<T>>,
    limit: Option<usize>,
}

impl<T: TransitionCode> Default for TransitionHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TransitionCode> TransitionHistory<T> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` records.
    ///
    /// Once full, recording drops the oldest record first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Maximum number of retained records, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a record, evicting the oldest ones beyond the limit.
    pub fn record(&mut self, record: TransitionRecord<T>) {
        self.transitions.push(record);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            if excess > 0 {
                self.transitions.drain(..excess);
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of each record. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|record| record.to));
        path
    }

    /// Calculate total duration from first to last retained record.
    ///
    /// Returns `None` if there are no records. Wall-clock timestamps can go
    /// backwards; such a span is reported as zero.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        Some(
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .unwrap_or_default(),
        )
    }

    /// Get all retained records, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord<T>] {
        &self.transitions
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no record is retained.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Drop every record, keeping the limit.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
