//! Whole-machine wiring audit using Validation.

use crate::core::{StateId, TransitionCode};
use crate::machine::StateMachine;
use crate::validation::violations::WiringViolation;
use std::collections::{HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

impl<T: TransitionCode> StateMachine<T> {
    /// Audit the wiring of the registered states, accumulating ALL violations.
    ///
    /// Reports every link out of a registered state whose target is not
    /// registered, and every registered state that cannot be reached from
    /// the first registered state. The machine is not modified, and
    /// [`perform_transition`](Self::perform_transition) keeps validating
    /// targets on its own.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statelink::StateMachine;
    ///
    /// let mut machine = StateMachine::new(2);
    /// let idle = machine.add_state("Idle");
    /// let chase = machine.add_state("Chase");
    /// machine.configure(idle).unwrap().link(0, chase).unwrap();
    ///
    /// assert!(machine.audit().is_failure());
    ///
    /// machine.configure(chase).unwrap();
    /// assert!(machine.audit().is_success());
    /// ```
    pub fn audit(&self) -> Validation<(), NonEmptyVec<WiringViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<WiringViolation>>> = Vec::new();

        // Dangling links
        for state in self.registered() {
            for (transition, target) in sorted_links(state.transitions()) {
                let check = if self.is_registered(target) {
                    Validation::success(())
                } else {
                    Validation::fail(WiringViolation::UnregisteredTarget {
                        state: state.name().to_string(),
                        transition: format!("{:?}", transition),
                        target: self.state_name(target),
                    })
                };
                checks.push(check);
            }
        }

        // Reachability from the first registered state
        let reachable = self.reachable_from_start();
        for state in self.registered() {
            let check = if reachable.contains(&state.id()) {
                Validation::success(())
            } else {
                Validation::fail(WiringViolation::Unreachable {
                    state: state.name().to_string(),
                })
            };
            checks.push(check);
        }

        let result = Validation::all_vec(checks).map(|_| ());
        if result.is_failure() {
            tracing::debug!(states = self.len(), "wiring audit found violations");
        }
        result
    }

    fn reachable_from_start(&self) -> HashSet<StateId> {
        let mut seen = HashSet::new();
        let Some(start) = self.registered().next().map(|state| state.id()) else {
            return seen;
        };

        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(id) = queue.pop_front() {
            let Some(state) = self.state(id) else {
                continue;
            };
            for (_, target) in state.transitions() {
                if self.is_registered(target) && seen.insert(target) {
                    queue.push_back(target);
                }
            }
        }
        seen
    }

    fn state_name(&self, id: StateId) -> String {
        self.state(id)
            .map(|state| state.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}

/// Links ordered by target, then code, so reports are stable.
fn sorted_links<T: TransitionCode>(
    links: impl Iterator<Item = (T, StateId)>,
) -> Vec<(T, StateId)> {
    let mut links: Vec<(T, StateId)> = links.collect();
    links.sort_by_key(|(transition, target)| (target.index(), format!("{:?}", transition)));
    links
}
