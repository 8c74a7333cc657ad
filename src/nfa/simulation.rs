use tracing::trace;

use super::{Rulebook, StateSet};

/// A running automaton: the set of states active after the input read so far.
///
/// Borrowing the rulebook keeps the compiled [`NfaDesign`](super::NfaDesign)
/// read-only, so one design can drive any number of simulations.
#[derive(Debug, Clone)]
pub struct Nfa<'a> {
    current_states: StateSet,
    accept_states: &'a StateSet,
    rulebook: &'a Rulebook,
}

impl<'a> Nfa<'a> {
    pub fn new(
        current_states: &StateSet,
        accept_states: &'a StateSet,
        rulebook: &'a Rulebook,
    ) -> Self {
        Nfa {
            current_states: rulebook.epsilon_closure(current_states),
            accept_states,
            rulebook,
        }
    }

    pub fn current_states(&self) -> &StateSet {
        &self.current_states
    }

    pub fn is_accepting(&self) -> bool {
        !self.current_states.is_disjoint(self.accept_states)
    }

    /// No state is active. Once stuck, the automaton rejects every
    /// continuation of the input.
    pub fn is_stuck(&self) -> bool {
        self.current_states.is_empty()
    }

    pub fn read_character(&mut self, c: char) {
        self.current_states = self.rulebook.next_states(&self.current_states, c);
        trace!(character = ?c, active = self.current_states.len(), "read character");
    }

    pub fn read_string(&mut self, input: &str) {
        for c in input.chars() {
            self.read_character(c);
        }
    }
}
