use std::fmt;

use tracing::trace;

use super::{Nfa, Rulebook, State, StateSet};

/// A compiled automaton: start state, accept states and transition rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaDesign {
    start: State,
    accept_states: StateSet,
    rulebook: Rulebook,
}

impl NfaDesign {
    pub fn new(start: State, accept_states: StateSet, rulebook: Rulebook) -> Self {
        NfaDesign {
            start,
            accept_states,
            rulebook,
        }
    }

    pub fn start(&self) -> State {
        self.start
    }

    pub fn accept_states(&self) -> &StateSet {
        &self.accept_states
    }

    pub fn rulebook(&self) -> &Rulebook {
        &self.rulebook
    }

    pub fn into_parts(self) -> (State, StateSet, Rulebook) {
        (self.start, self.accept_states, self.rulebook)
    }

    /// Starts a simulation in the epsilon closure of the start state.
    pub fn to_nfa(&self) -> Nfa<'_> {
        Nfa::new(
            &StateSet::from([self.start]),
            &self.accept_states,
            &self.rulebook,
        )
    }

    pub fn accepts(&self, input: &str) -> bool {
        let mut nfa = self.to_nfa();
        for c in input.chars() {
            if nfa.is_stuck() {
                trace!(input, "no active states left");
                break;
            }
            nfa.read_character(c);
        }
        nfa.is_accepting()
    }
}

impl fmt::Display for NfaDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start: {}", self.start)?;
        let accepts: Vec<String> = self.accept_states.iter().map(State::to_string).collect();
        writeln!(f, "accept: {{{}}}", accepts.join(", "))?;
        for rule in self.rulebook.rules() {
            writeln!(f, "  {rule}")?;
        }
        Ok(())
    }
}
