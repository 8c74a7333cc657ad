use std::collections::BTreeSet;

pub use self::{
    design::NfaDesign, rule::FaRule, rulebook::Rulebook, simulation::Nfa, state::State,
};

mod design;
mod rule;
mod rulebook;
mod simulation;
mod state;


/// Input consumed by a transition. `None` is an epsilon move.
pub type Symbol = Option<char>;

/// A configuration of the automaton: the states currently active.
pub type StateSet = BTreeSet<State>;
