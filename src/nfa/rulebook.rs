use std::collections::{BTreeSet, VecDeque};

use super::{FaRule, State, StateSet, Symbol};

/// The transition relation of an automaton.
///
/// Rule order carries no meaning and duplicate rules are harmless: every
/// query answers with a set of states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rulebook {
    rules: Vec<FaRule>,
}

impl Rulebook {
    pub fn new(rules: Vec<FaRule>) -> Self {
        Rulebook { rules }
    }

    pub fn rules(&self) -> &[FaRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules_for(&self, state: State, symbol: Symbol) -> impl Iterator<Item = &FaRule> + '_ {
        self.rules
            .iter()
            .filter(move |rule| rule.applies_to(state, symbol))
    }

    pub fn follow_rules_for(
        &self,
        state: State,
        symbol: Symbol,
    ) -> impl Iterator<Item = State> + '_ {
        self.rules_for(state, symbol).map(FaRule::follow)
    }

    // no epsilon closure applied
    pub fn next_states_on(&self, states: &StateSet, symbol: Symbol) -> StateSet {
        states
            .iter()
            .flat_map(|state| self.follow_rules_for(*state, symbol))
            .collect()
    }

    pub fn next_states(&self, states: &StateSet, c: char) -> StateSet {
        self.epsilon_closure(&self.next_states_on(states, Some(c)))
    }

    /// Smallest superset of `states` closed under epsilon rules.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::new();

        let mut q: VecDeque<State> = states.iter().copied().collect();
        while let Some(state) = q.pop_front() {
            if !closure.insert(state) {
                continue;
            }

            q.extend(
                self.follow_rules_for(state, None)
                    .filter(|next| !closure.contains(next)),
            );
        }

        closure
    }

    pub fn alphabet(&self) -> BTreeSet<char> {
        self.rules.iter().filter_map(FaRule::symbol).collect()
    }

    pub fn states(&self) -> StateSet {
        self.rules
            .iter()
            .flat_map(|rule| [rule.from(), rule.to()])
            .collect()
    }
}

impl FromIterator<FaRule> for Rulebook {
    fn from_iter<I: IntoIterator<Item = FaRule>>(iter: I) -> Self {
        Rulebook::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Rulebook {
    type Item = FaRule;
    type IntoIter = std::vec::IntoIter<FaRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}
