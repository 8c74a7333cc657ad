use tracing::{debug, trace};

use super::Pattern;
use crate::nfa::{FaRule, NfaDesign, Rulebook, State, StateSet};

/// Thompson construction. Each sub-pattern is built into its own fragment
/// over fresh states, then wired to its siblings with epsilon rules.
pub(crate) struct Builder {
    rules: Vec<FaRule>,
}

struct Fragment {
    start: State,
    accept_states: StateSet,
}

impl Builder {
    pub fn build(pattern: &Pattern) -> NfaDesign {
        let mut builder = Builder { rules: vec![] };
        let fragment = builder.build_root(pattern);

        debug!(
            pattern = %pattern,
            start = %fragment.start,
            accept_states = fragment.accept_states.len(),
            rules = builder.rules.len(),
            "compiled pattern"
        );

        NfaDesign::new(
            fragment.start,
            fragment.accept_states,
            Rulebook::new(builder.rules),
        )
    }

    fn build_root(&mut self, pattern: &Pattern) -> Fragment {
        match pattern {
            Pattern::Empty => self.build_empty(),
            Pattern::Literal(c) => self.build_literal(*c),
            Pattern::Concatenate(first, second) => self.build_concatenate(first, second),
            Pattern::Choose(first, second) => self.build_choose(first, second),
            Pattern::Repeat(inner) => self.build_repeat(inner),
        }
    }

    fn build_empty(&mut self) -> Fragment {
        let start = State::fresh();
        trace!(%start, "empty");

        Fragment {
            start,
            accept_states: StateSet::from([start]),
        }
    }

    fn build_literal(&mut self, c: char) -> Fragment {
        let start = State::fresh();
        let accept = State::fresh();
        self.rules.push(FaRule::on(start, c, accept));
        trace!(%start, %accept, character = ?c, "literal");

        Fragment {
            start,
            accept_states: StateSet::from([accept]),
        }
    }

    fn build_concatenate(&mut self, first: &Pattern, second: &Pattern) -> Fragment {
        let first = self.build_root(first);
        let second = self.build_root(second);

        for state in first.accept_states.iter() {
            self.rules.push(FaRule::epsilon(*state, second.start));
        }
        trace!(start = %first.start, joint = %second.start, "concatenate");

        Fragment {
            start: first.start,
            accept_states: second.accept_states,
        }
    }

    fn build_choose(&mut self, first: &Pattern, second: &Pattern) -> Fragment {
        let first = self.build_root(first);
        let second = self.build_root(second);

        let start = State::fresh();
        self.rules.push(FaRule::epsilon(start, first.start));
        self.rules.push(FaRule::epsilon(start, second.start));
        trace!(%start, "choose");

        Fragment {
            start,
            accept_states: &first.accept_states | &second.accept_states,
        }
    }

    fn build_repeat(&mut self, inner: &Pattern) -> Fragment {
        let inner = self.build_root(inner);

        let start = State::fresh();
        self.rules.push(FaRule::epsilon(start, inner.start));
        for state in inner.accept_states.iter() {
            self.rules.push(FaRule::epsilon(*state, inner.start));
        }
        trace!(%start, "repeat");

        let mut accept_states = inner.accept_states;
        accept_states.insert(start);

        Fragment {
            start,
            accept_states,
        }
    }
}
