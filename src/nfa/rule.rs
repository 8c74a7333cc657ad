use std::fmt;

use super::{State, Symbol};

/// One edge of the automaton.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaRule {
    from: State,
    symbol: Symbol,
    to: State,
}

impl FaRule {
    pub fn new(from: State, symbol: Symbol, to: State) -> Self {
        FaRule { from, symbol, to }
    }

    pub fn on(from: State, c: char, to: State) -> Self {
        FaRule::new(from, Some(c), to)
    }

    pub fn epsilon(from: State, to: State) -> Self {
        FaRule::new(from, None, to)
    }

    pub fn from(&self) -> State {
        self.from
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn to(&self) -> State {
        self.to
    }

    pub fn is_epsilon(&self) -> bool {
        self.symbol.is_none()
    }

    pub fn applies_to(&self, state: State, symbol: Symbol) -> bool {
        self.from == state && self.symbol == symbol
    }

    pub fn follow(&self) -> State {
        self.to
    }
}

impl fmt::Display for FaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(c) => write!(f, "{} --{}--> {}", self.from, c, self.to),
            None => write!(f, "{} --ε--> {}", self.from, self.to),
        }
    }
}
