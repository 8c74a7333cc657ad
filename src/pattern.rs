use std::fmt;

use self::builder::Builder;
use crate::{error::PatternError, nfa::NfaDesign};

mod builder;


/// A regular expression built from combinators.
///
/// ```text
/// Empty            ""      precedence 3
/// Literal(c)       c       precedence 3
/// Repeat(p)        p*      precedence 2
/// Concatenate(a,b) ab      precedence 1
/// Choose(a,b)      a|b     precedence 0
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    Empty,
    Literal(char),
    Concatenate(Box<Pattern>, Box<Pattern>),
    Choose(Box<Pattern>, Box<Pattern>),
    Repeat(Box<Pattern>),
}

impl Pattern {
    pub fn empty() -> Self {
        Pattern::Empty
    }

    pub fn literal(c: char) -> Self {
        Pattern::Literal(c)
    }

    pub fn literal_str(s: &str) -> crate::Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Pattern::Literal(c)),
            _ => Err(PatternError::InvalidLiteral(s.to_string())),
        }
    }

    pub fn concatenate(first: Pattern, second: Pattern) -> Self {
        Pattern::Concatenate(Box::new(first), Box::new(second))
    }

    pub fn choose(first: Pattern, second: Pattern) -> Self {
        Pattern::Choose(Box::new(first), Box::new(second))
    }

    pub fn repeat(pattern: Pattern) -> Self {
        Pattern::Repeat(Box::new(pattern))
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Pattern::Empty | Pattern::Literal(_) => 3,
            Pattern::Repeat(_) => 2,
            Pattern::Concatenate(..) => 1,
            Pattern::Choose(..) => 0,
        }
    }

    pub fn bracket(&self, outer_precedence: u8) -> String {
        if self.precedence() < outer_precedence {
            format!("({self})")
        } else {
            self.to_string()
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    // every call allocates new states
    pub fn to_nfa_design(&self) -> NfaDesign {
        Builder::build(self)
    }

    pub fn matches(&self, input: &str) -> bool {
        self.to_nfa_design().accepts(input)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precedence = self.precedence();
        match self {
            Pattern::Empty => Ok(()),
            Pattern::Literal(c) => write!(f, "{c}"),
            Pattern::Concatenate(first, second) => write!(
                f,
                "{}{}",
                first.bracket(precedence),
                second.bracket(precedence)
            ),
            Pattern::Choose(first, second) => write!(
                f,
                "{}|{}",
                first.bracket(precedence),
                second.bracket(precedence)
            ),
            Pattern::Repeat(pattern) => write!(f, "{}*", pattern.bracket(precedence)),
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{self}/")
    }
}

impl From<char> for Pattern {
    fn from(c: char) -> Self {
        Pattern::Literal(c)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = PatternError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Pattern::literal_str(s)
    }
}
