mod error;
mod nfa;
mod pattern;

pub use error::{PatternError, Result};
pub use nfa::{FaRule, Nfa, NfaDesign, Rulebook, State, StateSet, Symbol};
pub use pattern::Pattern;

#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
