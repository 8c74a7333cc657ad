use std::sync::atomic::{AtomicUsize, Ordering};

/// An automaton state.
///
/// States carry no data beyond their identity. Every call to [`State::fresh`]
/// returns a state never handed out before, so automata compiled separately
/// never share a state even when they are structurally identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("q{_0}")]
pub struct State(usize);

impl State {
    /// Draws from a process-wide counter rather than a per-compilation arena,
    /// so states from separate compilations never compare equal.
    pub fn fresh() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        State(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn index(&self) -> usize {
        self.0
    }
}
