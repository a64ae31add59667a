//! Finite automata: Thompson NFA, subset-construction DFA, and the
//! simulator that runs either one over an input string.

mod dfa;
mod dump;
mod nfa;
mod simulate;
mod trace;

#[cfg(test)]
mod dfa_tests;
#[cfg(test)]
mod nfa_tests;
#[cfg(test)]
mod trace_tests;

use std::fmt;

pub use dfa::Dfa;
pub use dump::{AutomatonView, StateView, TransitionView};
pub use nfa::{Fragment, Nfa};
pub use simulate::{simulate, simulate_traced};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

/// Index of a state within one automaton.
pub type StateId = u32;

/// Transition label. Epsilon labels only occur in NFAs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Char(char),
    Epsilon,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Epsilon => write!(f, "{}", crate::syntax::EPSILON),
        }
    }
}

/// What the simulator needs from an automaton.
///
/// A configuration is the automaton's position after consuming a prefix of
/// the input: a single state for a DFA, an ε-closed set of states for an NFA.
pub trait Automaton {
    type Config: Clone;

    /// Configuration before any input is consumed.
    fn initial(&self) -> Self::Config;

    /// Configuration after consuming `symbol`, or `None` when no move exists.
    fn advance(&self, config: &Self::Config, symbol: char) -> Option<Self::Config>;

    fn is_accepting(&self, config: &Self::Config) -> bool;

    /// States making up a configuration, in ascending order.
    fn active_states(&self, config: &Self::Config) -> Vec<StateId>;
}
