//! Subset construction.

use std::collections::{BTreeSet, VecDeque};

use indexmap::{IndexMap, IndexSet};

use super::{Automaton, Nfa, StateId};

/// Deterministic automaton: at most one move per `(state, symbol)`.
///
/// States are numbered in discovery order, starting with the initial
/// state at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    finals: Vec<bool>,
    transitions: IndexMap<(StateId, char), StateId>,
}

impl Dfa {
    /// Determinizes an NFA.
    ///
    /// Each DFA state stands for an ε-closed set of NFA states; sets are
    /// discovered breadth-first, and symbols are tried in sorted order, so
    /// numbering is stable for a given NFA. A set is final when it holds the
    /// NFA's end state. An empty move creates no transition.
    pub fn from_nfa(nfa: &Nfa) -> Self {
        let alphabet = nfa.alphabet();
        let mut subsets: IndexSet<BTreeSet<StateId>> = IndexSet::new();
        let mut worklist: VecDeque<usize> = VecDeque::new();
        let mut transitions = IndexMap::new();

        let (initial, _) = subsets.insert_full(nfa.epsilon_closure([nfa.start()]));
        worklist.push_back(initial);

        while let Some(index) = worklist.pop_front() {
            let Some(set) = subsets.get_index(index).cloned() else {
                continue;
            };

            for &symbol in &alphabet {
                let next = nfa.step(&set, symbol);
                if next.is_empty() {
                    continue;
                }

                let (target, discovered) = subsets.insert_full(next);
                if discovered {
                    worklist.push_back(target);
                }
                transitions.insert((index as StateId, symbol), target as StateId);
            }
        }

        let finals = subsets.iter().map(|set| set.contains(&nfa.end())).collect();

        Self {
            finals,
            transitions,
        }
    }

    pub fn initial(&self) -> StateId {
        0
    }

    pub fn state_count(&self) -> usize {
        self.finals.len()
    }

    pub fn states(&self) -> impl Iterator<Item = StateId> {
        0..self.finals.len() as StateId
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.get(state as usize).copied().unwrap_or(false)
    }

    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states().filter(|&s| self.is_final(s))
    }

    pub fn next(&self, from: StateId, symbol: char) -> Option<StateId> {
        self.transitions.get(&(from, symbol)).copied()
    }

    /// Transitions in discovery order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, char, StateId)> + '_ {
        self.transitions
            .iter()
            .map(|(&(from, symbol), &to)| (from, symbol, to))
    }
}

impl Automaton for Dfa {
    type Config = StateId;

    fn initial(&self) -> Self::Config {
        Dfa::initial(self)
    }

    fn advance(&self, config: &Self::Config, symbol: char) -> Option<Self::Config> {
        self.next(*config, symbol)
    }

    fn is_accepting(&self, config: &Self::Config) -> bool {
        self.is_final(*config)
    }

    fn active_states(&self, config: &Self::Config) -> Vec<StateId> {
        vec![*config]
    }
}
