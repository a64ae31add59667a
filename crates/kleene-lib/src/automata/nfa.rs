//! Thompson construction.
//!
//! Every tree node compiles to a [`Fragment`] with one entry and one exit
//! state. Combinators wire fragments together with ε-transitions:
//!
//! ```text
//! c      entry ─c→ exit
//! ε, #   entry ─ε→ exit
//! L·R    L.exit ─ε→ R.entry
//! L|R    entry ─ε→ L.entry, R.entry;  L.exit, R.exit ─ε→ exit
//! F*     entry ─ε→ F.entry, exit;  F.exit ─ε→ F.entry, exit
//! ```

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::{Automaton, Label, StateId};
use crate::tree::{Leaf, Node, OperatorKind};

/// A partial automaton with single entry and exit states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub entry: StateId,
    pub exit: StateId,
}

impl Fragment {
    pub fn new(entry: StateId, exit: StateId) -> Self {
        Self { entry, exit }
    }
}

/// Nondeterministic automaton with ε-moves, one start and one end state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    state_count: u32,
    start: StateId,
    end: StateId,
    transitions: IndexMap<(StateId, Label), Vec<StateId>>,
}

impl Nfa {
    /// Compiles a syntax tree with Thompson's construction.
    pub fn from_tree(root: &Node) -> Self {
        let mut builder = Builder::default();
        let fragment = builder.build(root);

        Self {
            state_count: builder.next,
            start: fragment.entry,
            end: fragment.exit,
            transitions: builder.transitions,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    /// The single accepting state.
    pub fn end(&self) -> StateId {
        self.end
    }

    pub fn state_count(&self) -> usize {
        self.state_count as usize
    }

    pub fn states(&self) -> impl Iterator<Item = StateId> {
        0..self.state_count
    }

    /// Transitions in insertion order, one entry per `(from, label)`.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Label, &[StateId])> + '_ {
        self.transitions
            .iter()
            .map(|(&(from, label), to)| (from, label, to.as_slice()))
    }

    pub fn targets(&self, from: StateId, label: Label) -> &[StateId] {
        self.transitions
            .get(&(from, label))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every non-ε label, sorted.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.transitions
            .keys()
            .filter_map(|&(_, label)| match label {
                Label::Char(c) => Some(c),
                Label::Epsilon => None,
            })
            .collect()
    }

    /// States reachable from `states` through ε-transitions alone,
    /// including `states` themselves.
    pub fn epsilon_closure(&self, states: impl IntoIterator<Item = StateId>) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        let mut stack: Vec<StateId> = states.into_iter().collect();

        while let Some(state) = stack.pop() {
            if !closure.insert(state) {
                continue;
            }
            stack.extend(self.targets(state, Label::Epsilon));
        }

        closure
    }

    /// ε-closure of the states reachable from `states` on `symbol`.
    pub fn step(&self, states: &BTreeSet<StateId>, symbol: char) -> BTreeSet<StateId> {
        let moved = states
            .iter()
            .flat_map(|&s| self.targets(s, Label::Char(symbol)).iter().copied());
        self.epsilon_closure(moved)
    }
}

impl Automaton for Nfa {
    type Config = BTreeSet<StateId>;

    fn initial(&self) -> Self::Config {
        self.epsilon_closure([self.start])
    }

    fn advance(&self, config: &Self::Config, symbol: char) -> Option<Self::Config> {
        let next = self.step(config, symbol);
        (!next.is_empty()).then_some(next)
    }

    fn is_accepting(&self, config: &Self::Config) -> bool {
        config.contains(&self.end)
    }

    fn active_states(&self, config: &Self::Config) -> Vec<StateId> {
        config.iter().copied().collect()
    }
}

#[derive(Default)]
struct Builder {
    next: StateId,
    transitions: IndexMap<(StateId, Label), Vec<StateId>>,
}

impl Builder {
    fn add_state(&mut self) -> StateId {
        let id = self.next;
        self.next += 1;
        id
    }

    fn connect(&mut self, from: StateId, label: Label, to: StateId) {
        self.transitions.entry((from, label)).or_default().push(to);
    }

    fn build(&mut self, node: &Node) -> Fragment {
        match node {
            Node::Leaf(Leaf::Char(c)) => self.single(Label::Char(*c)),
            Node::Leaf(Leaf::Epsilon | Leaf::EndMarker) => self.single(Label::Epsilon),
            Node::Operator(op) => {
                let operands = op.operands();
                match op.kind() {
                    OperatorKind::Concatenation => {
                        let left = self.build(&operands[0]);
                        let right = self.build(&operands[1]);
                        self.concatenation(left, right)
                    }
                    OperatorKind::Alternation => {
                        let left = self.build(&operands[0]);
                        let right = self.build(&operands[1]);
                        self.alternation(left, right)
                    }
                    OperatorKind::Star => {
                        let inner = self.build(&operands[0]);
                        self.star(inner)
                    }
                }
            }
        }
    }

    fn single(&mut self, label: Label) -> Fragment {
        let entry = self.add_state();
        let exit = self.add_state();
        self.connect(entry, label, exit);
        Fragment::new(entry, exit)
    }

    fn concatenation(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.connect(left.exit, Label::Epsilon, right.entry);
        Fragment::new(left.entry, right.exit)
    }

    fn alternation(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let entry = self.add_state();
        let exit = self.add_state();

        self.connect(entry, Label::Epsilon, left.entry);
        self.connect(entry, Label::Epsilon, right.entry);
        self.connect(left.exit, Label::Epsilon, exit);
        self.connect(right.exit, Label::Epsilon, exit);

        Fragment::new(entry, exit)
    }

    fn star(&mut self, inner: Fragment) -> Fragment {
        let entry = self.add_state();
        let exit = self.add_state();

        self.connect(entry, Label::Epsilon, inner.entry);
        self.connect(inner.exit, Label::Epsilon, inner.entry);
        self.connect(entry, Label::Epsilon, exit);
        self.connect(inner.exit, Label::Epsilon, exit);

        Fragment::new(entry, exit)
    }
}
