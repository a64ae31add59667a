//! Read-only export views of NFAs and DFAs.
//!
//! Both automata convert into one [`AutomatonView`], which renders as an
//! indented text dump (optionally colored), as Graphviz DOT, or through
//! `serde` as JSON.

use std::fmt::Write;

use serde::Serialize;

use super::{Dfa, Label, Nfa, StateId};
use crate::Colors;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomatonView {
    /// `"nfa"` or `"dfa"`.
    pub kind: &'static str,
    pub start: StateId,
    pub states: Vec<StateView>,
    pub transitions: Vec<TransitionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateView {
    pub id: StateId,
    pub accepting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionView {
    pub from: StateId,
    /// A single character, or `ε`.
    pub symbol: String,
    pub to: Vec<StateId>,
}

impl Nfa {
    pub fn view(&self) -> AutomatonView {
        AutomatonView {
            kind: "nfa",
            start: self.start(),
            states: self
                .states()
                .map(|id| StateView {
                    id,
                    accepting: id == self.end(),
                })
                .collect(),
            transitions: self
                .transitions()
                .map(|(from, label, to)| TransitionView {
                    from,
                    symbol: label.to_string(),
                    to: to.to_vec(),
                })
                .collect(),
        }
    }

    pub fn dump(&self) -> String {
        self.view().dump(Colors::OFF)
    }
}

impl Dfa {
    pub fn view(&self) -> AutomatonView {
        AutomatonView {
            kind: "dfa",
            start: self.initial(),
            states: self
                .states()
                .map(|id| StateView {
                    id,
                    accepting: self.is_final(id),
                })
                .collect(),
            transitions: self
                .transitions()
                .map(|(from, symbol, to)| TransitionView {
                    from,
                    symbol: Label::Char(symbol).to_string(),
                    to: vec![to],
                })
                .collect(),
        }
    }

    pub fn dump(&self) -> String {
        self.view().dump(Colors::OFF)
    }
}

impl AutomatonView {
    pub fn accepting(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().filter(|s| s.accepting).map(|s| s.id)
    }

    /// Text dump: start and final states, then one line per transition.
    ///
    /// ```text
    /// start S0
    /// final S3
    /// S0 a → S1
    /// S1 ε → S2
    /// ```
    pub fn dump(&self, colors: Colors) -> String {
        let mut out = String::new();
        self.format(&mut out, colors)
            .expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String, c: Colors) -> std::fmt::Result {
        let state = |id: StateId| format!("{}S{}{}", c.blue, id, c.reset);

        writeln!(w, "start {}", state(self.start))?;

        let finals: Vec<_> = self.accepting().map(&state).collect();
        if finals.is_empty() {
            writeln!(w, "final {}∅{}", c.dim, c.reset)?;
        } else {
            writeln!(w, "final {}", finals.join(", "))?;
        }

        for t in &self.transitions {
            let color = if t.symbol == Label::Epsilon.to_string() {
                c.dim
            } else {
                c.green
            };
            let targets: Vec<_> = t.to.iter().map(|&s| state(s)).collect();
            writeln!(
                w,
                "{} {}{}{} {}→{} {}",
                state(t.from),
                color,
                t.symbol,
                c.reset,
                c.dim,
                c.reset,
                targets.join(", ")
            )?;
        }

        Ok(())
    }

    /// Graphviz DOT source. Accepting states are double circles; the start
    /// state is marked by an edge from an invisible point node.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        self.format_dot(&mut out)
            .expect("String write never fails");
        out
    }

    fn format_dot(&self, w: &mut String) -> std::fmt::Result {
        writeln!(w, "digraph {} {{", self.kind)?;
        writeln!(w, "    rankdir=LR;")?;
        writeln!(w, "    node [shape=circle];")?;
        writeln!(w, "    __start [shape=point];")?;
        writeln!(w, "    __start -> {};", self.start)?;

        for id in self.accepting() {
            writeln!(w, "    {id} [shape=doublecircle];")?;
        }

        for t in &self.transitions {
            let label = escape_dot(&t.symbol);
            for to in &t.to {
                writeln!(w, "    {} -> {} [label=\"{}\"];", t.from, to, label)?;
            }
        }

        writeln!(w, "}}")
    }
}

fn escape_dot(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
