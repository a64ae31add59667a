//! One-stop facade over the whole pipeline.

use std::fmt;
use std::str::FromStr;

use crate::automata::{Dfa, Nfa, simulate};
use crate::compile::{CompileConfig, Compiled, Compiler};
use crate::tree::Node;
use crate::{Error, Result};

/// A compiled expression with its tree, NFA and DFA.
///
/// Immutable after construction; matching takes `&self` and may run from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct Regex {
    source: String,
    compiled: Compiled,
    tree: Node,
    nfa: Nfa,
    dfa: Dfa,
}

impl Regex {
    pub fn new(source: &str) -> Result<Self> {
        Self::with_config(source, CompileConfig::default())
    }

    pub fn with_config(source: &str, config: CompileConfig) -> Result<Self> {
        let compiled = Compiler::new(source).with_config(config).compile()?;
        let tree = compiled.tree()?;
        let nfa = Nfa::from_tree(&tree);
        let dfa = Dfa::from_nfa(&nfa);

        Ok(Self {
            source: source.to_owned(),
            compiled,
            tree,
            nfa,
            dfa,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn compiled(&self) -> &Compiled {
        &self.compiled
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// Whole-input match against the DFA.
    pub fn is_match(&self, input: &str) -> bool {
        simulate(&self.dfa, input)
    }

    /// Whole-input match against the NFA.
    pub fn is_match_nfa(&self, input: &str) -> bool {
        simulate(&self.nfa, input)
    }
}

impl FromStr for Regex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
