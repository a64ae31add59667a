//! Compilation entry point: expression text to canonical infix and postfix.
//!
//! ```
//! use kleene_lib::Compiler;
//!
//! let compiled = Compiler::new("(aa|b)|abb*").compile().unwrap();
//! assert_eq!(compiled.infix_string(), "(a·a|b)|a·b·b*");
//! assert_eq!(compiled.postfix_string(), "aa·b|ab·b*·|");
//! ```

use crate::Result;
use crate::syntax::{self, Symbol};
use crate::tree::{self, Node};

/// Knobs for a single compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileConfig {
    /// Append the end-of-input marker, producing the augmented `(r)·#`.
    pub end_marker: bool,
}

/// Builder for compiling one expression.
#[derive(Debug, Clone)]
pub struct Compiler<'src> {
    source: &'src str,
    config: CompileConfig,
}

impl<'src> Compiler<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            config: CompileConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CompileConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_end_marker(mut self, end_marker: bool) -> Self {
        self.config.end_marker = end_marker;
        self
    }

    pub fn config(&self) -> CompileConfig {
        self.config
    }

    /// Runs stages 1-4.
    pub fn compile(self) -> Result<Compiled> {
        let symbols = syntax::tokenize(self.source)?;
        let symbols = syntax::insert_concatenation(&symbols);
        let infix = syntax::canonicalize(&symbols)?;
        let postfix = syntax::to_postfix(&infix, self.config.end_marker)?;

        Ok(Compiled { infix, postfix })
    }
}

/// Canonical infix and postfix forms of one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    infix: Vec<Symbol>,
    postfix: Vec<Symbol>,
}

impl Compiled {
    /// Infix after concatenation insertion and quantifier rewriting.
    pub fn infix(&self) -> &[Symbol] {
        &self.infix
    }

    pub fn postfix(&self) -> &[Symbol] {
        &self.postfix
    }

    pub fn infix_string(&self) -> String {
        syntax::render(&self.infix)
    }

    pub fn postfix_string(&self) -> String {
        syntax::render(&self.postfix)
    }

    /// Builds the syntax tree from the postfix form.
    pub fn tree(&self) -> Result<Node> {
        tree::build_tree(&self.postfix)
    }
}

/// One-call form of [`Compiler`].
pub fn regex_to_postfix(source: &str, end_marker: bool) -> Result<Compiled> {
    Compiler::new(source).with_end_marker(end_marker).compile()
}
