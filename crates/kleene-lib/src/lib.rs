//! Kleene: regular expressions compiled to finite automata.
//!
//! The pipeline is strictly linear, each stage consuming the previous
//! stage's output:
//!
//! ```text
//! tokenize → insert `·` → canonicalize `+`/`?` → postfix → tree → NFA → DFA
//! ```
//!
//! # Example
//!
//! ```
//! use kleene_lib::Regex;
//!
//! let re = Regex::new("c(aa|b)*|b·w").expect("valid expression");
//! assert!(re.is_match("caab"));
//! assert!(re.is_match("bw"));
//! assert!(!re.is_match("ca"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod automata;
pub mod colors;
pub mod compile;
pub mod diagnostics;
pub mod error;
pub mod regex;
pub mod syntax;
pub mod tree;

#[cfg(test)]
mod diagnostics_tests;
#[cfg(test)]
pub mod test_utils;

pub use automata::{
    Automaton, AutomatonView, Dfa, Label, Nfa, NoopTracer, PrintTracer, StateId, Tracer, Verbosity,
    simulate, simulate_traced,
};
pub use colors::Colors;
pub use compile::{CompileConfig, Compiled, Compiler, regex_to_postfix};
pub use diagnostics::ErrorPrinter;
pub use error::Error;
pub use regex::Regex;
pub use syntax::{Span, Symbol, SymbolKind};
pub use tree::Node;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
