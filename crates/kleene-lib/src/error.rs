//! Errors raised by the compilation pipeline.
//!
//! Every stage reports failures synchronously; nothing is retried and a
//! partial result is never returned alongside an error.

use crate::syntax::Span;

/// Errors that can occur while compiling an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Character class that is unterminated, empty, or has a reversed range.
    #[error("malformed character class: {reason}")]
    MalformedClass { span: Span, reason: &'static str },

    /// `(` that is never closed.
    #[error("unterminated group: `(` has no matching `)`")]
    UnterminatedGroup { span: Span },

    /// `)` without an open group.
    #[error("unmatched `)`")]
    UnmatchedParen { span: Span },

    /// `+` or `?` with nothing to repeat.
    #[error("quantifier `{quantifier}` has no operand")]
    MalformedQuantifier { span: Span, quantifier: char },

    /// Operator popped from postfix with too few operands on the stack.
    #[error("operator `{operator}` is missing an operand")]
    StackUnderflow { span: Span, operator: char },

    /// Tree deeper than the builder and the automaton construction accept.
    #[error("expression nested too deeply (limit {limit})")]
    NestingTooDeep { span: Span, limit: usize },

    /// Postfix sequence that does not reduce to exactly one tree.
    #[error("expression does not reduce to a single tree ({roots} roots)")]
    MalformedExpression { span: Option<Span>, roots: usize },
}

impl Error {
    /// Source location of the offending construct, when one exists.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::MalformedClass { span, .. }
            | Self::UnterminatedGroup { span }
            | Self::UnmatchedParen { span }
            | Self::MalformedQuantifier { span, .. }
            | Self::StackUnderflow { span, .. }
            | Self::NestingTooDeep { span, .. } => Some(*span),
            Self::MalformedExpression { span, .. } => *span,
        }
    }
}
