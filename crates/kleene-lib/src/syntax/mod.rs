//! Symbol-level stages of the pipeline.
//!
//! Stages 1-4 thread a flat `Vec<Symbol>` through each other:
//!
//! ```text
//! &str ─tokenize→ [Symbol] ─insert_concatenation→ [Symbol]
//!      ─canonicalize→ [Symbol] ─to_postfix→ [Symbol]
//! ```
//!
//! Each stage returns a fresh sequence; input sequences are never mutated.

mod canonicalize;
mod concat;
mod lexer;
mod postfix;

#[cfg(test)]
mod canonicalize_tests;
#[cfg(test)]
mod concat_tests;

use std::fmt;

pub use canonicalize::{canonicalize, operand_span};
pub use concat::insert_concatenation;
pub use lexer::tokenize;
pub use postfix::{precedence, to_postfix};

/// Reserved glyph for the empty string.
pub const EPSILON: char = 'ε';
/// Glyph for explicit concatenation.
pub const CONCAT: char = '·';
/// Glyph for the end-of-input marker appended by augmented postfix.
pub const END_MARKER: char = '#';

/// Byte range into the expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Offsets past `u32::MAX` saturate; expressions that long are not
    /// meaningful input.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: u32::try_from(start).unwrap_or(u32::MAX),
            end: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// What a symbol means to the later stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Literal,
    Epsilon,
    Alternation,
    Concatenation,
    Star,
    Plus,
    Optional,
    GroupOpen,
    GroupClose,
    /// Augmentation marker; only ever produced by the postfix converter.
    EndMarker,
}

impl SymbolKind {
    /// Postfix quantifiers: `*`, `+`, `?`.
    pub fn is_quantifier(self) -> bool {
        matches!(self, Self::Star | Self::Plus | Self::Optional)
    }

    /// Symbols that become tree leaves.
    pub fn is_operand(self) -> bool {
        matches!(self, Self::Literal | Self::Epsilon | Self::EndMarker)
    }
}

/// One token of the working expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub value: char,
    pub span: Span,
}

impl Symbol {
    pub fn new(kind: SymbolKind, value: char, span: Span) -> Self {
        Self { kind, value, span }
    }

    pub fn literal(c: char, span: Span) -> Self {
        Self::new(SymbolKind::Literal, c, span)
    }

    pub fn epsilon(span: Span) -> Self {
        Self::new(SymbolKind::Epsilon, EPSILON, span)
    }

    pub fn alternation(span: Span) -> Self {
        Self::new(SymbolKind::Alternation, '|', span)
    }

    pub fn concatenation(span: Span) -> Self {
        Self::new(SymbolKind::Concatenation, CONCAT, span)
    }

    pub fn star(span: Span) -> Self {
        Self::new(SymbolKind::Star, '*', span)
    }

    pub fn group_open(span: Span) -> Self {
        Self::new(SymbolKind::GroupOpen, '(', span)
    }

    pub fn group_close(span: Span) -> Self {
        Self::new(SymbolKind::GroupClose, ')', span)
    }

    pub fn end_marker(span: Span) -> Self {
        Self::new(SymbolKind::EndMarker, END_MARKER, span)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Concatenates symbol values into their textual form.
pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.value).collect()
}
