//! Syntax tree built from postfix symbols.
//!
//! The tree is a closed sum type: leaves carry a character, `ε`, or the end
//! marker; operators carry their operands. Operator arity is fixed by the
//! constructors, and operands cannot be replaced afterwards.

mod build;
mod dump;

#[cfg(test)]
mod build_tests;

pub use build::{MAX_DEPTH, build_tree};

/// A leaf of the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leaf {
    Char(char),
    Epsilon,
    EndMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Alternation,
    Concatenation,
    Star,
}

impl OperatorKind {
    /// Number of operands the operator takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Star => 1,
            Self::Alternation | Self::Concatenation => 2,
        }
    }
}

/// An interior node: an operator and exactly `kind.arity()` operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    kind: OperatorKind,
    operands: Box<[Node]>,
}

impl Operator {
    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// Operands in source order (left before right).
    pub fn operands(&self) -> &[Node] {
        &self.operands
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Leaf(Leaf),
    Operator(Operator),
}

impl Node {
    pub fn char(c: char) -> Self {
        Self::Leaf(Leaf::Char(c))
    }

    pub fn epsilon() -> Self {
        Self::Leaf(Leaf::Epsilon)
    }

    pub fn end_marker() -> Self {
        Self::Leaf(Leaf::EndMarker)
    }

    pub fn alternation(left: Node, right: Node) -> Self {
        Self::operator(OperatorKind::Alternation, [left, right].into())
    }

    pub fn concatenation(left: Node, right: Node) -> Self {
        Self::operator(OperatorKind::Concatenation, [left, right].into())
    }

    pub fn star(operand: Node) -> Self {
        Self::operator(OperatorKind::Star, [operand].into())
    }

    fn operator(kind: OperatorKind, operands: Box<[Node]>) -> Self {
        debug_assert_eq!(operands.len(), kind.arity());
        Self::Operator(Operator { kind, operands })
    }

    /// Total number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Operator(op) => 1 + op.operands.iter().map(Node::size).sum::<usize>(),
        }
    }
}
