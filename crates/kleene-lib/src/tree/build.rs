//! Postfix evaluation into a syntax tree.

use super::Node;
use crate::syntax::{Span, Symbol, SymbolKind};
use crate::{Error, Result};

/// Deepest tree [`build_tree`] accepts. A leaf has depth 1.
///
/// Thompson construction, dumps and `Drop` recurse once per level.
pub const MAX_DEPTH: usize = 1024;

/// Builds the syntax tree for a postfix symbol sequence.
///
/// Operands push leaves; `*` pops one node; `|` and `·` pop the right
/// operand, then the left. The sequence must reduce to exactly one node,
/// at most [`MAX_DEPTH`] levels deep.
pub fn build_tree(postfix: &[Symbol]) -> Result<Node> {
    // Each entry pairs a subtree with its depth.
    let mut stack: Vec<(Node, usize)> = Vec::with_capacity(postfix.len());

    for &symbol in postfix {
        let entry = match symbol.kind {
            SymbolKind::Literal => (Node::char(symbol.value), 1),
            SymbolKind::Epsilon => (Node::epsilon(), 1),
            SymbolKind::EndMarker => (Node::end_marker(), 1),
            SymbolKind::Star => {
                let (operand, depth) = pop(&mut stack, symbol)?;
                (Node::star(operand), deeper(depth, symbol)?)
            }
            SymbolKind::Alternation => {
                let (right, r) = pop(&mut stack, symbol)?;
                let (left, l) = pop(&mut stack, symbol)?;
                (Node::alternation(left, right), deeper(l.max(r), symbol)?)
            }
            SymbolKind::Concatenation => {
                let (right, r) = pop(&mut stack, symbol)?;
                let (left, l) = pop(&mut stack, symbol)?;
                (Node::concatenation(left, right), deeper(l.max(r), symbol)?)
            }
            // `+`, `?` and parentheses never survive canonicalization
            // and postfix conversion.
            SymbolKind::Plus
            | SymbolKind::Optional
            | SymbolKind::GroupOpen
            | SymbolKind::GroupClose => {
                return Err(Error::MalformedExpression {
                    span: Some(symbol.span),
                    roots: stack.len(),
                });
            }
        };
        stack.push(entry);
    }

    if stack.len() != 1 {
        return Err(Error::MalformedExpression {
            span: covering_span(postfix),
            roots: stack.len(),
        });
    }

    stack
        .pop()
        .map(|(node, _)| node)
        .ok_or(Error::MalformedExpression {
            span: None,
            roots: 0,
        })
}

fn deeper(depth: usize, operator: Symbol) -> Result<usize> {
    let depth = depth + 1;
    if depth > MAX_DEPTH {
        return Err(Error::NestingTooDeep {
            span: operator.span,
            limit: MAX_DEPTH,
        });
    }
    Ok(depth)
}

fn pop(stack: &mut Vec<(Node, usize)>, operator: Symbol) -> Result<(Node, usize)> {
    stack.pop().ok_or(Error::StackUnderflow {
        span: operator.span,
        operator: operator.value,
    })
}

fn covering_span(symbols: &[Symbol]) -> Option<Span> {
    symbols.iter().map(|s| s.span).reduce(Span::cover)
}
