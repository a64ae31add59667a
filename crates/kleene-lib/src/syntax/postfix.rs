//! Infix to postfix conversion (shunting-yard).
//!
//! Precedence lives in one table, [`precedence`]; the conversion loop only
//! compares numbers and never special-cases an operator.

use super::{Span, Symbol, SymbolKind};
use crate::{Error, Result};

/// Binding strength of an operator. Higher binds tighter; all operators are
/// left-associative. Returns `None` for non-operators.
///
/// | operator        | precedence |
/// |-----------------|------------|
/// | `*` `+` `?`     | 3          |
/// | `·`             | 2          |
/// | `\|`            | 1          |
pub fn precedence(kind: SymbolKind) -> Option<u8> {
    match kind {
        SymbolKind::Star | SymbolKind::Plus | SymbolKind::Optional => Some(3),
        SymbolKind::Concatenation => Some(2),
        SymbolKind::Alternation => Some(1),
        _ => None,
    }
}

/// Converts an infix symbol sequence (with explicit `·`) into postfix order.
///
/// With `end_marker` set, the output is augmented to `(r)·#`: an end marker
/// followed by a concatenation is appended after the converted expression.
pub fn to_postfix(symbols: &[Symbol], end_marker: bool) -> Result<Vec<Symbol>> {
    let mut output = Vec::with_capacity(symbols.len() + 2);
    let mut stack: Vec<Symbol> = Vec::new();

    for &symbol in symbols {
        match symbol.kind {
            SymbolKind::GroupOpen => stack.push(symbol),
            SymbolKind::GroupClose => loop {
                match stack.pop() {
                    Some(top) if top.kind == SymbolKind::GroupOpen => break,
                    Some(top) => output.push(top),
                    None => return Err(Error::UnmatchedParen { span: symbol.span }),
                }
            },
            kind => match precedence(kind) {
                Some(prec) => {
                    while let Some(&top) = stack.last() {
                        let binds_tighter = precedence(top.kind).is_some_and(|p| p >= prec);
                        if !binds_tighter {
                            break;
                        }
                        output.push(top);
                        stack.pop();
                    }
                    stack.push(symbol);
                }
                None => output.push(symbol),
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind == SymbolKind::GroupOpen {
            return Err(Error::UnterminatedGroup { span: top.span });
        }
        output.push(top);
    }

    if end_marker {
        let end = symbols.last().map_or(0, |s| s.span.end as usize);
        let span = Span::new(end, end);
        output.push(Symbol::end_marker(span));
        output.push(Symbol::concatenation(span));
    }

    Ok(output)
}
