//! Rewrites `+` and `?` in terms of `*`, `·`, `|` and `ε`.
//!
//! ```text
//! X+  →  (X·X*)
//! X?  →  (X|ε)
//! ```
//!
//! The output is built by appending to a fresh vector. When a quantifier is
//! reached, its operand is found at the tail of the output produced so far,
//! split off, and replaced by the rewritten group. Chained quantifiers such
//! as `a+?` therefore apply to the group the previous rewrite produced.

use super::{Span, Symbol, SymbolKind};
use crate::{Error, Result};

/// Inclusive `(start, end)` indices of the operand that precedes the
/// quantifier at `position`.
///
/// - `)` before the quantifier: the span runs back to the matching `(`.
/// - literal or `ε` before the quantifier: the span is that one symbol.
/// - `*` before the quantifier: the span covers the star and its operand.
///
/// A `position` past the end of `symbols` is reported like a quantifier
/// without an operand, spanning the end of the sequence.
pub fn operand_span(symbols: &[Symbol], position: usize) -> Result<(usize, usize)> {
    let Some(&quantifier) = symbols.get(position) else {
        let end = symbols.last().map_or(0, |s| s.span.end as usize);
        return Err(Error::MalformedQuantifier {
            span: Span::new(end, end),
            quantifier: '?',
        });
    };
    let missing = || Error::MalformedQuantifier {
        span: quantifier.span,
        quantifier: quantifier.value,
    };

    let end = position.checked_sub(1).ok_or_else(missing)?;
    let start = operand_start(symbols, end).ok_or_else(missing)?;
    Ok((start, end))
}

/// Start index of the operand ending at `end`, if one ends there.
fn operand_start(symbols: &[Symbol], mut end: usize) -> Option<usize> {
    while symbols.get(end)?.kind == SymbolKind::Star {
        end = end.checked_sub(1)?;
    }

    match symbols[end].kind {
        SymbolKind::Literal | SymbolKind::Epsilon => Some(end),
        SymbolKind::GroupClose => {
            let mut depth = 0usize;
            for i in (0..=end).rev() {
                match symbols[i].kind {
                    SymbolKind::GroupClose => depth += 1,
                    SymbolKind::GroupOpen => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(i);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        _ => None,
    }
}

/// Eliminates every `+` and `?`.
///
/// The result contains only literals, `ε`, `|`, `·`, `*` and groups.
pub fn canonicalize(symbols: &[Symbol]) -> Result<Vec<Symbol>> {
    let mut out: Vec<Symbol> = Vec::with_capacity(symbols.len());

    for &symbol in symbols {
        if !matches!(symbol.kind, SymbolKind::Plus | SymbolKind::Optional) {
            out.push(symbol);
            continue;
        }

        out.push(symbol);
        let position = out.len() - 1;
        let (start, _) = operand_span(&out, position)?;
        out.truncate(position);
        let operand = out.split_off(start);
        let span = symbol.span;

        out.push(Symbol::group_open(span));
        out.extend_from_slice(&operand);
        if symbol.kind == SymbolKind::Plus {
            out.push(Symbol::concatenation(span));
            out.extend_from_slice(&operand);
            out.push(Symbol::star(span));
        } else {
            out.push(Symbol::alternation(span));
            out.push(Symbol::epsilon(span));
        }
        out.push(Symbol::group_close(span));
    }

    Ok(out)
}
