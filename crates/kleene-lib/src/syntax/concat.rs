//! Makes implicit concatenation explicit.

use super::{Span, Symbol, SymbolKind};

/// Can the symbol end an operand?
fn ends_operand(kind: SymbolKind) -> bool {
    kind.is_operand() || kind.is_quantifier() || kind == SymbolKind::GroupClose
}

/// Can the symbol start an operand?
fn starts_operand(kind: SymbolKind) -> bool {
    kind.is_operand() || kind == SymbolKind::GroupOpen
}

/// Inserts `·` between every pair of adjacent operands.
///
/// Already explicit `·` symbols are kept as-is, and nothing is inserted
/// next to `|`, after `(` or before `)`.
pub fn insert_concatenation(symbols: &[Symbol]) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(symbols.len() * 2);

    for (i, &symbol) in symbols.iter().enumerate() {
        out.push(symbol);

        let Some(next) = symbols.get(i + 1) else {
            continue;
        };
        if ends_operand(symbol.kind) && starts_operand(next.kind) {
            // Zero-width span between the two operands.
            let at = next.span.start as usize;
            out.push(Symbol::concatenation(Span::new(at, at)));
        }
    }

    out
}
