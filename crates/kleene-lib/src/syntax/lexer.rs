//! Tokenizer for the expression language.
//!
//! Logos recognizes single-character operators and bracketed classes; the
//! post-processing loop turns raw tokens into [`Symbol`]s, expanding each
//! class into the equivalent grouped alternation so that later stages never
//! see a `[`.

use indexmap::IndexSet;
use logos::Logos;

use super::{Span, Symbol, SymbolKind};
use crate::{Error, Result};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token("ε")]
    Epsilon,

    #[token("·")]
    Concat,

    /// `[...]` with its closing bracket.
    #[regex(r"\[[^\]]*\]")]
    Class,

    /// `[...` running to the end of input.
    #[regex(r"\[[^\]]*")]
    UnterminatedClass,

    /// Any other character is a literal, including a stray `]`.
    #[regex(r"[^()|*+?\[ε·]")]
    Char,
}

/// Tokenizes an expression into symbols.
///
/// Character classes are rewritten on the spot: `[abc]` yields the symbols
/// of `(a|b|c)`, all carrying the span of the original class.
pub fn tokenize(source: &str) -> Result<Vec<Symbol>> {
    let mut symbols = Vec::with_capacity(source.len());
    let mut lexer = RawToken::lexer(source);

    while let Some(token) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start, range.end);
        let text = lexer.slice();

        let kind = match token {
            Ok(RawToken::ParenOpen) => SymbolKind::GroupOpen,
            Ok(RawToken::ParenClose) => SymbolKind::GroupClose,
            Ok(RawToken::Pipe) => SymbolKind::Alternation,
            Ok(RawToken::Star) => SymbolKind::Star,
            Ok(RawToken::Plus) => SymbolKind::Plus,
            Ok(RawToken::Question) => SymbolKind::Optional,
            Ok(RawToken::Epsilon) => SymbolKind::Epsilon,
            Ok(RawToken::Concat) => SymbolKind::Concatenation,
            Ok(RawToken::Class) => {
                let body = &text[1..text.len() - 1];
                expand_class(body, span, &mut symbols)?;
                continue;
            }
            Ok(RawToken::UnterminatedClass) => {
                return Err(Error::MalformedClass {
                    span,
                    reason: "missing closing `]`",
                });
            }
            Ok(RawToken::Char) | Err(()) => {
                symbols.extend(text.chars().map(|c| Symbol::literal(c, span)));
                continue;
            }
        };

        // Operator tokens are exactly one char.
        let value = text.chars().next().unwrap_or_default();
        symbols.push(Symbol::new(kind, value, span));
    }

    Ok(symbols)
}

/// Appends `(c1|c2|...|cn)` for the members of a class body.
///
/// `x-y` denotes the inclusive range of chars; a `-` first or last in the
/// body is literal. Repeated members are kept once, in first-seen order.
fn expand_class(body: &str, span: Span, out: &mut Vec<Symbol>) -> Result<()> {
    let chars: Vec<char> = body.chars().collect();
    if chars.is_empty() {
        return Err(Error::MalformedClass {
            span,
            reason: "class is empty",
        });
    }

    let mut members = IndexSet::new();
    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len() && chars[i + 1] == '-' {
            let (lo, hi) = (chars[i], chars[i + 2]);
            if lo > hi {
                return Err(Error::MalformedClass {
                    span,
                    reason: "range bounds are reversed",
                });
            }
            members.extend(lo..=hi);
            i += 3;
        } else {
            members.insert(chars[i]);
            i += 1;
        }
    }

    out.push(Symbol::group_open(span));
    for (n, c) in members.into_iter().enumerate() {
        if n > 0 {
            out.push(Symbol::alternation(span));
        }
        out.push(Symbol::literal(c, span));
    }
    out.push(Symbol::group_close(span));

    Ok(())
}
