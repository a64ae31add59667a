use super::*;

fn concat(src: &str) -> String {
    render(&insert_concatenation(&tokenize(src).unwrap()))
}

#[test]
fn implicit_concatenation_made_explicit() {
    assert_eq!(concat("c(aa|b)*|b·w"), "c·(a·a|b)*|b·w");
}

#[test]
fn quantifiers_followed_by_operands() {
    assert_eq!(concat("(a|b?c+|d*e|fgh|i|j)"), "(a|b?·c+|d*·e|f·g·h|i|j)");
    assert_eq!(concat("0?(1?)?0*"), "0?·(1?)?·0*");
}

#[test]
fn epsilon_is_an_operand() {
    assert_eq!(concat("aεb"), "a·ε·b");
    assert_eq!(concat("(ε)a"), "(ε)·a");
}

#[test]
fn adjacent_groups() {
    assert_eq!(concat("(a)(b)"), "(a)·(b)");
    assert_eq!(concat("a(b)c"), "a·(b)·c");
}

#[test]
fn no_insertion_around_alternation_or_inside_group_edges() {
    assert_eq!(concat("a|b"), "a|b");
    assert_eq!(concat("(a)"), "(a)");
    assert_eq!(concat("()"), "()");
}

#[test]
fn expanded_class_is_concatenated() {
    assert_eq!(concat("0[ab]0*"), "0·(a|b)·0*");
}

#[test]
fn inserted_symbols_have_zero_width_spans() {
    let symbols = insert_concatenation(&tokenize("ab").unwrap());

    assert_eq!(symbols[1].kind, SymbolKind::Concatenation);
    assert_eq!(symbols[1].span, Span::new(1, 1));
}

#[test]
fn operand_boundaries_follow_symbol_kinds() {
    assert!(SymbolKind::Plus.is_quantifier());
    assert!(!SymbolKind::GroupClose.is_quantifier());
    assert!(SymbolKind::EndMarker.is_operand());
    assert!(!SymbolKind::Star.is_operand());

    assert_eq!(concat("a*+?b"), "a*+?·b");
}
