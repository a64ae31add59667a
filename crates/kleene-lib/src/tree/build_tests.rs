//! Tests for postfix evaluation into syntax trees.

use super::*;
use crate::compile::regex_to_postfix;
use crate::syntax::{Span, Symbol};
use crate::Error;

fn tree(src: &str) -> Node {
    regex_to_postfix(src, false).unwrap().tree().unwrap()
}

#[test]
fn single_char() {
    assert_eq!(tree("a"), Node::char('a'));
}

#[test]
fn concatenation_keeps_operand_order() {
    assert_eq!(
        tree("ab"),
        Node::concatenation(Node::char('a'), Node::char('b'))
    );
}

#[test]
fn operators_nest_by_precedence() {
    insta::assert_snapshot!(tree("(aa|b)|abb*").dump(), @r"
    Alternation
      Alternation
        Concatenation
          Char a
          Char a
        Char b
      Concatenation
        Concatenation
          Char a
          Char b
        Star
          Char b
    ");
}

#[test]
fn canonicalized_quantifiers() {
    insta::assert_snapshot!(tree("a+b?").dump(), @r"
    Concatenation
      Concatenation
        Char a
        Star
          Char a
      Alternation
        Char b
        Epsilon
    ");
}

#[test]
fn end_marker_leaf() {
    let root = regex_to_postfix("a*", true).unwrap().tree().unwrap();

    insta::assert_snapshot!(root.dump(), @r"
    Concatenation
      Star
        Char a
      EndMarker
    ");
}

#[test]
fn operator_arity() {
    let Node::Operator(star) = tree("a*") else {
        panic!("expected operator");
    };
    assert_eq!(star.kind(), OperatorKind::Star);
    assert_eq!(star.operands().len(), OperatorKind::Star.arity());

    let Node::Operator(alt) = tree("a|b") else {
        panic!("expected operator");
    };
    assert_eq!(alt.kind(), OperatorKind::Alternation);
    assert_eq!(alt.operands(), &[Node::char('a'), Node::char('b')]);
}

#[test]
fn size_counts_every_node() {
    assert_eq!(tree("a").size(), 1);
    assert_eq!(tree("(ab)*").size(), 4);
}

#[test]
fn underflow_on_missing_operand() {
    let postfix = [Symbol::literal('a', Span::new(0, 1)), Symbol::alternation(Span::new(1, 2))];

    assert_eq!(
        build_tree(&postfix),
        Err(Error::StackUnderflow {
            span: Span::new(1, 2),
            operator: '|',
        })
    );
}

#[test]
fn star_without_operand() {
    let postfix = [Symbol::star(Span::new(0, 1))];

    assert!(matches!(
        build_tree(&postfix),
        Err(Error::StackUnderflow { operator: '*', .. })
    ));
}

#[test]
fn leftover_operands() {
    let postfix = [
        Symbol::literal('a', Span::new(0, 1)),
        Symbol::literal('b', Span::new(1, 2)),
    ];

    assert_eq!(
        build_tree(&postfix),
        Err(Error::MalformedExpression {
            span: Some(Span::new(0, 2)),
            roots: 2,
        })
    );
}

#[test]
fn empty_expression() {
    assert_eq!(
        regex_to_postfix("", false).unwrap().tree(),
        Err(Error::MalformedExpression {
            span: None,
            roots: 0,
        })
    );
    assert!(regex_to_postfix("()", false).unwrap().tree().is_err());
}

#[test]
fn non_canonical_quantifier_is_rejected() {
    let postfix = [
        Symbol::literal('a', Span::new(0, 1)),
        Symbol::new(crate::SymbolKind::Plus, '+', Span::new(1, 2)),
    ];

    assert!(matches!(
        build_tree(&postfix),
        Err(Error::MalformedExpression { roots: 1, .. })
    ));
}

fn nested_stars(n: usize) -> String {
    format!("{}a{}", "(".repeat(n), ")*".repeat(n))
}

#[test]
fn nesting_at_the_limit() {
    let root = tree(&nested_stars(MAX_DEPTH - 1));

    assert_eq!(root.size(), MAX_DEPTH);
}

#[test]
fn nesting_past_the_limit() {
    let n = 20_000;
    let err = regex_to_postfix(&nested_stars(n), false)
        .unwrap()
        .tree()
        .unwrap_err();

    // The star that makes the tree one level too deep.
    let at = n + 2 * MAX_DEPTH;
    assert_eq!(
        err,
        Error::NestingTooDeep {
            span: Span::new(at, at + 1),
            limit: MAX_DEPTH,
        }
    );
    assert_eq!(err.to_string(), "expression nested too deeply (limit 1024)");
}

#[test]
fn long_concatenation_counts_as_nesting() {
    assert!(regex_to_postfix(&"a".repeat(MAX_DEPTH), false).unwrap().tree().is_ok());
    assert!(matches!(
        regex_to_postfix(&"a".repeat(MAX_DEPTH + 1), false).unwrap().tree(),
        Err(Error::NestingTooDeep { .. })
    ));
}
