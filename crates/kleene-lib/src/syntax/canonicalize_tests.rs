use super::*;
use crate::Error;

fn prepared(src: &str) -> Vec<Symbol> {
    insert_concatenation(&tokenize(src).unwrap())
}

fn canonical(src: &str) -> String {
    render(&canonicalize(&prepared(src)).unwrap())
}

#[test]
fn plus_over_group() {
    assert_eq!(canonical("(a|(c)*)+"), "((a|(c)*)·(a|(c)*)*)");
}

#[test]
fn optional_over_group() {
    assert_eq!(canonical("(a|(c)*)?"), "((a|(c)*)|ε)");
}

#[test]
fn class_expansion_then_optional() {
    assert_eq!(canonical("a([abc1234])?|j"), "a·(((a|b|c|1|2|3|4))|ε)|j");
}

#[test]
fn plus_over_single_literal() {
    assert_eq!(canonical("ab+"), "a·(b·b*)");
    assert_eq!(canonical("a+b"), "(a·a*)·b");
}

#[test]
fn optional_over_epsilon() {
    assert_eq!(canonical("ε?"), "(ε|ε)");
}

#[test]
fn chained_quantifiers_apply_to_rewritten_group() {
    assert_eq!(canonical("a+?"), "((a·a*)|ε)");
    assert_eq!(canonical("a??"), "((a|ε)|ε)");
}

#[test]
fn quantifier_after_star_covers_starred_operand() {
    assert_eq!(canonical("a*?"), "(a*|ε)");
    assert_eq!(canonical("(ab)*+"), "((a·b)*·(a·b)**)");
}

#[test]
fn several_quantifiers_in_one_pass() {
    assert_eq!(canonical("a?b+c"), "(a|ε)·(b·b*)·c");
}

#[test]
fn output_has_no_plus_or_optional() {
    for src in ["(a|b?c+|d*e|fgh|i|j)", "0?(1?)?0*", "((a+)?b)+", "[xy]+?z"] {
        let out = canonicalize(&prepared(src)).unwrap();
        assert!(
            out.iter()
                .all(|s| !matches!(s.kind, SymbolKind::Plus | SymbolKind::Optional)),
            "{src} → {}",
            render(&out)
        );
    }
}

#[test]
fn operand_span_of_group() {
    let symbols = prepared("(a|(c)*)+a");

    assert_eq!(render(&symbols), "(a|(c)*)+·a");
    assert_eq!(operand_span(&symbols, 8).unwrap(), (0, 7));
}

#[test]
fn operand_span_of_literal() {
    let symbols = prepared("ab?");

    assert_eq!(operand_span(&symbols, 3).unwrap(), (2, 2));
}

#[test]
fn operand_span_of_starred_group() {
    let symbols = prepared("x(ab)*+");

    assert_eq!(render(&symbols), "x·(a·b)*+");
    assert_eq!(operand_span(&symbols, 8).unwrap(), (2, 7));
}

#[test]
fn quantifier_without_operand() {
    let err = canonicalize(&prepared("+a")).unwrap_err();
    assert_eq!(
        err,
        Error::MalformedQuantifier {
            span: Span::new(0, 1),
            quantifier: '+',
        }
    );

    let err = canonicalize(&prepared("a|?")).unwrap_err();
    assert!(matches!(err, Error::MalformedQuantifier { quantifier: '?', .. }));

    let err = canonicalize(&prepared("(+)")).unwrap_err();
    assert!(matches!(err, Error::MalformedQuantifier { quantifier: '+', .. }));
}

#[test]
fn quantifier_after_unbalanced_close() {
    let err = canonicalize(&prepared("a)+")).unwrap_err();

    assert!(matches!(err, Error::MalformedQuantifier { quantifier: '+', .. }));
}

#[test]
fn synthesized_symbols_carry_quantifier_span() {
    let out = canonicalize(&prepared("ab+")).unwrap();

    // a · ( b · b * )
    assert_eq!(out[2].kind, SymbolKind::GroupOpen);
    assert_eq!(out[2].span, Span::new(2, 3));
    assert_eq!(out[3].span, Span::new(1, 2));
}

#[test]
fn operand_span_past_the_end() {
    let symbols = prepared("ab");

    assert_eq!(
        operand_span(&symbols, 9),
        Err(Error::MalformedQuantifier {
            span: Span::new(2, 2),
            quantifier: '?',
        })
    );
    assert!(operand_span(&[], 0).is_err());
}

#[test]
fn long_star_run_before_quantifier() {
    let src = format!("a{}?", "*".repeat(100_000));
    let out = canonical(&src);

    assert!(out.starts_with("(a**"));
    assert!(out.ends_with("*|ε)"));
}
