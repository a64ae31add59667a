use crate::compile::regex_to_postfix;
use crate::{Error, Span};

fn render(src: &str) -> String {
    let err = regex_to_postfix(src, false)
        .and_then(|compiled| compiled.tree())
        .unwrap_err();
    err.printer().source(src).render()
}

#[test]
fn unmatched_paren() {
    insta::assert_snapshot!(render("a)b"), @r"
    error: unmatched `)`
      |
    1 | a)b
      |  ^
    ");
}

#[test]
fn unterminated_group() {
    insta::assert_snapshot!(render("x(ab"), @r"
    error: unterminated group: `(` has no matching `)`
      |
    1 | x(ab
      |  ^
    ");
}

#[test]
fn class_error_spans_whole_class() {
    insta::assert_snapshot!(render("a[z-a]"), @r"
    error: malformed character class: range bounds are reversed
      |
    1 | a[z-a]
      |  ^^^^^
    ");
}

#[test]
fn quantifier_without_operand() {
    insta::assert_snapshot!(render("a|+"), @r"
    error: quantifier `+` has no operand
      |
    1 | a|+
      |   ^
    ");
}

#[test]
fn with_path() {
    let err = Error::UnmatchedParen {
        span: Span::new(0, 1),
    };
    let result = err.printer().source(")").path("exprs.txt").render();

    insta::assert_snapshot!(result, @r"
    error: unmatched `)`
     --> exprs.txt:1:1
      |
    1 | )
      | ^
    ");
}

#[test]
fn with_line() {
    let err = Error::UnmatchedParen {
        span: Span::new(1, 2),
    };
    let result = err.printer().source("a)").path("exprs.txt").line(3).render();

    insta::assert_snapshot!(result, @r"
    error: unmatched `)`
     --> exprs.txt:3:2
      |
    3 | a)
      |  ^
    ");
}

#[test]
fn without_source() {
    let err = Error::UnmatchedParen {
        span: Span::new(0, 1),
    };

    assert_eq!(err.printer().render(), "error: unmatched `)`");
}

#[test]
fn without_span() {
    let result = render("");

    assert_eq!(
        result,
        "error: expression does not reduce to a single tree (0 roots)"
    );
}
