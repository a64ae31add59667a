//! Tests for Thompson construction.

use super::*;
use crate::test_utils::nfa;
use crate::tree::Node;

#[test]
fn single_char() {
    let nfa = nfa("a");

    assert_eq!(nfa.state_count(), 2);
    insta::assert_snapshot!(nfa.dump(), @r"
    start S0
    final S1
    S0 a → S1
    ");
}

#[test]
fn epsilon_leaf() {
    insta::assert_snapshot!(nfa("ε").dump(), @r"
    start S0
    final S1
    S0 ε → S1
    ");
}

#[test]
fn concatenation() {
    insta::assert_snapshot!(nfa("ab").dump(), @r"
    start S0
    final S3
    S0 a → S1
    S2 b → S3
    S1 ε → S2
    ");
}

#[test]
fn alternation() {
    insta::assert_snapshot!(nfa("a|b").dump(), @r"
    start S4
    final S5
    S0 a → S1
    S2 b → S3
    S4 ε → S0, S2
    S1 ε → S5
    S3 ε → S5
    ");
}

#[test]
fn star() {
    insta::assert_snapshot!(nfa("a*").dump(), @r"
    start S2
    final S3
    S0 a → S1
    S2 ε → S0, S3
    S1 ε → S0, S3
    ");
}

#[test]
fn end_marker_compiles_as_epsilon() {
    let marked = Nfa::from_tree(&Node::concatenation(Node::char('a'), Node::end_marker()));
    let plain = Nfa::from_tree(&Node::concatenation(Node::char('a'), Node::epsilon()));

    assert_eq!(marked, plain);
}

#[test]
fn states_are_numbered_densely() {
    let nfa = nfa("c(aa|b)*|b·w");

    assert_eq!(nfa.state_count(), 18);
    assert_eq!(nfa.states().collect::<Vec<_>>(), (0..18).collect::<Vec<_>>());
    assert_eq!((nfa.start(), nfa.end()), (16, 17));
}

#[test]
fn concatenation_adds_no_states() {
    let cases = [("a", 2), ("ab|c", 8), ("(a|b)*c", 10), ("a+b?", 12)];

    for (src, count) in cases {
        assert_eq!(nfa(src).state_count(), count, "{src}");
    }
}

#[test]
fn alphabet_is_sorted_without_epsilon() {
    let alphabet: Vec<_> = nfa("c(aa|b)*|b·wε").alphabet().into_iter().collect();

    assert_eq!(alphabet, vec!['a', 'b', 'c', 'w']);
}

#[test]
fn epsilon_closure() {
    let nfa = nfa("a*");

    assert_eq!(nfa.epsilon_closure([2]).into_iter().collect::<Vec<_>>(), vec![0, 2, 3]);
    assert_eq!(nfa.epsilon_closure([1]).into_iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    assert_eq!(nfa.epsilon_closure([0]).into_iter().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn targets_and_transitions() {
    let nfa = nfa("a|b");

    assert_eq!(nfa.targets(4, Label::Epsilon), &[0, 2]);
    assert!(nfa.targets(4, Label::Char('a')).is_empty());
    assert_eq!(nfa.transitions().count(), 5);
}

#[test]
fn step_moves_then_closes() {
    let nfa = nfa("ab");
    let start = nfa.epsilon_closure([nfa.start()]);

    let after_a = nfa.step(&start, 'a');
    assert_eq!(after_a.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    assert!(nfa.step(&start, 'b').is_empty());
}
