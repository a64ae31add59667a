//! Tests for subset construction.

use super::*;
use crate::test_utils::dfa;

#[test]
fn single_char() {
    insta::assert_snapshot!(dfa("a").dump(), @r"
    start S0
    final S1
    S0 a → S1
    ");
}

#[test]
fn concatenation() {
    insta::assert_snapshot!(dfa("ab").dump(), @r"
    start S0
    final S2
    S0 a → S1
    S1 b → S2
    ");
}

#[test]
fn alternation_is_not_minimized() {
    insta::assert_snapshot!(dfa("a|b").dump(), @r"
    start S0
    final S1, S2
    S0 a → S1
    S0 b → S2
    ");
}

#[test]
fn star_accepts_at_initial_state() {
    let dfa = dfa("a*");

    assert!(dfa.is_final(dfa.initial()));
    insta::assert_snapshot!(dfa.dump(), @r"
    start S0
    final S0, S1
    S0 a → S1
    S1 a → S1
    ");
}

#[test]
fn epsilon_only() {
    let dfa = dfa("ε");

    assert_eq!(dfa.state_count(), 1);
    assert!(dfa.is_final(0));
    assert_eq!(dfa.transitions().count(), 0);
}

#[test]
fn discovery_order_numbering() {
    insta::assert_snapshot!(dfa("c(aa|b)*|b·w").dump(), @r"
    start S0
    final S2, S3, S5, S6
    S0 b → S1
    S0 c → S2
    S1 w → S3
    S2 a → S4
    S2 b → S5
    S4 a → S6
    S5 a → S4
    S5 b → S5
    S6 a → S4
    S6 b → S5
    ");
}

#[test]
fn at_most_one_move_per_symbol() {
    let dfa = dfa("(a|ab)(c|bcd)(d*)");
    let mut seen = std::collections::HashSet::new();

    for (from, symbol, _) in dfa.transitions() {
        assert!(seen.insert((from, symbol)));
    }
}

#[test]
fn missing_move() {
    let dfa = dfa("ab");

    assert_eq!(dfa.next(0, 'a'), Some(1));
    assert_eq!(dfa.next(0, 'b'), None);
    assert_eq!(dfa.next(7, 'a'), None);
    assert!(!dfa.is_final(7));
}

#[test]
fn final_states_iterator() {
    let dfa = dfa("a|b");

    assert_eq!(dfa.final_states().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn construction_is_deterministic() {
    let nfa = crate::test_utils::nfa("(a|b)*abb");

    assert_eq!(Dfa::from_nfa(&nfa), Dfa::from_nfa(&nfa));
}
