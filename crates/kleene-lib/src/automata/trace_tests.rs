use super::*;
use crate::Colors;
use crate::test_utils::{dfa, nfa};

fn trace<A: Automaton>(automaton: &A, input: &str, verbosity: Verbosity) -> (bool, String) {
    let mut tracer = PrintTracer::new(verbosity, Colors::OFF);
    let accepted = simulate_traced(automaton, input, &mut tracer);
    (accepted, tracer.output())
}

#[test]
fn default_verbosity() {
    let (accepted, output) = trace(&dfa("ab"), "ab", Verbosity::Default);

    assert!(accepted);
    insta::assert_snapshot!(output, @r"
    start
      00  a
      01  b
    accept
    ");
}

#[test]
fn verbose_dfa() {
    let (_, output) = trace(&dfa("ab"), "ab", Verbosity::Verbose);

    insta::assert_snapshot!(output, @r"
    start {0}
      00  a → {1}
      01  b → {2}
    accept
    ");
}

#[test]
fn verbose_nfa_lists_closures() {
    let (_, output) = trace(&nfa("ab"), "ab", Verbosity::Verbose);

    insta::assert_snapshot!(output, @r"
    start {0}
      00  a → {1, 2}
      01  b → {3}
    accept
    ");
}

#[test]
fn stuck_stops_early() {
    let (accepted, output) = trace(&dfa("ab"), "acb", Verbosity::Default);

    assert!(!accepted);
    insta::assert_snapshot!(output, @r"
    start
      00  a
      01  c → ∅
    reject
    ");
}

#[test]
fn rejected_at_end_of_input() {
    let (accepted, output) = trace(&dfa("ab"), "a", Verbosity::Default);

    assert!(!accepted);
    assert_eq!(output.lines().last(), Some("reject"));
}

#[test]
fn colored_verdict() {
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::ON);
    simulate_traced(&dfa("a"), "a", &mut tracer);

    assert_eq!(tracer.lines().last().map(String::as_str), Some("\x1b[32maccept\x1b[0m"));
}

#[test]
fn noop_tracer_matches_simulate() {
    let dfa = dfa("(a|b)*a");

    for input in ["", "a", "ba", "ab"] {
        assert_eq!(simulate_traced(&dfa, input, &mut NoopTracer), simulate(&dfa, input));
    }
}
