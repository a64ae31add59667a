//! Test helpers shared across modules.

use crate::{Dfa, Nfa, Node, regex_to_postfix};

/// Tree for a valid expression.
pub fn tree(src: &str) -> Node {
    regex_to_postfix(src, false)
        .and_then(|compiled| compiled.tree())
        .unwrap_or_else(|e| panic!("`{src}` should compile: {e}"))
}

pub fn nfa(src: &str) -> Nfa {
    Nfa::from_tree(&tree(src))
}

pub fn dfa(src: &str) -> Dfa {
    Dfa::from_nfa(&nfa(src))
}

/// Every string over `alphabet` of length `0..=max_len`, shortest first.
pub fn strings_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&c| {
                    let mut s = prefix.clone();
                    s.push(c);
                    s
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}
