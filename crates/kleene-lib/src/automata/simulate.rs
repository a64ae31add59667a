//! Running an automaton over an input string.

use super::{Automaton, NoopTracer, Tracer};

/// Does `automaton` accept `input`?
///
/// Each `char` of the input is one symbol. A symbol with no move rejects
/// immediately without reading the rest of the input.
pub fn simulate<A: Automaton + ?Sized>(automaton: &A, input: &str) -> bool {
    simulate_traced(automaton, input, &mut NoopTracer)
}

/// [`simulate`], reporting each step to `tracer`.
pub fn simulate_traced<A, T>(automaton: &A, input: &str, tracer: &mut T) -> bool
where
    A: Automaton + ?Sized,
    T: Tracer,
{
    let mut config = automaton.initial();
    tracer.trace_start(automaton, &config);

    for (position, symbol) in input.chars().enumerate() {
        let Some(next) = automaton.advance(&config, symbol) else {
            tracer.trace_stuck(position, symbol);
            tracer.trace_verdict(false);
            return false;
        };
        config = next;
        tracer.trace_step(automaton, position, symbol, &config);
    }

    let accepted = automaton.is_accepting(&config);
    tracer.trace_verdict(accepted);
    accepted
}
