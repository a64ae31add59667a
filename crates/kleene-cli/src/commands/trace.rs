//! Trace a simulation step by step.

use kleene_lib::{Colors, PrintTracer, Verbosity, simulate_traced};

use super::exec::Engine;
use super::run_common;

pub struct TraceArgs {
    pub expression: String,
    pub input: String,
    pub engine: Engine,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let re = run_common::compile_or_exit(&args.expression, args.color);
    let mut tracer = PrintTracer::new(args.verbosity, Colors::new(args.color));

    let accepted = match args.engine {
        Engine::Nfa => simulate_traced(re.nfa(), &args.input, &mut tracer),
        Engine::Dfa | Engine::Both => simulate_traced(re.dfa(), &args.input, &mut tracer),
    };
    tracer.print();

    if !accepted {
        std::process::exit(1);
    }
}
