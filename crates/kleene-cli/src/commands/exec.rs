//! Test strings against an expression.

use kleene_lib::{Colors, Regex};

use super::run_common;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Engine {
    Nfa,
    #[default]
    Dfa,
    Both,
}

pub struct ExecArgs {
    pub expression: String,
    pub inputs: Vec<String>,
    pub engine: Engine,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let re = run_common::compile_or_exit(&args.expression, args.color);
    let colors = Colors::new(args.color);
    let mut all_accepted = true;

    for input in &args.inputs {
        let verdicts = evaluate(&re, input, args.engine);
        all_accepted &= verdicts.iter().all(|&(_, accepted)| accepted);
        println!("{}", render_line(input, &verdicts, colors));
    }

    if !all_accepted {
        std::process::exit(1);
    }
}

/// Verdict of every selected engine, NFA first.
pub fn evaluate(re: &Regex, input: &str, engine: Engine) -> Vec<(&'static str, bool)> {
    match engine {
        Engine::Nfa => vec![("nfa", re.is_match_nfa(input))],
        Engine::Dfa => vec![("dfa", re.is_match(input))],
        Engine::Both => vec![("nfa", re.is_match_nfa(input)), ("dfa", re.is_match(input))],
    }
}

pub fn render_line(input: &str, verdicts: &[(&str, bool)], colors: Colors) -> String {
    let verdicts: Vec<_> = match verdicts {
        [(_, accepted)] => vec![run_common::format_verdict(*accepted, colors)],
        _ => verdicts
            .iter()
            .map(|(engine, accepted)| {
                format!("{engine} {}", run_common::format_verdict(*accepted, colors))
            })
            .collect(),
    };
    format!("{}  {:?}", verdicts.join("  "), input)
}
