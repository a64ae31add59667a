//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("kleene")
        .about("Compile regular expressions to NFAs and DFAs, and run them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(postfix_command())
        .subcommand(ast_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
        .subcommand(repl_command())
}

/// Show canonical infix and postfix forms.
pub fn postfix_command() -> Command {
    Command::new("postfix")
        .about("Show the canonical infix and postfix forms")
        .override_usage(
            "\
  kleene postfix <EXPR>
  kleene postfix -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  kleene postfix 'c(aa|b)*|b·w'      # one expression
  kleene postfix -f exprs.txt        # one expression per line
  kleene postfix 'a|b' --end-marker  # augmented (r)·#"#,
        )
        .arg(expression_arg())
        .arg(file_arg())
        .arg(end_marker_arg())
        .arg(color_arg())
}

/// Show the syntax tree.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree")
        .override_usage(
            "\
  kleene ast <EXPR>
  kleene ast -f <FILE>",
        )
        .arg(expression_arg())
        .arg(file_arg())
        .arg(end_marker_arg())
        .arg(color_arg())
}

/// Export automata as text, DOT or JSON.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Export the NFA and/or DFA")
        .override_usage(
            "\
  kleene dump <EXPR> [--automaton nfa|dfa|both] [--format text|dot|json]
  kleene dump -f <FILE> -o <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  kleene dump '(a|b)*abb'                    # DFA as text
  kleene dump '(a|b)*abb' -a nfa --format dot
  kleene dump -f exprs.txt -a both -o out/   # out/nfa_1.dot, out/dfa_1.dot, ...

NOTE: with -o, DOT files are written and --format is ignored."#,
        )
        .arg(expression_arg())
        .arg(file_arg())
        .arg(automaton_arg())
        .arg(format_arg())
        .arg(output_dir_arg())
        .arg(color_arg())
}

/// Match strings against an expression.
pub fn exec_command() -> Command {
    Command::new("exec")
        .about("Test whether strings belong to the language of an expression")
        .after_help(
            r#"EXAMPLES:
  kleene exec 'a*b' aab b ba      # one verdict per input
  kleene exec 'a*' '' -e both     # empty string, both engines"#,
        )
        .arg(required_expression_arg())
        .arg(inputs_arg())
        .arg(engine_arg())
        .arg(color_arg())
}

/// Trace a simulation step by step.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace a simulation step by step")
        .after_help(
            r#"EXAMPLES:
  kleene trace '(a|b)*abb' babb        # DFA steps
  kleene trace '(a|b)*abb' babb -e nfa -v"#,
        )
        .arg(required_expression_arg())
        .arg(input_arg())
        .arg(trace_engine_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Interactive loop.
pub fn repl_command() -> Command {
    Command::new("repl")
        .about("Interactively compile expressions and test strings")
        .after_help(
            "At the expression prompt `0` quits. At the input prompt an empty line tests the\nempty string and `:q` returns to the expression prompt.",
        )
        .arg(color_arg())
}
