//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Inline expression (positional).
pub fn expression_arg() -> Arg {
    Arg::new("expression")
        .value_name("EXPR")
        .help("Regular expression")
}

/// Same as `expression_arg`, but mandatory.
pub fn required_expression_arg() -> Arg {
    expression_arg().required(true)
}

/// Batch file with one expression per line (-f/--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("expression")
        .help("Read expressions from a file, one per line ('-' for stdin)")
}

/// Append the end-of-input marker (--end-marker).
pub fn end_marker_arg() -> Arg {
    Arg::new("end_marker")
        .long("end-marker")
        .action(ArgAction::SetTrue)
        .help("Augment the expression with an end marker: (r)·#")
}

/// Which automaton to show (--automaton).
pub fn automaton_arg() -> Arg {
    Arg::new("automaton")
        .short('a')
        .long("automaton")
        .value_name("KIND")
        .default_value("dfa")
        .value_parser(["nfa", "dfa", "both"])
        .help("Automaton to export")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "dot", "json"])
        .help("Output format")
}

/// Directory for DOT files (-o/--output-dir).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .short('o')
        .long("output-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write one DOT file per expression and automaton into DIR")
}

/// Engine used for matching (--engine).
pub fn engine_arg() -> Arg {
    Arg::new("engine")
        .short('e')
        .long("engine")
        .value_name("ENGINE")
        .default_value("dfa")
        .value_parser(["nfa", "dfa", "both"])
        .help("Automaton used for matching")
}

/// Engine used for tracing (--engine), one automaton only.
pub fn trace_engine_arg() -> Arg {
    engine_arg().value_parser(["nfa", "dfa"])
}

/// Candidate strings (positional, one or more).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .num_args(1..)
        .required(true)
        .help("Strings to test; use '' for the empty string and -- before inputs starting with '-'")
}

/// Single candidate string (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .help("String to trace")
}

/// Verbosity level (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v lists active states after every step)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
