//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use kleene_lib::Verbosity;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::dump::{AutomatonChoice, DumpArgs, DumpFormat};
use crate::commands::exec::{Engine, ExecArgs};
use crate::commands::postfix::PostfixArgs;
use crate::commands::repl::ReplArgs;
use crate::commands::trace::TraceArgs;

pub struct PostfixParams {
    pub expression: Option<String>,
    pub file: Option<PathBuf>,
    pub end_marker: bool,
    pub color: ColorChoice,
}

impl PostfixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expression: m.get_one::<String>("expression").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            end_marker: m.get_flag("end_marker"),
            color: parse_color(m),
        }
    }
}

impl From<PostfixParams> for PostfixArgs {
    fn from(p: PostfixParams) -> Self {
        Self {
            expression: p.expression,
            file: p.file,
            end_marker: p.end_marker,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub expression: Option<String>,
    pub file: Option<PathBuf>,
    pub end_marker: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expression: m.get_one::<String>("expression").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            end_marker: m.get_flag("end_marker"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            expression: p.expression,
            file: p.file,
            end_marker: p.end_marker,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub expression: Option<String>,
    pub file: Option<PathBuf>,
    pub automaton: AutomatonChoice,
    pub format: DumpFormat,
    pub output_dir: Option<PathBuf>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let automaton = match m.get_one::<String>("automaton").map(|s| s.as_str()) {
            Some("nfa") => AutomatonChoice::Nfa,
            Some("both") => AutomatonChoice::Both,
            _ => AutomatonChoice::Dfa,
        };
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("dot") => DumpFormat::Dot,
            Some("json") => DumpFormat::Json,
            _ => DumpFormat::Text,
        };

        Self {
            expression: m.get_one::<String>("expression").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            automaton,
            format,
            output_dir: m.get_one::<PathBuf>("output_dir").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            expression: p.expression,
            file: p.file,
            automaton: p.automaton,
            format: p.format,
            output_dir: p.output_dir,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub expression: String,
    pub inputs: Vec<String>,
    pub engine: Engine,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expression: m
                .get_one::<String>("expression")
                .cloned()
                .unwrap_or_default(),
            inputs: m
                .get_many::<String>("inputs")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            engine: parse_engine(m),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            expression: p.expression,
            inputs: p.inputs,
            engine: p.engine,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub expression: String,
    pub input: String,
    pub engine: Engine,
    pub verbosity: Verbosity,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let verbosity = match m.get_count("verbose") {
            0 => Verbosity::Default,
            _ => Verbosity::Verbose,
        };

        Self {
            expression: m
                .get_one::<String>("expression")
                .cloned()
                .unwrap_or_default(),
            input: m.get_one::<String>("input").cloned().unwrap_or_default(),
            engine: parse_engine(m),
            verbosity,
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            expression: p.expression,
            input: p.input,
            engine: p.engine,
            verbosity: p.verbosity,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ReplParams {
    pub color: ColorChoice,
}

impl ReplParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            color: parse_color(m),
        }
    }
}

impl From<ReplParams> for ReplArgs {
    fn from(p: ReplParams) -> Self {
        Self {
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_engine(m: &ArgMatches) -> Engine {
    match m.get_one::<String>("engine").map(|s| s.as_str()) {
        Some("nfa") => Engine::Nfa,
        Some("both") => Engine::Both,
        _ => Engine::Dfa,
    }
}
