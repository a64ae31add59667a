//! Export automata as text, Graphviz DOT, or JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kleene_lib::{AutomatonView, Colors, Regex};
use serde::Serialize;

use super::run_common;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutomatonChoice {
    Nfa,
    #[default]
    Dfa,
    Both,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Text,
    Dot,
    Json,
}

pub struct DumpArgs {
    pub expression: Option<String>,
    pub file: Option<PathBuf>,
    pub automaton: AutomatonChoice,
    pub format: DumpFormat,
    pub output_dir: Option<PathBuf>,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Serialize)]
struct DumpRecord<'a> {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    nfa: Option<AutomatonView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dfa: Option<AutomatonView>,
}

pub fn run(args: DumpArgs) {
    let expressions = run_common::load_or_exit(args.expression.as_deref(), args.file.as_deref());
    let colors = Colors::new(args.color);
    let mut records = Vec::new();
    let mut failed = false;

    for (i, expr) in expressions.iter().enumerate() {
        let re = match Regex::new(&expr.text) {
            Ok(re) => re,
            Err(e) => {
                run_common::report(expr, &e, args.color);
                failed = true;
                continue;
            }
        };
        let views = views(&re, args.automaton);

        // Write failures are reported but never abort the batch.
        if let Some(dir) = &args.output_dir {
            for view in &views {
                match write_dot(dir, i + 1, view) {
                    Ok(path) => println!("{}", path.display()),
                    Err(e) => eprintln!("error: {}", e),
                }
            }
            continue;
        }

        match args.format {
            DumpFormat::Text => print!("{}", render_text(&expr.text, &views, colors)),
            DumpFormat::Dot => {
                for view in &views {
                    print!("{}", view.to_dot());
                }
            }
            DumpFormat::Json => {
                let (nfa, dfa) = split_views(views);
                records.push(DumpRecord {
                    expression: &expr.text,
                    nfa,
                    dfa,
                });
            }
        }
    }

    if args.format == DumpFormat::Json && args.output_dir.is_none() {
        match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Views of the requested automata, NFA first.
pub fn views(re: &Regex, choice: AutomatonChoice) -> Vec<AutomatonView> {
    match choice {
        AutomatonChoice::Nfa => vec![re.nfa().view()],
        AutomatonChoice::Dfa => vec![re.dfa().view()],
        AutomatonChoice::Both => vec![re.nfa().view(), re.dfa().view()],
    }
}

fn split_views(views: Vec<AutomatonView>) -> (Option<AutomatonView>, Option<AutomatonView>) {
    let (mut nfa, mut dfa) = (None, None);
    for view in views {
        match view.kind {
            "nfa" => nfa = Some(view),
            _ => dfa = Some(view),
        }
    }
    (nfa, dfa)
}

/// Text dump of each view under a `[nfa]` / `[dfa]` heading.
pub fn render_text(expression: &str, views: &[AutomatonView], colors: Colors) -> String {
    let mut out = format!("{}{}{}\n", colors.dim, expression, colors.reset);
    for view in views {
        out.push_str(&format!("[{}]\n", view.kind));
        out.push_str(&view.dump(colors));
    }
    out
}

/// Writes `<kind>_<index>.dot` into `dir`, creating the directory if needed.
pub fn write_dot(dir: &Path, index: usize, view: &AutomatonView) -> Result<PathBuf, WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_owned(),
        source,
    })?;

    let path = dir.join(format!("{}_{}.dot", view.kind, index));
    fs::write(&path, view.to_dot()).map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
