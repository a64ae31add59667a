//! Interactive loop: read an expression, then test candidate strings.
//!
//! At the expression prompt `0` ends the session and a blank line is
//! ignored. At the input prompt every line is a candidate, so an empty
//! line tests the empty string; `:q` goes back to the expression prompt.
//! End of input ends the session from either prompt.

use std::io::{self, BufRead, Write};

use kleene_lib::{Colors, Regex};

use super::run_common;

const EXPRESSION_PROMPT: &str = "expression> ";
const INPUT_PROMPT: &str = "input> ";
const EXIT: &str = "0";
const LEAVE_INPUT: &str = ":q";

pub struct ReplArgs {
    pub color: bool,
}

pub fn run(args: ReplArgs) {
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = session(stdin.lock(), stdout.lock(), Colors::new(args.color)) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

pub fn session(mut input: impl BufRead, mut out: impl Write, colors: Colors) -> io::Result<()> {
    loop {
        let Some(source) = prompt(&mut input, &mut out, EXPRESSION_PROMPT)? else {
            return Ok(());
        };
        if source == EXIT {
            return Ok(());
        }
        if source.trim().is_empty() {
            continue;
        }

        let re = match Regex::new(&source) {
            Ok(re) => re,
            Err(e) => {
                let rendered = e
                    .printer()
                    .source(&source)
                    .colored(colors.is_enabled())
                    .render();
                writeln!(out, "{}", rendered)?;
                continue;
            }
        };
        writeln!(
            out,
            "{}postfix{} {}",
            colors.dim,
            colors.reset,
            re.compiled().postfix_string()
        )?;

        loop {
            let Some(candidate) = prompt(&mut input, &mut out, INPUT_PROMPT)? else {
                return Ok(());
            };
            if candidate == LEAVE_INPUT {
                break;
            }
            writeln!(
                out,
                "{}",
                run_common::format_verdict(re.is_match(&candidate), colors)
            )?;
        }
    }
}

/// Prints `text` and reads one line; `None` at end of input.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}
