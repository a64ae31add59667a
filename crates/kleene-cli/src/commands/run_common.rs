//! Helpers shared by the command handlers.

use std::path::Path;

use kleene_lib::{Colors, Error, Regex};

use super::expression_loader::{Expression, load_expressions};

pub fn load_or_exit(expression: Option<&str>, file: Option<&Path>) -> Vec<Expression> {
    match load_expressions(expression, file) {
        Ok(expressions) => expressions,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Renders a compilation error against the expression that caused it.
pub fn render_error(expr: &Expression, err: &Error, color: bool) -> String {
    let mut printer = err
        .printer()
        .source(&expr.text)
        .line(expr.line)
        .colored(color);
    if let Some(origin) = &expr.origin {
        printer = printer.path(origin);
    }
    printer.render()
}

pub fn report(expr: &Expression, err: &Error, color: bool) {
    eprintln!("{}", render_error(expr, err, color));
}

/// Compiles a single inline expression, exiting on failure.
pub fn compile_or_exit(source: &str, color: bool) -> Regex {
    match Regex::new(source) {
        Ok(re) => re,
        Err(e) => {
            report(&Expression::inline(source), &e, color);
            std::process::exit(1);
        }
    }
}

/// Dimmed expression line printed above each result in batch output.
pub fn header(expr: &Expression, colors: Colors) -> String {
    format!("{}{}{}", colors.dim, expr.text, colors.reset)
}

pub fn format_verdict(accepted: bool, colors: Colors) -> String {
    if accepted {
        format!("{}accept{}", colors.green, colors.reset)
    } else {
        format!("{}reject{}", colors.red, colors.reset)
    }
}
