//! Show canonical infix and postfix forms.

use std::path::PathBuf;

use kleene_lib::{Colors, Compiled, Compiler};

use super::expression_loader::Expression;
use super::run_common;

pub struct PostfixArgs {
    pub expression: Option<String>,
    pub file: Option<PathBuf>,
    pub end_marker: bool,
    pub color: bool,
}

pub fn run(args: PostfixArgs) {
    let expressions = run_common::load_or_exit(args.expression.as_deref(), args.file.as_deref());
    let colors = Colors::new(args.color);
    let mut failed = false;

    for (i, expr) in expressions.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match Compiler::new(&expr.text)
            .with_end_marker(args.end_marker)
            .compile()
        {
            Ok(compiled) => print!("{}", render(expr, &compiled, colors)),
            Err(e) => {
                run_common::report(expr, &e, args.color);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

pub fn render(expr: &Expression, compiled: &Compiled, colors: Colors) -> String {
    format!(
        "{dim}expression{reset} {}\n{dim}infix{reset}      {}\n{dim}postfix{reset}    {}\n",
        expr.text,
        compiled.infix_string(),
        compiled.postfix_string(),
        dim = colors.dim,
        reset = colors.reset,
    )
}
