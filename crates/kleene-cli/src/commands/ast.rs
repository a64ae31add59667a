//! Show the syntax tree of each expression.

use std::path::PathBuf;

use kleene_lib::{Colors, Compiler};

use super::run_common;

pub struct AstArgs {
    pub expression: Option<String>,
    pub file: Option<PathBuf>,
    pub end_marker: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let expressions = run_common::load_or_exit(args.expression.as_deref(), args.file.as_deref());
    let colors = Colors::new(args.color);
    let batch = expressions.len() > 1;
    let mut failed = false;

    for (i, expr) in expressions.iter().enumerate() {
        let tree = Compiler::new(&expr.text)
            .with_end_marker(args.end_marker)
            .compile()
            .and_then(|compiled| compiled.tree());

        let tree = match tree {
            Ok(tree) => tree,
            Err(e) => {
                run_common::report(expr, &e, args.color);
                failed = true;
                continue;
            }
        };

        if i > 0 {
            println!();
        }
        if batch {
            println!("{}", run_common::header(expr, colors));
        }
        print!("{}", tree.dump());
    }

    if failed {
        std::process::exit(1);
    }
}
