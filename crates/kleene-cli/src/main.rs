mod cli;
mod commands;

use cli::{AstParams, DumpParams, ExecParams, PostfixParams, ReplParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("postfix", m)) => {
            let params = PostfixParams::from_matches(m);
            commands::postfix::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("exec", m)) => {
            let params = ExecParams::from_matches(m);
            commands::exec::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("repl", m)) => {
            let params = ReplParams::from_matches(m);
            commands::repl::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
