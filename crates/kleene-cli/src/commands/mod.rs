pub mod ast;
pub mod dump;
pub mod exec;
pub mod expression_loader;
pub mod postfix;
pub mod repl;
pub mod run_common;
pub mod trace;
