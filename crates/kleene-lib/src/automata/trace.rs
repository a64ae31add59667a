//! Tracing for automaton simulation.
//!
//! The simulator reports every configuration change to a [`Tracer`].
//! [`NoopTracer`] compiles to nothing; [`PrintTracer`] collects one line per
//! event for display.
//!
//! Tracer methods receive the automaton and its raw configuration; turning a
//! configuration into state numbers happens only inside tracers that print.

use crate::Colors;

use super::{Automaton, StateId};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Steps and verdict.
    #[default]
    Default,
    /// Verbose (-v): also the active states after every step.
    Verbose,
}

/// Simulation instrumentation.
///
/// - `trace_start` - before the first symbol is consumed
/// - `trace_step` - after a symbol moved the automaton
/// - `trace_stuck` - when a symbol has no move, ending the run
/// - `trace_verdict` - once, with the final result
pub trait Tracer {
    fn trace_start<A: Automaton + ?Sized>(&mut self, automaton: &A, config: &A::Config);

    fn trace_step<A: Automaton + ?Sized>(
        &mut self,
        automaton: &A,
        position: usize,
        symbol: char,
        config: &A::Config,
    );

    fn trace_stuck(&mut self, position: usize, symbol: char);

    fn trace_verdict(&mut self, accepted: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start<A: Automaton + ?Sized>(&mut self, _automaton: &A, _config: &A::Config) {}

    #[inline(always)]
    fn trace_step<A: Automaton + ?Sized>(
        &mut self,
        _automaton: &A,
        _position: usize,
        _symbol: char,
        _config: &A::Config,
    ) {
    }

    #[inline(always)]
    fn trace_stuck(&mut self, _position: usize, _symbol: char) {}

    #[inline(always)]
    fn trace_verdict(&mut self, _accepted: bool) {}
}

/// Tracer that collects a human-readable trace.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, each terminated by a newline.
    pub fn output(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn format_states(&self, states: &[StateId]) -> String {
        let c = &self.colors;
        let names: Vec<_> = states
            .iter()
            .map(|s| format!("{}{}{}", c.blue, s, c.reset))
            .collect();
        format!("{{{}}}", names.join(", "))
    }

    fn format_position(&self, position: usize, symbol: char) -> String {
        let c = &self.colors;
        format!(
            "  {}{:02}{}  {}{}{}",
            c.dim, position, c.reset, c.green, symbol, c.reset
        )
    }
}

impl Tracer for PrintTracer {
    fn trace_start<A: Automaton + ?Sized>(&mut self, automaton: &A, config: &A::Config) {
        let line = match self.verbosity {
            Verbosity::Default => "start".to_string(),
            Verbosity::Verbose => {
                let states = automaton.active_states(config);
                format!("start {}", self.format_states(&states))
            }
        };
        self.lines.push(line);
    }

    fn trace_step<A: Automaton + ?Sized>(
        &mut self,
        automaton: &A,
        position: usize,
        symbol: char,
        config: &A::Config,
    ) {
        let mut line = self.format_position(position, symbol);
        if self.verbosity == Verbosity::Verbose {
            let states = automaton.active_states(config);
            let c = &self.colors;
            line.push_str(&format!(" {}→{} {}", c.dim, c.reset, self.format_states(&states)));
        }
        self.lines.push(line);
    }

    fn trace_stuck(&mut self, position: usize, symbol: char) {
        let c = self.colors;
        let line = format!(
            "{} {}→{} {}∅{}",
            self.format_position(position, symbol),
            c.dim,
            c.reset,
            c.red,
            c.reset
        );
        self.lines.push(line);
    }

    fn trace_verdict(&mut self, accepted: bool) {
        let c = self.colors;
        let line = if accepted {
            format!("{}accept{}", c.green, c.reset)
        } else {
            format!("{}reject{}", c.red, c.reset)
        };
        self.lines.push(line);
    }
}
