//! Tracing of dispatch decisions.
//!
//! `NoopTracer` methods are `#[inline(always)]` and empty, so the free operator
//! functions pay nothing for instrumentation. `PrintTracer` records one line
//! per dispatch and one per failed or (when verbose) successful result.

use std::fmt;

use dynval_core::Op;

use super::{OpError, Value};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Operator and route only.
    #[default]
    Default,
    /// Verbose (-v): operand kinds, result lines.
    Verbose,
    /// Very verbose (-vv): operand values as JSON.
    VeryVerbose,
}

/// How an operand pair was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// A synthesized case matched.
    Table,
    /// Equality fell back to structural comparison.
    Fallback,
    /// Nothing accepts the pair.
    Invalid,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Route::Table => "table",
            Route::Fallback => "fallback",
            Route::Invalid => "invalid",
        })
    }
}

/// Instrumentation hooks called by [`Evaluator`](super::Evaluator).
pub trait Tracer {
    /// Called once per operator application, after the route is known.
    fn trace_dispatch(&mut self, op: Op, lhs: &Value, rhs: &Value, route: Route);

    /// Called with the outcome of the application.
    fn trace_result(&mut self, result: Result<&Value, &OpError>);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_dispatch(&mut self, _op: Op, _lhs: &Value, _rhs: &Value, _route: Route) {}

    #[inline(always)]
    fn trace_result(&mut self, _result: Result<&Value, &OpError>) {}
}

/// Tracer that collects dispatch lines for display.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn operand(&self, value: &Value) -> String {
        match self.verbosity {
            Verbosity::VeryVerbose => {
                let json = serde_json::to_string(value).unwrap_or_else(|_| "?".to_string());
                format!("{} {json}", value.type_name())
            }
            _ => value.type_name(),
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_dispatch(&mut self, op: Op, lhs: &Value, rhs: &Value, route: Route) {
        let line = match self.verbosity {
            Verbosity::Default => format!("{} -> {route}", op.name()),
            Verbosity::Verbose | Verbosity::VeryVerbose => format!(
                "{}: {} {op} {} -> {route}",
                op.name(),
                self.operand(lhs),
                self.operand(rhs)
            ),
        };
        self.lines.push(line);
    }

    fn trace_result(&mut self, result: Result<&Value, &OpError>) {
        match result {
            Err(err) => self.lines.push(format!("  ! {err}")),
            Ok(_) if self.verbosity == Verbosity::Default => {}
            Ok(value) => {
                let line = format!("  = {}", self.operand(value));
                self.lines.push(line);
            }
        }
    }
}
