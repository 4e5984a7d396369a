//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use dynval_core::Op;

/// Accepts an operator name (`less`) or symbol (`<`).
fn parse_op(s: &str) -> Result<Op, String> {
    Op::from_name(s).ok_or_else(|| format!("unknown operator `{s}`"))
}

/// Operators to render (positional, repeatable).
pub fn ops_arg() -> Arg {
    Arg::new("ops")
        .value_name("OP")
        .num_args(0..)
        .value_parser(parse_op)
        .help("Operators to render by name or symbol (default: all)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Emit only the case tables (--bare).
pub fn bare_arg() -> Arg {
    Arg::new("bare")
        .long("bare")
        .action(ArgAction::SetTrue)
        .help("Emit only the case tables, without the module template")
}

/// Omit the @generated header (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Don't emit the @generated header")
}

/// Left operand literal (positional).
pub fn lhs_arg() -> Arg {
    Arg::new("lhs")
        .value_name("LHS")
        .required(true)
        .help("Left operand literal, e.g. u8:5")
}

/// Operator (positional).
pub fn op_arg() -> Arg {
    Arg::new("op")
        .value_name("OP")
        .required(true)
        .value_parser(parse_op)
        .help("Operator by name or symbol")
}

/// Right operand literal (positional).
pub fn rhs_arg() -> Arg {
    Arg::new("rhs")
        .value_name("RHS")
        .required(true)
        .help("Right operand literal, e.g. f32:1.5")
}

/// Print dispatch trace to stderr (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print the dispatch trace to stderr")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Trace verbosity (-v for operand kinds, -vv for operand values); implies --trace")
}
