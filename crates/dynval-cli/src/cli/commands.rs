//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("dynval")
        .about("Dispatch tables and operators for dynamically typed values")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gen_command())
        .subcommand(eval_command())
        .subcommand(kinds_command())
}

/// Render the dispatch module.
pub fn gen_command() -> Command {
    Command::new("gen")
        .about("Render the operator dispatch module")
        .override_usage(
            "\
  dynval gen [OP]... [-o <FILE>]
  dynval gen [OP]... --bare",
        )
        .after_help(
            r#"EXAMPLES:
  dynval gen                        # every operator, full module
  dynval gen less '<=' -o cmp.rs    # two operators, written to file
  dynval gen modulo --bare          # case table only"#,
        )
        .arg(ops_arg())
        .arg(output_file_arg())
        .arg(bare_arg())
        .arg(no_header_arg())
}

/// Evaluate one operator application.
pub fn eval_command() -> Command {
    Command::new("eval")
        .about("Evaluate an operator on two typed literals")
        .allow_negative_numbers(true)
        .override_usage("  dynval eval <LHS> <OP> <RHS> [-v...]")
        .after_help(
            r#"LITERALS:
  <kind>:<value>   u8:5, f32:1.5, string:abc, bool:true,
                   duration:1h30m, instant:2024-01-01T00:00:00Z
  &<kind>:<value>  reference; &<kind>:nil for a nil reference
  42, -1, 1.5      i64 / f64
  true, false, nil

EXAMPLES:
  dynval eval i32:2 + f32:1.5       # f64 3.5
  dynval eval u16:10 % u16:3        # i64 1
  dynval eval bool:true '<' bool:false -v"#,
        )
        .arg(lhs_arg())
        .arg(op_arg())
        .arg(rhs_arg())
        .arg(trace_arg())
        .arg(verbose_arg())
}

/// List the kind registry.
pub fn kinds_command() -> Command {
    Command::new("kinds").about("List the kind registry in order")
}
