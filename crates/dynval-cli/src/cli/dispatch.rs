//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use dynval_core::Op;
use dynval_vm::Verbosity;

use crate::commands::eval::EvalArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenParams {
    pub ops: Vec<Op>,
    pub output: Option<PathBuf>,
    pub bare: bool,
    pub no_header: bool,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ops: m
                .get_many::<Op>("ops")
                .map(|ops| ops.copied().collect())
                .unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            bare: m.get_flag("bare"),
            no_header: m.get_flag("no_header"),
        }
    }
}

impl From<GenParams> for GenerateArgs {
    fn from(p: GenParams) -> Self {
        let ops = if p.ops.is_empty() {
            Op::ALL.to_vec()
        } else {
            p.ops
        };

        Self {
            ops,
            output: p.output,
            bare: p.bare,
            header: !p.no_header,
        }
    }
}

pub struct EvalParams {
    pub lhs: String,
    pub op: Op,
    pub rhs: String,
    pub trace: bool,
    pub verbose: u8,
}

impl EvalParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            lhs: m.get_one::<String>("lhs").cloned().unwrap_or_default(),
            op: m.get_one::<Op>("op").copied().unwrap_or(Op::Equal),
            rhs: m.get_one::<String>("rhs").cloned().unwrap_or_default(),
            trace: m.get_flag("trace"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<EvalParams> for EvalArgs {
    fn from(p: EvalParams) -> Self {
        let trace = match p.verbose {
            0 if !p.trace => None,
            0 => Some(Verbosity::Default),
            1 => Some(Verbosity::Verbose),
            _ => Some(Verbosity::VeryVerbose),
        };

        Self {
            lhs: p.lhs,
            op: p.op,
            rhs: p.rhs,
            trace,
        }
    }
}

pub struct KindsParams;

impl KindsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}
