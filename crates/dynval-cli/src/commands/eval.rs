use dynval_core::Op;
use dynval_vm::{Evaluator, OpError, PrintTracer, Tracer, Value, Verbosity};

use super::literal::{self, LiteralError};

pub struct EvalArgs {
    pub lhs: String,
    pub op: Op,
    pub rhs: String,
    /// `None` disables the trace.
    pub trace: Option<Verbosity>,
}

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Literal(#[from] LiteralError),
    #[error(transparent)]
    Op(#[from] OpError),
}

pub fn run(args: EvalArgs) {
    let mut eval = Evaluator::new(PrintTracer::new(args.trace.unwrap_or_default()));
    let result = evaluate(&mut eval, &args);

    if args.trace.is_some() {
        eval.tracer().print();
    }

    match result {
        Ok(value) => println!("{}", format_result(&value)),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub(crate) fn evaluate<T: Tracer>(
    eval: &mut Evaluator<T>,
    args: &EvalArgs,
) -> Result<Value, EvalError> {
    let lhs = literal::parse(&args.lhs)?;
    let rhs = literal::parse(&args.rhs)?;
    Ok(eval.apply(args.op, &lhs, &rhs)?)
}

/// `<kind> <json>`, e.g. `f64 3.5`.
pub(crate) fn format_result(value: &Value) -> String {
    let json = serde_json::to_string(value).unwrap_or_else(|_| "?".to_string());
    format!("{} {}", value.type_name(), json)
}
