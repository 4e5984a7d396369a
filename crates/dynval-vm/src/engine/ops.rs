//! Operator entry points.

use dynval_core::{Kind, Op, promote};

use super::dispatch;
use super::fallback::structural_equal;
use super::trace::{NoopTracer, Route, Tracer};
use super::{OpError, Value};

type Comparison = fn(&Value, &Value) -> Option<bool>;
type Arithmetic = fn(&Value, &Value) -> Option<Result<Value, OpError>>;

/// Applies operators, reporting every dispatch decision to a tracer.
///
/// The free functions ([`equal`], [`add`], ...) use an `Evaluator<NoopTracer>`.
pub struct Evaluator<T: Tracer = NoopTracer> {
    tracer: T,
}

impl<T: Tracer> Evaluator<T> {
    pub fn new(tracer: T) -> Self {
        Self { tracer }
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Equality never fails: unmatched pairs fall back to structural comparison.
    pub fn equal(&mut self, lhs: &Value, rhs: &Value) -> bool {
        let (route, result) = match dispatch::equal_cases(lhs, rhs) {
            Some(result) => (Route::Table, result),
            None => (Route::Fallback, structural_equal(lhs, rhs)),
        };
        self.tracer.trace_dispatch(Op::Equal, lhs, rhs, route);
        self.tracer.trace_result(Ok(&Value::Bool(result)));
        result
    }

    pub fn less(&mut self, lhs: &Value, rhs: &Value) -> Result<bool, OpError> {
        self.order(Op::Less, lhs, rhs)
    }

    pub fn more(&mut self, lhs: &Value, rhs: &Value) -> Result<bool, OpError> {
        self.order(Op::More, lhs, rhs)
    }

    pub fn less_or_equal(&mut self, lhs: &Value, rhs: &Value) -> Result<bool, OpError> {
        self.order(Op::LessOrEqual, lhs, rhs)
    }

    pub fn more_or_equal(&mut self, lhs: &Value, rhs: &Value) -> Result<bool, OpError> {
        self.order(Op::MoreOrEqual, lhs, rhs)
    }

    pub fn add(&mut self, lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
        self.compute(Op::Add, lhs, rhs)
    }

    pub fn subtract(&mut self, lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
        self.compute(Op::Subtract, lhs, rhs)
    }

    pub fn multiply(&mut self, lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
        self.compute(Op::Multiply, lhs, rhs)
    }

    pub fn divide(&mut self, lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
        self.compute(Op::Divide, lhs, rhs)
    }

    pub fn modulo(&mut self, lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
        self.compute(Op::Modulo, lhs, rhs)
    }

    /// Apply any operator; comparison results come back as [`Value::Bool`].
    pub fn apply(&mut self, op: Op, lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
        match op {
            Op::Equal => Ok(Value::Bool(self.equal(lhs, rhs))),
            Op::Less | Op::More | Op::LessOrEqual | Op::MoreOrEqual => {
                self.order(op, lhs, rhs).map(Value::Bool)
            }
            Op::Add | Op::Subtract | Op::Multiply | Op::Divide | Op::Modulo => {
                self.compute(op, lhs, rhs)
            }
        }
    }

    fn order(&mut self, op: Op, lhs: &Value, rhs: &Value) -> Result<bool, OpError> {
        let cases: Comparison = match op {
            Op::Less => dispatch::less_cases,
            Op::More => dispatch::more_cases,
            Op::LessOrEqual => dispatch::less_or_equal_cases,
            Op::MoreOrEqual => dispatch::more_or_equal_cases,
            _ => return Err(self.invalid(op, lhs, rhs)),
        };

        let result = match cases(lhs, rhs) {
            Some(result) => {
                self.tracer.trace_dispatch(op, lhs, rhs, Route::Table);
                Ok(result)
            }
            None => Err(self.invalid(op, lhs, rhs)),
        };
        match &result {
            Ok(b) => self.tracer.trace_result(Ok(&Value::Bool(*b))),
            Err(err) => self.tracer.trace_result(Err(err)),
        }
        result
    }

    fn compute(&mut self, op: Op, lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
        let cases: Arithmetic = match op {
            Op::Add => dispatch::add_cases,
            Op::Subtract => dispatch::subtract_cases,
            Op::Multiply => dispatch::multiply_cases,
            Op::Divide => dispatch::divide_cases,
            Op::Modulo => dispatch::modulo_cases,
            _ => return Err(self.invalid(op, lhs, rhs)),
        };

        let result = match cases(lhs, rhs) {
            Some(result) => {
                self.tracer.trace_dispatch(op, lhs, rhs, Route::Table);
                result
            }
            None => Err(self.invalid(op, lhs, rhs)),
        };
        self.tracer.trace_result(result.as_ref());
        result
    }

    fn invalid(&mut self, op: Op, lhs: &Value, rhs: &Value) -> OpError {
        self.tracer.trace_dispatch(op, lhs, rhs, Route::Invalid);
        OpError::InvalidOperation {
            op,
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }
    }
}

pub fn equal(lhs: &Value, rhs: &Value) -> bool {
    Evaluator::new(NoopTracer).equal(lhs, rhs)
}

pub fn less(lhs: &Value, rhs: &Value) -> Result<bool, OpError> {
    Evaluator::new(NoopTracer).less(lhs, rhs)
}

pub fn more(lhs: &Value, rhs: &Value) -> Result<bool, OpError> {
    Evaluator::new(NoopTracer).more(lhs, rhs)
}

pub fn less_or_equal(lhs: &Value, rhs: &Value) -> Result<bool, OpError> {
    Evaluator::new(NoopTracer).less_or_equal(lhs, rhs)
}

pub fn more_or_equal(lhs: &Value, rhs: &Value) -> Result<bool, OpError> {
    Evaluator::new(NoopTracer).more_or_equal(lhs, rhs)
}

pub fn add(lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
    Evaluator::new(NoopTracer).add(lhs, rhs)
}

pub fn subtract(lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
    Evaluator::new(NoopTracer).subtract(lhs, rhs)
}

pub fn multiply(lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
    Evaluator::new(NoopTracer).multiply(lhs, rhs)
}

/// Always produces `f64`.
pub fn divide(lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
    Evaluator::new(NoopTracer).divide(lhs, rhs)
}

/// Integer operands only.
pub fn modulo(lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
    Evaluator::new(NoopTracer).modulo(lhs, rhs)
}

pub fn apply(op: Op, lhs: &Value, rhs: &Value) -> Result<Value, OpError> {
    Evaluator::new(NoopTracer).apply(op, lhs, rhs)
}

/// Promotion domain of the operands' scalar kinds under `op`.
///
/// `None` when either operand is not a scalar or the lattice does not govern
/// the pair (text, bool, instant, float modulo).
pub fn result_kind(op: Op, lhs: &Value, rhs: &Value) -> Option<Kind> {
    promote(op, lhs.kind()?, rhs.kind()?)
}
