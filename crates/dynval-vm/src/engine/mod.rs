//! Operator evaluation over dynamic values.
//!
//! `dispatch` holds the synthesized case tables; `fallback` is the structural
//! equality used when no equality case matches.

mod convert;
#[allow(
    unused_imports,
    unused_parens,
    clippy::unnecessary_cast,
    clippy::clone_on_copy,
    clippy::double_parens
)]
mod dispatch;
mod error;
mod fallback;
mod ops;
mod trace;
mod value;

#[cfg(test)]
mod value_tests;

pub use error::OpError;
pub use ops::{
    Evaluator, add, apply, divide, equal, less, less_or_equal, modulo, more, more_or_equal,
    multiply, result_kind, subtract,
};
pub use trace::{NoopTracer, PrintTracer, Route, Tracer, Verbosity};
pub use value::{Array, Extension, Integer, Ref, Value};
