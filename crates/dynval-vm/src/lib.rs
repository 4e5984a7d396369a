//! Binary operators over dynamically typed values.
//!
//! Every operator first consults a case table synthesized at build time from
//! the kind registry and promotion lattice in `dynval-core`. Equality then
//! falls back to reference-transparent structural comparison; ordering and
//! arithmetic fail with [`OpError::InvalidOperation`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{
    Array, Evaluator, Extension, Integer, NoopTracer, OpError, PrintTracer, Ref, Route, Tracer,
    Value, Verbosity, add, apply, divide, equal, less, less_or_equal, modulo, more, more_or_equal,
    multiply, result_kind, subtract,
};
