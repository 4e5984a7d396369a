//! Core data for dynval: the kind registry, the operator set, and the
//! promotion lattice.
//!
//! Everything here is pure data shared by the table synthesizer (build time)
//! and the operation library (run time). Keeping the lattice in one place means
//! generated tables and runtime diagnostics always agree on result kinds.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod kind;
mod op;
mod promote;


pub use kind::{
    ALL, ArrayKind, DISTINGUISHED, FLOAT, Family, Kind, NUMERIC, NUMERIC_WITH_DURATION, SIGNED,
    UNSIGNED,
};
pub use op::Op;
pub use promote::promote;
