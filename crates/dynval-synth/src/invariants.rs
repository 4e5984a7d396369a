//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use dynval_core::Op;

use crate::table::{Body, Pattern};

/// Rendering only sees verified tables; reaching this is a synthesizer defect.
pub(crate) fn unrenderable(op: Op, lhs: Pattern, rhs: Pattern, body: Body) -> ! {
    panic!("render: no rendering for {lhs} {op} {rhs} with {body:?} (table must be verified first)")
}
