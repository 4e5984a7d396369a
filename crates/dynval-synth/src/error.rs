//! Synthesis inconsistencies.
//!
//! The synthesizer should never produce any of these; they exist so a broken
//! rule fails the build instead of shipping a wrong table.

use dynval_core::{Kind, Op};

use crate::table::Pattern;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthError {
    #[error("`{op}` table has more than one arm for {lhs}")]
    DuplicateArm { op: Op, lhs: Pattern },

    #[error("`{op}` table has more than one case for {lhs} {op} {rhs}")]
    DuplicateCase { op: Op, lhs: Pattern, rhs: Pattern },

    #[error("`{op}` table is missing the case for {lhs} {op} {rhs}")]
    MissingCase { op: Op, lhs: Pattern, rhs: Pattern },

    #[error("`{op}` table defines {lhs} {op} {rhs}, which is not a supported pairing")]
    ForbiddenCase { op: Op, lhs: Pattern, rhs: Pattern },

    #[error("{lhs} {op} {rhs} promotes to {found}, but the lattice requires {expected}")]
    Inconsistent {
        op: Op,
        lhs: Kind,
        rhs: Kind,
        expected: Kind,
        found: Kind,
    },
}
