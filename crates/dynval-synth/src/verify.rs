//! Table verification against the promotion lattice.
//!
//! Obligations are re-derived from the registry independently of
//! `synthesize`, so a regression in either side is caught before rendering.

use std::collections::HashSet;

use dynval_core::{ALL, ArrayKind, DISTINGUISHED, Kind, Op, promote};

use crate::SynthError;
use crate::table::{Body, Case, Pattern, Table};

/// Check that `table` is total and contains only supported, lattice-consistent
/// cases.
pub fn verify(table: &Table) -> Result<(), SynthError> {
    let op = table.op;
    let mut arms = HashSet::new();
    let mut seen = HashSet::new();

    for arm in &table.arms {
        if !arms.insert(arm.lhs) {
            return Err(SynthError::DuplicateArm { op, lhs: arm.lhs });
        }
        for case in &arm.cases {
            if !seen.insert((arm.lhs, case.rhs)) {
                return Err(SynthError::DuplicateCase {
                    op,
                    lhs: arm.lhs,
                    rhs: case.rhs,
                });
            }
            check_case(op, arm.lhs, case)?;
        }
    }

    for (lhs, rhs) in required_pairs(op) {
        if !seen.contains(&(lhs, rhs)) {
            return Err(SynthError::MissingCase { op, lhs, rhs });
        }
    }

    Ok(())
}

/// Every pair the table must define.
fn required_pairs(op: Op) -> Vec<(Pattern, Pattern)> {
    let kinds = op.pairwise_kinds();
    let mut pairs: Vec<(Pattern, Pattern)> = kinds
        .iter()
        .flat_map(|&a| kinds.iter().map(move |&b| (a, b)))
        .filter(|&(a, b)| promote(op, a, b).is_some())
        .map(|(a, b)| (Pattern::Scalar(a), Pattern::Scalar(b)))
        .collect();

    if op == Op::Equal {
        for &kind in kinds.iter().chain(DISTINGUISHED) {
            pairs.push((Pattern::Scalar(kind), Pattern::Scalar(kind)));
            pairs.push((Pattern::Scalar(kind), Pattern::RefTo(kind)));
        }
        let any = Pattern::Array(ArrayKind::Any);
        for &kind in ALL {
            let concrete = Pattern::Array(ArrayKind::Of(kind));
            pairs.push((any, concrete));
            pairs.push((concrete, any));
            pairs.push((concrete, concrete));
        }
    }

    pairs
}

fn check_case(op: Op, lhs: Pattern, case: &Case) -> Result<(), SynthError> {
    use Kind::{Duration, Instant, Text};

    let forbidden = || SynthError::ForbiddenCase {
        op,
        lhs,
        rhs: case.rhs,
    };

    match (lhs, case.rhs, case.body) {
        (Pattern::Scalar(a), Pattern::Scalar(b), Body::Promote(found)) => {
            let expected = promote(op, a, b).ok_or_else(forbidden)?;
            if expected != found {
                return Err(SynthError::Inconsistent {
                    op,
                    lhs: a,
                    rhs: b,
                    expected,
                    found,
                });
            }
            Ok(())
        }

        (Pattern::Scalar(a), Pattern::Scalar(b), Body::Native) if a == b => {
            let supported = match op {
                Op::Equal => true,
                Op::Less | Op::More | Op::LessOrEqual | Op::MoreOrEqual => a != Kind::Bool,
                _ => false,
            };
            if supported { Ok(()) } else { Err(forbidden()) }
        }

        (Pattern::Scalar(a), Pattern::RefTo(b), Body::Native) if a == b && op == Op::Equal => {
            Ok(())
        }

        (Pattern::Scalar(Text), Pattern::Scalar(Text), Body::Concat) if op == Op::Add => Ok(()),

        (Pattern::Scalar(Instant), Pattern::Scalar(Duration), Body::Shift)
            if matches!(op, Op::Add | Op::Subtract) =>
        {
            Ok(())
        }
        (Pattern::Scalar(Duration), Pattern::Scalar(Instant), Body::Shift) if op == Op::Add => {
            Ok(())
        }

        (Pattern::Scalar(Instant), Pattern::Scalar(Instant), Body::Elapsed)
            if op == Op::Subtract =>
        {
            Ok(())
        }

        (Pattern::Scalar(Duration), Pattern::Scalar(Duration), Body::Checked)
            if matches!(op, Op::Add | Op::Subtract) =>
        {
            Ok(())
        }

        (
            Pattern::Array(ArrayKind::Any),
            Pattern::Array(ArrayKind::Of(_)),
            Body::Elementwise,
        )
        | (Pattern::Array(ArrayKind::Of(_)), Pattern::Array(ArrayKind::Any), Body::Mirror)
            if op == Op::Equal =>
        {
            Ok(())
        }

        (Pattern::Array(ArrayKind::Of(a)), Pattern::Array(ArrayKind::Of(b)), Body::Native)
            if a == b && op == Op::Equal =>
        {
            Ok(())
        }

        _ => Err(forbidden()),
    }
}
