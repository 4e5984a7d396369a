//! Case enumeration.

use dynval_core::{ALL, ArrayKind, DISTINGUISHED, Kind, Op, promote};

use crate::table::{Body, Pattern, Table};

/// Build the complete case table for `op`.
///
/// Arms come out in registry order: the pairwise numeric arms first, then the
/// distinguished kinds, then (for `==`) the array arms.
pub fn synthesize(op: Op) -> Table {
    let mut table = Table::new(op);

    if op == Op::Equal {
        equality(&mut table);
    } else {
        pairwise(&mut table);
    }
    distinguished(&mut table);
    if op == Op::Equal {
        arrays(&mut table);
    }

    table
}

/// `==` over the numeric family: reference-transparent cases first, then one
/// direct case per other kind.
fn equality(table: &mut Table) {
    let kinds = table.op.pairwise_kinds();
    for &a in kinds {
        table.push(Pattern::Scalar(a), Pattern::Scalar(a), Body::Native);
        table.push(Pattern::Scalar(a), Pattern::RefTo(a), Body::Native);

        for &b in kinds {
            if a == b {
                continue;
            }
            if let Some(domain) = promote(Op::Equal, a, b) {
                table.push(Pattern::Scalar(a), Pattern::Scalar(b), Body::Promote(domain));
            }
        }
    }
}

fn pairwise(table: &mut Table) {
    let op = table.op;
    let kinds = op.pairwise_kinds();
    for &a in kinds {
        for &b in kinds {
            let Some(domain) = promote(op, a, b) else {
                continue;
            };
            // Same-kind comparisons stay native so wide unsigned values keep their order.
            let body = if op.is_comparison() && a == b {
                Body::Native
            } else {
                Body::Promote(domain)
            };
            table.push(Pattern::Scalar(a), Pattern::Scalar(b), body);
        }
    }
}

/// Hand-specified cases for text, bool, instant, and duration.
fn distinguished(table: &mut Table) {
    use Kind::{Bool, Duration, Instant, Text};

    let scalar = Pattern::Scalar;
    match table.op {
        Op::Equal => {
            for &kind in DISTINGUISHED {
                table.push(scalar(kind), scalar(kind), Body::Native);
                table.push(scalar(kind), Pattern::RefTo(kind), Body::Native);
            }
        }
        Op::Less | Op::More | Op::LessOrEqual | Op::MoreOrEqual => {
            for &kind in DISTINGUISHED {
                if kind != Bool {
                    table.push(scalar(kind), scalar(kind), Body::Native);
                }
            }
        }
        Op::Add => {
            table.push(scalar(Text), scalar(Text), Body::Concat);
            table.push(scalar(Instant), scalar(Duration), Body::Shift);
            table.push(scalar(Duration), scalar(Duration), Body::Checked);
            table.push(scalar(Duration), scalar(Instant), Body::Shift);
        }
        Op::Subtract => {
            table.push(scalar(Instant), scalar(Instant), Body::Elapsed);
            table.push(scalar(Instant), scalar(Duration), Body::Shift);
            table.push(scalar(Duration), scalar(Duration), Body::Checked);
        }
        Op::Multiply | Op::Divide | Op::Modulo => {}
    }
}

fn arrays(table: &mut Table) {
    let any = Pattern::Array(ArrayKind::Any);

    for &kind in ALL {
        table.push(any, Pattern::Array(ArrayKind::Of(kind)), Body::Elementwise);
    }
    for &kind in ALL {
        let concrete = Pattern::Array(ArrayKind::Of(kind));
        table.push(concrete, any, Body::Mirror);
        table.push(concrete, concrete, Body::Native);
    }
}
