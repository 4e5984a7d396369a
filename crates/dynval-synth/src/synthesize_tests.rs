use dynval_core::{ALL, ArrayKind, Kind, NUMERIC, Op};

use crate::synthesize;
use crate::table::{Body, Pattern};

fn scalar(kind: Kind) -> Pattern {
    Pattern::Scalar(kind)
}

#[test]
fn ordering_table_shape() {
    let table = synthesize(Op::Less);

    // 12 numeric arms, then text, instant, duration.
    assert_eq!(table.arms.len(), 15);
    assert_eq!(table.case_count(), 12 * 12 + 3);
    assert_eq!(table.arms[0].lhs, scalar(Kind::Uint));
    assert_eq!(table.arms[12].lhs, scalar(Kind::Text));
    assert_eq!(table.arms[14].lhs, scalar(Kind::Duration));
}

#[test]
fn ordering_keeps_same_kind_native() {
    let table = synthesize(Op::MoreOrEqual);

    for &kind in NUMERIC {
        assert_eq!(table.get(scalar(kind), scalar(kind)), Some(Body::Native));
    }
    assert_eq!(
        table.get(scalar(Kind::U64), scalar(Kind::I64)),
        Some(Body::Promote(Kind::I64))
    );
    assert_eq!(
        table.get(scalar(Kind::U8), scalar(Kind::F32)),
        Some(Body::Promote(Kind::F64))
    );
}

#[test]
fn bool_is_not_ordered() {
    for op in [Op::Less, Op::More, Op::LessOrEqual, Op::MoreOrEqual] {
        let table = synthesize(op);
        assert_eq!(table.get(scalar(Kind::Bool), scalar(Kind::Bool)), None);
    }
}

#[test]
fn equality_table_shape() {
    let table = synthesize(Op::Equal);

    // numeric: native + reference + 11 promoted per arm
    // distinguished: native + reference
    // arrays: one heterogeneous arm, two cases per homogeneous arm
    assert_eq!(table.arms.len(), 12 + 4 + 1 + 16);
    assert_eq!(table.case_count(), 12 * 13 + 4 * 2 + 16 + 16 * 2);
}

#[test]
fn equality_reference_cases_follow_native() {
    let table = synthesize(Op::Equal);
    let arm = &table.arms[1];

    assert_eq!(arm.lhs, scalar(Kind::U8));
    assert_eq!(arm.cases[0].rhs, scalar(Kind::U8));
    assert_eq!(arm.cases[0].body, Body::Native);
    assert_eq!(arm.cases[1].rhs, Pattern::RefTo(Kind::U8));
    assert_eq!(arm.cases[1].body, Body::Native);
    assert!(
        arm.cases[2..]
            .iter()
            .all(|case| matches!(case.body, Body::Promote(_)))
    );
}

#[test]
fn equality_array_cases() {
    let table = synthesize(Op::Equal);
    let any = Pattern::Array(ArrayKind::Any);

    for &kind in ALL {
        let concrete = Pattern::Array(ArrayKind::Of(kind));
        assert_eq!(table.get(any, concrete), Some(Body::Elementwise));
        assert_eq!(table.get(concrete, any), Some(Body::Mirror));
        assert_eq!(table.get(concrete, concrete), Some(Body::Native));
    }
    assert_eq!(
        table.get(
            Pattern::Array(ArrayKind::Of(Kind::U8)),
            Pattern::Array(ArrayKind::Of(Kind::I8))
        ),
        None
    );
}

#[test]
fn modulo_is_integer_only() {
    let table = synthesize(Op::Modulo);

    assert_eq!(table.arms.len(), 10);
    assert_eq!(table.case_count(), 100);
    assert_eq!(table.get(scalar(Kind::F32), scalar(Kind::F32)), None);
    assert_eq!(table.get(scalar(Kind::U8), scalar(Kind::F64)), None);
    assert!(
        table
            .arms
            .iter()
            .flat_map(|arm| &arm.cases)
            .all(|case| case.body == Body::Promote(Kind::I64))
    );
}

#[test]
fn division_is_always_float() {
    let table = synthesize(Op::Divide);

    assert_eq!(table.case_count(), 144);
    assert!(
        table
            .arms
            .iter()
            .flat_map(|arm| &arm.cases)
            .all(|case| case.body == Body::Promote(Kind::F64))
    );
}

#[test]
fn multiplication_includes_duration_scaling() {
    let table = synthesize(Op::Multiply);

    assert_eq!(table.arms.len(), 13);
    assert_eq!(table.case_count(), 13 * 13);
    assert_eq!(
        table.get(scalar(Kind::Duration), scalar(Kind::I32)),
        Some(Body::Promote(Kind::Duration))
    );
    assert_eq!(
        table.get(scalar(Kind::F64), scalar(Kind::Duration)),
        Some(Body::Promote(Kind::Duration))
    );
}

#[test]
fn addition_distinguished_cases() {
    let table = synthesize(Op::Add);

    assert_eq!(table.case_count(), 144 + 4);
    assert_eq!(table.get(scalar(Kind::Text), scalar(Kind::Text)), Some(Body::Concat));
    assert_eq!(
        table.get(scalar(Kind::Instant), scalar(Kind::Duration)),
        Some(Body::Shift)
    );
    assert_eq!(
        table.get(scalar(Kind::Duration), scalar(Kind::Instant)),
        Some(Body::Shift)
    );
    assert_eq!(
        table.get(scalar(Kind::Duration), scalar(Kind::Duration)),
        Some(Body::Checked)
    );
    assert_eq!(table.get(scalar(Kind::Instant), scalar(Kind::Instant)), None);
    assert_eq!(table.get(scalar(Kind::Duration), scalar(Kind::U8)), None);
}

#[test]
fn subtraction_distinguished_cases() {
    let table = synthesize(Op::Subtract);

    assert_eq!(table.case_count(), 144 + 3);
    assert_eq!(
        table.get(scalar(Kind::Instant), scalar(Kind::Instant)),
        Some(Body::Elapsed)
    );
    assert_eq!(
        table.get(scalar(Kind::Instant), scalar(Kind::Duration)),
        Some(Body::Shift)
    );
    assert_eq!(table.get(scalar(Kind::Duration), scalar(Kind::Instant)), None);
    assert_eq!(table.get(scalar(Kind::Text), scalar(Kind::Text)), None);
}

#[test]
fn synthesis_is_deterministic() {
    for op in Op::ALL {
        assert_eq!(synthesize(op), synthesize(op));
    }
}
