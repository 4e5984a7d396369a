use chrono::{DateTime, TimeDelta, Utc};
use dynval_core::{Family, Kind};

use crate::engine::{Array, Integer, Ref, Value};

#[test]
fn scalar_kinds() {
    assert_eq!(Value::U8(1).kind(), Some(Kind::U8));
    assert_eq!(Value::Uint(1).kind(), Some(Kind::Uint));
    assert_eq!(Value::from("a").kind(), Some(Kind::Text));
    assert_eq!(Value::from(TimeDelta::seconds(1)).kind(), Some(Kind::Duration));
    assert_eq!(Value::Nil.kind(), None);
    assert_eq!(Value::List(Vec::new()).kind(), None);
    assert_eq!(Value::Ref(Ref::nil(Kind::U8)).kind(), None);
}

#[test]
fn type_names() {
    assert_eq!(Value::I32(1).type_name(), "i32");
    assert_eq!(Value::Int(1).type_name(), "isize");
    assert_eq!(Value::from("a").type_name(), "string");
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::Array(Array::from(vec![1u16])).type_name(), "[]u16");
    assert_eq!(Value::List(Vec::new()).type_name(), "[]any");
    assert_eq!(Value::Record(Vec::new()).type_name(), "record");
    assert_eq!(Value::Ref(Ref::nil(Kind::F32)).type_name(), "&f32");
}

#[test]
fn references_only_to_scalars() {
    let r = Ref::to(Value::I8(3)).unwrap();

    assert_eq!(r.kind(), Kind::I8);
    assert_eq!(r.target(), Some(&Value::I8(3)));
    assert!(!r.is_nil());
    assert!(Ref::to(Value::Nil).is_none());
    assert!(Ref::to(Value::List(Vec::new())).is_none());
    assert!(Ref::to(Value::Ref(r)).is_none());
}

#[test]
fn absent_values() {
    assert!(Value::Nil.is_absent());
    assert!(Value::Ref(Ref::nil(Kind::Bool)).is_absent());
    assert!(!Value::Ref(Ref::to(Value::Bool(false)).unwrap()).is_absent());
    assert!(!Value::Bool(false).is_absent());
}

#[test]
fn integer_views() {
    assert_eq!(Value::U64(u64::MAX).as_integer(), Some(Integer::Unsigned(u64::MAX as u128)));
    assert_eq!(Value::I8(-1).as_integer(), Some(Integer::Signed(-1)));
    assert_eq!(Value::F32(1.0).as_integer(), None);
    assert_eq!(Integer::Signed(0).family(), Family::Signed);
    assert_eq!(Integer::Unsigned(0).family(), Family::Unsigned);
}

#[test]
fn identity_is_not_operator_equality() {
    assert_eq!(Value::U8(1), Value::U8(1));
    assert_ne!(Value::U8(1), Value::I64(1));
    assert_ne!(Value::F64(f64::NAN), Value::F64(f64::NAN));
}

#[test]
fn array_elements() {
    let array = Array::from(vec![true, false]);

    assert_eq!(array.kind(), Kind::Bool);
    assert_eq!(array.len(), 2);
    assert!(!array.is_empty());
    assert_eq!(array.to_values(), vec![Value::Bool(true), Value::Bool(false)]);
    assert!(Array::from(Vec::<String>::new()).is_empty());
}

#[test]
fn json_scalars() {
    let json = |v: Value| serde_json::to_string(&v).unwrap();

    assert_eq!(json(Value::Nil), "null");
    assert_eq!(json(Value::Bool(true)), "true");
    assert_eq!(json(Value::U64(u64::MAX)), "18446744073709551615");
    assert_eq!(json(Value::I8(-3)), "-3");
    assert_eq!(json(Value::F64(3.5)), "3.5");
    assert_eq!(json(Value::from("a\"b")), r#""a\"b""#);
    assert_eq!(json(Value::Duration(TimeDelta::seconds(2))), r#""PT2S""#);

    let t: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(json(Value::Instant(t)), r#""2024-01-01T00:00:00Z""#);
}

#[test]
fn json_composites() {
    let value = Value::Record(vec![
        ("bytes".to_string(), Value::Array(Array::from(vec![1u8, 2]))),
        (
            "mixed".to_string(),
            Value::List(vec![Value::I32(1), Value::from("x")]),
        ),
        (
            "ref".to_string(),
            Value::Ref(Ref::to(Value::U8(7)).unwrap()),
        ),
        ("nil_ref".to_string(), Value::Ref(Ref::nil(Kind::U8))),
    ]);

    insta::assert_snapshot!(
        serde_json::to_string(&value).unwrap(),
        @r#"{"bytes":[1,2],"mixed":[1,"x"],"ref":7,"nil_ref":null}"#
    );
}
