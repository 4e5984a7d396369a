//! Dynamic value representation.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use dynval_core::{ArrayKind, Family, Kind};

/// Runtime-typed value.
///
/// Scalar variants share their identifiers with [`Kind`], so generated case
/// tables can name them from the registry alone.
///
/// `PartialEq` is representation identity (same variant, same payload). Operator
/// equality, with promotion and reference transparency, is [`equal`](super::equal).
#[derive(Clone, Debug)]
pub enum Value {
    Nil,
    Bool(bool),
    Uint(usize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Int(isize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Text(String),
    Instant(DateTime<Utc>),
    Duration(TimeDelta),
    /// Homogeneous sequence.
    Array(Array),
    /// Heterogeneous sequence.
    List(Vec<Value>),
    /// Record with ordered fields.
    Record(Vec<(String, Value)>),
    Ref(Ref),
    /// Caller-defined type the registry does not know about.
    Extension(Arc<dyn Extension>),
}

impl Value {
    /// Registry kind of a scalar value. Composite values, references, nil and
    /// extensions have none.
    pub fn kind(&self) -> Option<Kind> {
        let kind = match self {
            Value::Bool(_) => Kind::Bool,
            Value::Uint(_) => Kind::Uint,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::Int(_) => Kind::Int,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Text(_) => Kind::Text,
            Value::Instant(_) => Kind::Instant,
            Value::Duration(_) => Kind::Duration,
            Value::Nil
            | Value::Array(_)
            | Value::List(_)
            | Value::Record(_)
            | Value::Ref(_)
            | Value::Extension(_) => return None,
        };
        Some(kind)
    }

    /// Name used in diagnostics: `u8`, `[]string`, `[]any`, `&i32`, `record`, `nil`.
    pub fn type_name(&self) -> String {
        match self {
            Value::Nil => "nil".to_string(),
            Value::Array(array) => ArrayKind::Of(array.kind()).to_string(),
            Value::List(_) => ArrayKind::Any.to_string(),
            Value::Record(_) => "record".to_string(),
            Value::Ref(r) => format!("&{}", r.kind()),
            Value::Extension(ext) => ext.type_name().to_string(),
            scalar => scalar.kind().map_or("?", Kind::name).to_string(),
        }
    }

    /// Nil, or a reference with no target.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Ref(r) => r.is_nil(),
            _ => false,
        }
    }

    /// Integer view of integer scalars and integer-like extensions.
    pub fn as_integer(&self) -> Option<Integer> {
        let integer = match self {
            Value::Uint(v) => Integer::Unsigned(*v as u128),
            Value::U8(v) => Integer::Unsigned(*v as u128),
            Value::U16(v) => Integer::Unsigned(*v as u128),
            Value::U32(v) => Integer::Unsigned(*v as u128),
            Value::U64(v) => Integer::Unsigned(*v as u128),
            Value::Int(v) => Integer::Signed(*v as i128),
            Value::I8(v) => Integer::Signed(*v as i128),
            Value::I16(v) => Integer::Signed(*v as i128),
            Value::I32(v) => Integer::Signed(*v as i128),
            Value::I64(v) => Integer::Signed(*v as i128),
            Value::Extension(ext) => return ext.as_integer(),
            _ => return None,
        };
        Some(integer)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Instant(a), Value::Instant(b)) => a == b,
            (Value::Duration(a), Value::Duration(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => a == b,
            (Value::Extension(a), Value::Extension(b)) => a.equals(b.as_ref()),
            _ => false,
        }
    }
}

macro_rules! define_array {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Homogeneous sequence, one variant per registry kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Array {
            $($variant(Vec<$ty>),)*
        }

        impl Array {
            pub fn kind(&self) -> Kind {
                match self {
                    $(Array::$variant(_) => Kind::$variant,)*
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    $(Array::$variant(items) => items.len(),)*
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Elements as individual values.
            pub fn to_values(&self) -> Vec<Value> {
                match self {
                    $(Array::$variant(items) => items.iter().cloned().map(Value::$variant).collect(),)*
                }
            }
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl From<Vec<$ty>> for Array {
                fn from(items: Vec<$ty>) -> Self {
                    Array::$variant(items)
                }
            }
        )*
    };
}

define_array! {
    Uint(usize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Int(isize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Text(String),
    Bool(bool),
    Instant(DateTime<Utc>),
    Duration(TimeDelta),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Ref> for Value {
    fn from(r: Ref) -> Self {
        Value::Ref(r)
    }
}

/// Reference to a scalar value, possibly nil.
///
/// The declared kind survives even when the reference is nil.
#[derive(Clone, Debug, PartialEq)]
pub struct Ref {
    kind: Kind,
    target: Option<Arc<Value>>,
}

impl Ref {
    /// Reference to `value`, or `None` if it has no registry kind.
    pub fn to(value: Value) -> Option<Ref> {
        let kind = value.kind()?;
        Some(Ref {
            kind,
            target: Some(Arc::new(value)),
        })
    }

    pub fn nil(kind: Kind) -> Ref {
        Ref { kind, target: None }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn target(&self) -> Option<&Value> {
        self.target.as_deref()
    }

    pub fn is_nil(&self) -> bool {
        self.target.is_none()
    }
}

/// Numeric view of an integer value, wide enough for every registry integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Integer {
    Signed(i128),
    Unsigned(u128),
}

impl Integer {
    pub fn family(self) -> Family {
        match self {
            Integer::Signed(_) => Family::Signed,
            Integer::Unsigned(_) => Family::Unsigned,
        }
    }
}

/// Capability contract for caller-defined values.
pub trait Extension: fmt::Debug + Send + Sync {
    /// Name used in diagnostics.
    fn type_name(&self) -> &str;

    /// Integer view, for integer-like types.
    fn as_integer(&self) -> Option<Integer> {
        None
    }

    /// Structural equality against another extension value.
    fn equals(&self, other: &dyn Extension) -> bool;

    fn as_any(&self) -> &dyn Any;
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Nil => serializer.serialize_none(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Uint(v) => serializer.serialize_u64(*v as u64),
            Value::U8(v) => serializer.serialize_u8(*v),
            Value::U16(v) => serializer.serialize_u16(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::Int(v) => serializer.serialize_i64(*v as i64),
            Value::I8(v) => serializer.serialize_i8(*v),
            Value::I16(v) => serializer.serialize_i16(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::F32(v) => serializer.serialize_f32(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Instant(t) => {
                serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            // ISO 8601, e.g. `PT2S`
            Value::Duration(d) => serializer.collect_str(d),
            Value::Array(array) => {
                let items = array.to_values();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in &items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Ref(r) => match r.target() {
                Some(target) => target.serialize(serializer),
                None => serializer.serialize_none(),
            },
            Value::Extension(ext) => match ext.as_integer() {
                Some(Integer::Signed(v)) => serializer.serialize_i128(v),
                Some(Integer::Unsigned(v)) => serializer.serialize_u128(v),
                None => serializer.serialize_str(ext.type_name()),
            },
        }
    }
}
