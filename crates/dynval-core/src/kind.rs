//! The kind registry.
//!
//! Declaration order is registry order: unsigned integers, signed integers,
//! floats, then the distinguished kinds. Table synthesis iterates these slices
//! as-is, so reordering them changes generated output.

use std::fmt;

use serde::{Serialize, Serializer};

/// Partition of the registry used by the promotion lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Unsigned,
    Signed,
    Float,
    /// Text, boolean, instant, duration: not governed by promotion.
    Distinguished,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Family::Unsigned => "unsigned",
            Family::Signed => "signed",
            Family::Float => "float",
            Family::Distinguished => "distinguished",
        })
    }
}

macro_rules! define_kinds {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => {
                name: $name:literal,
                rust: $rust:literal,
                family: $family:ident $(,)?
            }
        ),* $(,)?
    ) => {
        /// One primitive shape a dynamic value may hold.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Kind {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl Kind {
            /// Name used in diagnostics and by the CLI (`u8`, `string`, `instant`).
            pub fn name(self) -> &'static str {
                match self {
                    $(Kind::$variant => $name,)*
                }
            }

            /// Rust type of the payload carried by this kind.
            pub fn rust_type(self) -> &'static str {
                match self {
                    $(Kind::$variant => $rust,)*
                }
            }

            /// Variant identifier shared by `Value` and `Array` in the runtime.
            pub fn variant(self) -> &'static str {
                match self {
                    $(Kind::$variant => stringify!($variant),)*
                }
            }

            pub fn family(self) -> Family {
                match self {
                    $(Kind::$variant => Family::$family,)*
                }
            }

            /// Inverse of [`Kind::name`].
            pub fn from_name(name: &str) -> Option<Kind> {
                match name {
                    $($name => Some(Kind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

define_kinds! {
    /// Platform-width unsigned integer.
    Uint => { name: "usize", rust: "usize", family: Unsigned },
    U8 => { name: "u8", rust: "u8", family: Unsigned },
    U16 => { name: "u16", rust: "u16", family: Unsigned },
    U32 => { name: "u32", rust: "u32", family: Unsigned },
    U64 => { name: "u64", rust: "u64", family: Unsigned },
    /// Platform-width signed integer.
    Int => { name: "isize", rust: "isize", family: Signed },
    I8 => { name: "i8", rust: "i8", family: Signed },
    I16 => { name: "i16", rust: "i16", family: Signed },
    I32 => { name: "i32", rust: "i32", family: Signed },
    I64 => { name: "i64", rust: "i64", family: Signed },
    F32 => { name: "f32", rust: "f32", family: Float },
    F64 => { name: "f64", rust: "f64", family: Float },
    Text => { name: "string", rust: "String", family: Distinguished },
    Bool => { name: "bool", rust: "bool", family: Distinguished },
    /// Point in time, UTC.
    Instant => { name: "instant", rust: "DateTime<Utc>", family: Distinguished },
    /// Signed span of time with nanosecond resolution.
    Duration => { name: "duration", rust: "TimeDelta", family: Distinguished },
}

impl Kind {
    pub fn is_integer(self) -> bool {
        matches!(self.family(), Family::Unsigned | Family::Signed)
    }

    pub fn is_float(self) -> bool {
        self.family() == Family::Float
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Kinds the promotion lattice accepts: every numeric kind plus duration.
    pub fn is_arithmetic(self) -> bool {
        self.is_numeric() || self == Kind::Duration
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Serialize for Kind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

pub const UNSIGNED: &[Kind] = &[Kind::Uint, Kind::U8, Kind::U16, Kind::U32, Kind::U64];

pub const SIGNED: &[Kind] = &[Kind::Int, Kind::I8, Kind::I16, Kind::I32, Kind::I64];

pub const FLOAT: &[Kind] = &[Kind::F32, Kind::F64];

/// Unsigned, then signed, then float.
pub const NUMERIC: &[Kind] = &[
    Kind::Uint,
    Kind::U8,
    Kind::U16,
    Kind::U32,
    Kind::U64,
    Kind::Int,
    Kind::I8,
    Kind::I16,
    Kind::I32,
    Kind::I64,
    Kind::F32,
    Kind::F64,
];

/// Numeric kinds followed by duration; multiplication treats a duration as an
/// ordinary multiplicand.
pub const NUMERIC_WITH_DURATION: &[Kind] = &[
    Kind::Uint,
    Kind::U8,
    Kind::U16,
    Kind::U32,
    Kind::U64,
    Kind::Int,
    Kind::I8,
    Kind::I16,
    Kind::I32,
    Kind::I64,
    Kind::F32,
    Kind::F64,
    Kind::Duration,
];

pub const DISTINGUISHED: &[Kind] = &[Kind::Text, Kind::Bool, Kind::Instant, Kind::Duration];

/// The whole primitive registry in order.
pub const ALL: &[Kind] = &[
    Kind::Uint,
    Kind::U8,
    Kind::U16,
    Kind::U32,
    Kind::U64,
    Kind::Int,
    Kind::I8,
    Kind::I16,
    Kind::I32,
    Kind::I64,
    Kind::F32,
    Kind::F64,
    Kind::Text,
    Kind::Bool,
    Kind::Instant,
    Kind::Duration,
];

/// Composite array shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    /// Heterogeneous array: every element is a full dynamic value.
    Any,
    /// Homogeneous array of one registry kind.
    Of(Kind),
}

impl ArrayKind {
    /// `Any` first, then one homogeneous array per registry kind.
    pub fn all() -> impl Iterator<Item = ArrayKind> {
        std::iter::once(ArrayKind::Any).chain(ALL.iter().map(|&kind| ArrayKind::Of(kind)))
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKind::Any => f.write_str("[]any"),
            ArrayKind::Of(kind) => write!(f, "[]{kind}"),
        }
    }
}
