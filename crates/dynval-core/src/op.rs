//! Binary operators over dynamic values.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::kind::{Kind, NUMERIC, NUMERIC_WITH_DURATION};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Op {
    Equal,
    Less,
    More,
    LessOrEqual,
    MoreOrEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Op {
    /// Every operator, in table-emission order.
    pub const ALL: [Op; 10] = [
        Op::Equal,
        Op::Less,
        Op::More,
        Op::LessOrEqual,
        Op::MoreOrEqual,
        Op::Add,
        Op::Subtract,
        Op::Multiply,
        Op::Divide,
        Op::Modulo,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Equal => "==",
            Op::Less => "<",
            Op::More => ">",
            Op::LessOrEqual => "<=",
            Op::MoreOrEqual => ">=",
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "*",
            Op::Divide => "/",
            Op::Modulo => "%",
        }
    }

    /// Snake-case name; also the prefix of the generated table function.
    pub fn name(self) -> &'static str {
        match self {
            Op::Equal => "equal",
            Op::Less => "less",
            Op::More => "more",
            Op::LessOrEqual => "less_or_equal",
            Op::MoreOrEqual => "more_or_equal",
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
            Op::Modulo => "modulo",
        }
    }

    /// Accepts either the name or the symbol.
    pub fn from_name(s: &str) -> Option<Op> {
        Op::ALL
            .into_iter()
            .find(|op| op.name() == s || op.symbol() == s)
    }

    /// Equality and ordering: boolean result, no numeric promotion of the result.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Op::Equal | Op::Less | Op::More | Op::LessOrEqual | Op::MoreOrEqual
        )
    }

    /// Kinds enumerated by the generic pairwise routine for this operator.
    pub fn pairwise_kinds(self) -> &'static [Kind] {
        match self {
            Op::Multiply => NUMERIC_WITH_DURATION,
            _ => NUMERIC,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Op {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}
