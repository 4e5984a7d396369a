//! Structured form of a dispatch table, before rendering.

use std::fmt;

use dynval_core::{ArrayKind, Kind, Op};

/// Shape matched on one side of a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// A bare value of this kind.
    Scalar(Kind),
    /// A reference whose target is a value of this kind.
    RefTo(Kind),
    Array(ArrayKind),
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Scalar(kind) => write!(f, "{kind}"),
            Pattern::RefTo(kind) => write!(f, "&{kind}"),
            Pattern::Array(array) => write!(f, "{array}"),
        }
    }
}

/// Computation performed once both sides matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Body {
    /// Apply the operator to the payloads as they are.
    Native,
    /// Convert both payloads to this kind, then apply the operator.
    Promote(Kind),
    /// Text concatenation.
    Concat,
    /// Instant moved by a duration.
    Shift,
    /// Duration between two instants.
    Elapsed,
    /// Duration arithmetic that reports overflow.
    Checked,
    /// Heterogeneous array against a homogeneous one, element by element.
    Elementwise,
    /// Homogeneous array against a heterogeneous one, by swapping operands.
    Mirror,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    pub rhs: Pattern,
    pub body: Body,
}

/// All cases sharing one outer (left operand) pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arm {
    pub lhs: Pattern,
    pub cases: Vec<Case>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub op: Op,
    pub arms: Vec<Arm>,
}

impl Table {
    pub fn new(op: Op) -> Self {
        Self {
            op,
            arms: Vec::new(),
        }
    }

    /// Append a case, opening a new arm if `lhs` has none yet.
    ///
    /// Arms keep first-insertion order; cases keep push order within an arm.
    pub fn push(&mut self, lhs: Pattern, rhs: Pattern, body: Body) {
        let case = Case { rhs, body };
        match self.arms.iter_mut().find(|arm| arm.lhs == lhs) {
            Some(arm) => arm.cases.push(case),
            None => self.arms.push(Arm {
                lhs,
                cases: vec![case],
            }),
        }
    }

    pub fn get(&self, lhs: Pattern, rhs: Pattern) -> Option<Body> {
        self.arms
            .iter()
            .find(|arm| arm.lhs == lhs)?
            .cases
            .iter()
            .find(|case| case.rhs == rhs)
            .map(|case| case.body)
    }

    pub fn case_count(&self) -> usize {
        self.arms.iter().map(|arm| arm.cases.len()).sum()
    }
}
