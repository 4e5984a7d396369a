//! The promotion lattice.

use crate::kind::Kind;
use crate::op::Op;

/// Kind both operands are converted to before `op` combines them.
///
/// For arithmetic this is the result kind. For equality and ordering it is the
/// comparison domain used when the two operand kinds differ. `None` means the
/// pairing is unsupported and no table case may exist for it.
///
/// Rules, highest precedence first:
/// 1. division always yields `f64`;
/// 2. modulo yields `i64` for two integer kinds and is unsupported otherwise;
/// 3. a duration operand yields a duration;
/// 4. a float operand yields `f64`;
/// 5. anything else yields `i64`.
pub fn promote(op: Op, lhs: Kind, rhs: Kind) -> Option<Kind> {
    if !lhs.is_arithmetic() || !rhs.is_arithmetic() {
        return None;
    }

    match op {
        Op::Divide => Some(Kind::F64),
        Op::Modulo => (lhs.is_integer() && rhs.is_integer()).then_some(Kind::I64),
        _ if lhs == Kind::Duration || rhs == Kind::Duration => Some(Kind::Duration),
        _ if lhs.is_float() || rhs.is_float() => Some(Kind::F64),
        _ => Some(Kind::I64),
    }
}
