//! Structural equality for pairs the equality table does not cover.
//!
//! Absent values equal each other only when they are the same shape: a nil
//! reference matches any nil reference, bare nil matches bare nil. Present
//! operands are dereferenced one level; a dereferenced pair goes back through
//! the equality table, so references stay transparent across kinds. Integers
//! of one family compare by numeric value, which also covers integer-like
//! extensions.

use super::dispatch::equal_cases;
use super::equal;
use super::value::Value;

pub(crate) fn structural_equal(lhs: &Value, rhs: &Value) -> bool {
    let is_ref = |value: &Value| matches!(value, Value::Ref(_));

    match (lhs.is_absent(), rhs.is_absent()) {
        (true, true) => return is_ref(lhs) == is_ref(rhs),
        (true, false) | (false, true) => return false,
        (false, false) => {}
    }

    let dereferenced = is_ref(lhs) || is_ref(rhs);
    let (lhs, rhs) = (resolve(lhs), resolve(rhs));

    // Targets are scalars, so this cannot recurse into another reference.
    if dereferenced
        && let Some(result) = equal_cases(lhs, rhs)
    {
        return result;
    }
    if let Some(same) = integer_equal(lhs, rhs) {
        return same;
    }
    deep_equal(lhs, rhs)
}

/// One level of dereferencing for a present value.
fn resolve(value: &Value) -> &Value {
    match value {
        Value::Ref(r) => r.target().unwrap_or(value),
        other => other,
    }
}

/// `None` unless both sides have an integer view of the same family.
fn integer_equal(lhs: &Value, rhs: &Value) -> Option<bool> {
    let (a, b) = (lhs.as_integer()?, rhs.as_integer()?);
    (a.family() == b.family()).then_some(a == b)
}

fn deep_equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Record(a), Value::Record(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .zip(b)
                    .all(|((ka, va), (kb, vb))| ka == kb && equal(va, vb))
        }
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equal(x, y))
        }
        // Same-kind arrays never get here; different element kinds never match.
        (Value::Array(a), Value::Array(b)) => a == b,
        (Value::Extension(a), Value::Extension(b)) => a.equals(b.as_ref()),
        _ => false,
    }
}
