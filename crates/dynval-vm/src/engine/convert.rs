//! Helpers referenced by the generated case tables.

use chrono::TimeDelta;

use super::{OpError, Value};

/// Signed nanoseconds of `d`, saturating at the `i64` range.
pub(crate) fn nanos(d: &TimeDelta) -> i64 {
    d.num_nanoseconds()
        .unwrap_or(if *d < TimeDelta::zero() { i64::MIN } else { i64::MAX })
}

/// Integer remainder with the sign of the dividend.
pub(crate) fn remainder(a: i64, b: i64) -> Result<Value, OpError> {
    if b == 0 {
        return Err(OpError::DivisionByZero);
    }
    Ok(Value::I64(a.wrapping_rem(b)))
}
