//! Typed literals for `dynval eval`.
//!
//! - `<kind>:<text>` for any registry kind (`u8:5`, `string:a b`,
//!   `duration:1h30m`, `instant:2024-01-01T00:00:00Z`)
//! - `&<kind>:<text>` for a reference, `&<kind>:nil` for a nil one
//! - bare `nil`, `true`, `false`, integers (`i64`) and decimals (`f64`)

use chrono::{DateTime, TimeDelta, Utc};
use dynval_core::Kind;
use dynval_vm::{Ref, Value};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("unknown kind `{0}`")]
    UnknownKind(String),

    #[error("invalid {kind} literal `{text}`")]
    Invalid { kind: Kind, text: String },

    #[error("unrecognized literal `{0}` (expected <kind>:<value>, a number, true, false, or nil)")]
    Unrecognized(String),
}

pub fn parse(text: &str) -> Result<Value, LiteralError> {
    if let Some(rest) = text.strip_prefix('&') {
        let (kind, payload) = typed(rest).ok_or_else(|| unrecognized(text))?;
        let kind = kind?;
        if payload == "nil" {
            return Ok(Value::Ref(Ref::nil(kind)));
        }
        let value = scalar(kind, payload)?;
        return Ref::to(value)
            .map(Value::Ref)
            .ok_or_else(|| unrecognized(text));
    }

    if let Some((kind, payload)) = typed(text) {
        return scalar(kind?, payload);
    }

    match text {
        "nil" => return Ok(Value::Nil),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if let Ok(v) = text.parse::<i64>() {
        return Ok(Value::I64(v));
    }
    if let Ok(v) = text.parse::<f64>() {
        return Ok(Value::F64(v));
    }
    Err(unrecognized(text))
}

/// Split `<kind>:<payload>`; `None` when there is no colon.
fn typed(text: &str) -> Option<(Result<Kind, LiteralError>, &str)> {
    let (name, payload) = text.split_once(':')?;
    let kind = Kind::from_name(name).ok_or_else(|| LiteralError::UnknownKind(name.to_string()));
    Some((kind, payload))
}

fn unrecognized(text: &str) -> LiteralError {
    LiteralError::Unrecognized(text.to_string())
}

fn scalar(kind: Kind, text: &str) -> Result<Value, LiteralError> {
    let invalid = || LiteralError::Invalid {
        kind,
        text: text.to_string(),
    };

    let value = match kind {
        Kind::Uint => Value::Uint(text.parse().map_err(|_| invalid())?),
        Kind::U8 => Value::U8(text.parse().map_err(|_| invalid())?),
        Kind::U16 => Value::U16(text.parse().map_err(|_| invalid())?),
        Kind::U32 => Value::U32(text.parse().map_err(|_| invalid())?),
        Kind::U64 => Value::U64(text.parse().map_err(|_| invalid())?),
        Kind::Int => Value::Int(text.parse().map_err(|_| invalid())?),
        Kind::I8 => Value::I8(text.parse().map_err(|_| invalid())?),
        Kind::I16 => Value::I16(text.parse().map_err(|_| invalid())?),
        Kind::I32 => Value::I32(text.parse().map_err(|_| invalid())?),
        Kind::I64 => Value::I64(text.parse().map_err(|_| invalid())?),
        Kind::F32 => Value::F32(text.parse().map_err(|_| invalid())?),
        Kind::F64 => Value::F64(text.parse().map_err(|_| invalid())?),
        Kind::Text => Value::Text(text.to_string()),
        Kind::Bool => Value::Bool(text.parse().map_err(|_| invalid())?),
        Kind::Instant => {
            let t = DateTime::parse_from_rfc3339(text).map_err(|_| invalid())?;
            Value::Instant(t.with_timezone(&Utc))
        }
        Kind::Duration => Value::Duration(duration(text).ok_or_else(invalid)?),
    };
    Ok(value)
}

/// `[-]<int><unit>...` with units `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`; bare `0` is zero.
pub(crate) fn duration(text: &str) -> Option<TimeDelta> {
    let (negative, mut rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if rest == "0" {
        return Some(TimeDelta::zero());
    }
    if rest.is_empty() {
        return None;
    }

    let mut total = TimeDelta::zero();
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits == 0 {
            return None;
        }
        let amount: i64 = rest[..digits].parse().ok()?;
        rest = &rest[digits..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let part = match &rest[..unit_len] {
            "ns" => TimeDelta::nanoseconds(amount),
            "us" | "µs" => TimeDelta::microseconds(amount),
            "ms" => TimeDelta::try_milliseconds(amount)?,
            "s" => TimeDelta::try_seconds(amount)?,
            "m" => TimeDelta::try_minutes(amount)?,
            "h" => TimeDelta::try_hours(amount)?,
            _ => return None,
        };
        rest = &rest[unit_len..];
        total = total.checked_add(&part)?;
    }

    Some(if negative { -total } else { total })
}
