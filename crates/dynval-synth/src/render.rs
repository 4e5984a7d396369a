//! Rendering of verified tables as Rust source.
//!
//! Generated code runs inside a function with parameters `lhs: &Value` and
//! `rhs: &Value`. Outer payloads bind to `x`, inner payloads to `y`; both are
//! references. Names it relies on (`Value`, `Array`, `OpError`, `Op`,
//! `TimeDelta`, `nanos`, `remainder`, `equal`) are imported by the module
//! template.

use dynval_core::{ArrayKind, Kind, Op};

use crate::invariants::unrenderable;
use crate::table::{Body, Case, Pattern, Table};

const INDENT: &str = "    ";

/// Render `table` as a `match lhs { .. }` block starting at `indent` levels.
pub(crate) fn render(table: &Table, indent: usize) -> String {
    let mut r = Renderer {
        op: table.op,
        output: String::new(),
    };

    r.line(indent, "match lhs {");
    for arm in &table.arms {
        let Some(outer) = pattern(arm.lhs, "x") else {
            let first = arm.cases.first().map(|c| (c.rhs, c.body));
            let (rhs, body) = first.unwrap_or((arm.lhs, Body::Native));
            unrenderable(table.op, arm.lhs, rhs, body);
        };
        r.line(indent + 1, &format!("{outer} => match rhs {{"));
        for case in &arm.cases {
            r.case(indent + 2, arm.lhs, case);
        }
        r.line(indent + 2, "_ => None,");
        r.line(indent + 1, "},");
    }
    r.line(indent + 1, "_ => None,");
    r.line(indent, "}");

    r.output
}

struct Renderer {
    op: Op,
    output: String,
}

impl Renderer {
    fn line(&mut self, level: usize, text: &str) {
        for _ in 0..level {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn case(&mut self, level: usize, lhs: Pattern, case: &Case) {
        let body = self.body(lhs, case.rhs, case.body);

        if let Pattern::RefTo(kind) = case.rhs {
            self.line(level, "Value::Ref(r) => match r.target() {");
            self.line(
                level + 1,
                &format!("Some(Value::{}(y)) => {body},", kind.variant()),
            );
            self.line(level + 1, "_ => None,");
            self.line(level, "},");
            return;
        }

        let bind = if case.body == Body::Mirror { "_" } else { "y" };
        let Some(inner) = pattern(case.rhs, bind) else {
            unrenderable(self.op, lhs, case.rhs, case.body);
        };
        self.line(level, &format!("{inner} => {body},"));
    }

    fn body(&self, lhs: Pattern, rhs: Pattern, body: Body) -> String {
        let op = self.op;
        let rendered = match (body, lhs, rhs) {
            (Body::Native, _, _) if op.is_comparison() => Some(format!("Some(x {op} y)")),

            (Body::Promote(domain), Pattern::Scalar(a), Pattern::Scalar(b)) => {
                let x = convert(a, domain, "x");
                let y = convert(b, domain, "y");
                if op.is_comparison() {
                    Some(format!("Some({x} {op} {y})"))
                } else {
                    arithmetic(op, domain, &x, &y)
                }
            }

            (Body::Concat, _, _) => Some("Some(Ok(Value::Text(format!(\"{x}{y}\"))))".to_string()),

            (Body::Shift, Pattern::Scalar(Kind::Duration), _) => Some(format!(
                "Some(y.checked_add_signed(*x).map(Value::Instant).ok_or(OpError::Overflow(Op::{op:?})))"
            )),
            (Body::Shift, _, _) => {
                let method = match op {
                    Op::Subtract => "checked_sub_signed",
                    _ => "checked_add_signed",
                };
                Some(format!(
                    "Some(x.{method}(*y).map(Value::Instant).ok_or(OpError::Overflow(Op::{op:?})))"
                ))
            }

            (Body::Elapsed, _, _) => {
                Some("Some(Ok(Value::Duration(x.signed_duration_since(*y))))".to_string())
            }

            (Body::Checked, _, _) => {
                let method = match op {
                    Op::Subtract => "checked_sub",
                    _ => "checked_add",
                };
                Some(format!(
                    "Some(x.{method}(y).map(Value::Duration).ok_or(OpError::Overflow(Op::{op:?})))"
                ))
            }

            (Body::Elementwise, _, Pattern::Array(ArrayKind::Of(kind))) => Some(format!(
                "Some(x.len() == y.len() && x.iter().zip(y.iter()).all(|(a, b)| equal(a, &Value::{}(b.clone()))))",
                kind.variant()
            )),

            (Body::Mirror, _, _) => Some("Some(equal(rhs, lhs))".to_string()),

            _ => None,
        };

        rendered.unwrap_or_else(|| unrenderable(op, lhs, rhs, body))
    }
}

/// Match pattern for one side; `None` for shapes that only occur nested.
fn pattern(pattern: Pattern, bind: &str) -> Option<String> {
    match pattern {
        Pattern::Scalar(kind) => Some(format!("Value::{}({bind})", kind.variant())),
        Pattern::Array(ArrayKind::Any) => Some(format!("Value::List({bind})")),
        Pattern::Array(ArrayKind::Of(kind)) => {
            Some(format!("Value::Array(Array::{}({bind}))", kind.variant()))
        }
        Pattern::RefTo(_) => None,
    }
}

/// Expression converting the payload bound to `bind` into `domain`.
///
/// Durations travel as signed nanoseconds.
fn convert(kind: Kind, domain: Kind, bind: &str) -> String {
    match (kind, domain) {
        (Kind::Duration, Kind::F64) => format!("(nanos({bind}) as f64)"),
        (Kind::Duration, _) => format!("nanos({bind})"),
        (_, Kind::Duration) => format!("(*{bind} as i64)"),
        _ => format!("(*{bind} as {})", domain.rust_type()),
    }
}

fn arithmetic(op: Op, domain: Kind, x: &str, y: &str) -> Option<String> {
    let wrapping = match op {
        Op::Add => "wrapping_add",
        Op::Subtract => "wrapping_sub",
        Op::Multiply => "wrapping_mul",
        _ => "",
    };

    match (domain, op) {
        (Kind::I64, Op::Modulo) => Some(format!("Some(remainder({x}, {y}))")),
        (Kind::I64, Op::Add | Op::Subtract | Op::Multiply) => {
            Some(format!("Some(Ok(Value::I64({x}.{wrapping}({y}))))"))
        }
        (Kind::F64, Op::Add | Op::Subtract | Op::Multiply | Op::Divide) => {
            Some(format!("Some(Ok(Value::F64({x} {op} {y})))"))
        }
        (Kind::Duration, Op::Add | Op::Subtract | Op::Multiply) => Some(format!(
            "Some(Ok(Value::Duration(TimeDelta::nanoseconds({x}.{wrapping}({y})))))"
        )),
        _ => None,
    }
}
