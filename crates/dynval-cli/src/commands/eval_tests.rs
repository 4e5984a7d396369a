use dynval_core::Op;
use dynval_vm::{Evaluator, NoopTracer, PrintTracer, Value, Verbosity};

use super::eval::{EvalArgs, EvalError, evaluate, format_result};

fn args(lhs: &str, op: Op, rhs: &str) -> EvalArgs {
    EvalArgs {
        lhs: lhs.to_string(),
        op,
        rhs: rhs.to_string(),
        trace: None,
    }
}

fn eval(lhs: &str, op: Op, rhs: &str) -> Result<String, String> {
    let mut evaluator = Evaluator::new(NoopTracer);
    evaluate(&mut evaluator, &args(lhs, op, rhs))
        .map(|v| format_result(&v))
        .map_err(|e| e.to_string())
}

#[test]
fn promoted_arithmetic() {
    assert_eq!(eval("i32:2", Op::Add, "f32:1.5"), Ok("f64 3.5".to_string()));
    assert_eq!(eval("u16:10", Op::Modulo, "u16:3"), Ok("i64 1".to_string()));
    assert_eq!(eval("7", Op::Divide, "2"), Ok("f64 3.5".to_string()));
}

#[test]
fn comparisons_print_booleans() {
    assert_eq!(eval("u8:1", Op::Less, "i8:-1"), Ok("bool false".to_string()));
    assert_eq!(
        eval("&f32:2", Op::Equal, "f64:2"),
        Ok("bool true".to_string())
    );
    assert_eq!(eval("nil", Op::Equal, "&u8:nil"), Ok("bool false".to_string()));
    assert_eq!(
        eval("&i8:nil", Op::Equal, "&u8:nil"),
        Ok("bool true".to_string())
    );
}

#[test]
fn temporal() {
    assert_eq!(
        eval("instant:2024-01-01T00:00:00Z", Op::Add, "duration:1h"),
        Ok(r#"instant "2024-01-01T01:00:00Z""#.to_string())
    );
    assert_eq!(
        eval("duration:1h", Op::Add, "duration:30m"),
        Ok(r#"duration "PT5400S""#.to_string())
    );
}

#[test]
fn text_concatenation() {
    assert_eq!(
        eval("string:ab", Op::Add, "string:cd"),
        Ok(r#"string "abcd""#.to_string())
    );
}

#[test]
fn errors() {
    insta::assert_snapshot!(
        eval("bool:true", Op::Less, "bool:false").unwrap_err(),
        @"invalid operation: bool < bool"
    );
    insta::assert_snapshot!(
        eval("i32:1", Op::Modulo, "i32:0").unwrap_err(),
        @"integer division by zero"
    );
    insta::assert_snapshot!(
        eval("f16:1", Op::Add, "1").unwrap_err(),
        @"unknown kind `f16`"
    );
}

#[test]
fn literal_errors_skip_evaluation() {
    let mut evaluator = Evaluator::new(PrintTracer::new(Verbosity::Default));
    let result = evaluate(&mut evaluator, &args("1", Op::Add, "what"));
    assert!(matches!(result, Err(EvalError::Literal(_))));
    assert!(evaluator.tracer().lines().is_empty());
}

#[test]
fn trace_lines_are_collected() {
    let mut evaluator = Evaluator::new(PrintTracer::new(Verbosity::Verbose));
    let value = evaluate(&mut evaluator, &args("u8:1", Op::Multiply, "u8:3")).unwrap();
    assert_eq!(value, Value::I64(3));
    assert_eq!(
        evaluator.tracer().lines(),
        ["multiply: u8 * u8 -> table", "  = i64"]
    );
}
