use dynval_core::Op;

use super::generate::{GenerateArgs, render};

fn args(ops: &[Op], bare: bool, header: bool) -> GenerateArgs {
    GenerateArgs {
        ops: ops.to_vec(),
        output: None,
        bare,
        header,
    }
}

#[test]
fn full_module_with_header() {
    let output = render(&args(&[Op::Less], false, true)).unwrap();
    assert!(output.starts_with("// @generated by dynval-synth. Do not edit.\n\nuse chrono::TimeDelta;\n"));
    assert!(output.contains("pub(crate) fn less_cases(lhs: &Value, rhs: &Value) -> Option<bool> {\n"));
    assert!(!output.contains("fn more_cases"));
}

#[test]
fn full_module_without_header() {
    let output = render(&args(&[Op::Add], false, false)).unwrap();
    assert!(output.starts_with("use chrono::TimeDelta;\n"));
    assert!(output.contains("fn add_cases"));
}

#[test]
fn bare_tables_are_labeled() {
    let output = render(&args(&[Op::Less, Op::Modulo], true, true)).unwrap();
    assert!(output.starts_with("// less\n    match lhs {\n"));
    assert!(output.contains("    }\n\n// modulo\n    match lhs {\n"));
    assert!(!output.contains("use chrono"));
    assert!(!output.contains("@generated"));
}

#[test]
fn bare_output_matches_case_tables() {
    let output = render(&args(&[Op::Divide], true, false)).unwrap();
    let table = dynval_synth::cases(Op::Divide).unwrap();
    assert_eq!(output, format!("// divide\n{table}"));
}
