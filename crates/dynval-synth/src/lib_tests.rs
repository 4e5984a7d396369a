use dynval_core::Op;

use crate::{Config, cases, render_module};

#[test]
fn cases_are_indented_match_blocks() {
    for op in Op::ALL {
        let text = cases(op).unwrap();
        assert!(text.starts_with("    match lhs {\n"), "{op}");
        assert!(text.ends_with("        _ => None,\n    }\n"), "{op}");
    }
}

#[test]
fn braces_balance() {
    for op in Op::ALL {
        let text = cases(op).unwrap();
        assert_eq!(text.matches('{').count(), text.matches('}').count(), "{op}");
        assert_eq!(text.matches('(').count(), text.matches(')').count(), "{op}");
    }
}

#[test]
fn modulo_never_mentions_floats() {
    let text = cases(Op::Modulo).unwrap();

    assert!(!text.contains("Value::F32("));
    assert!(!text.contains("Value::F64("));
    assert!(!text.contains("as f64"));
}

#[test]
fn output_is_deterministic() {
    for op in Op::ALL {
        assert_eq!(cases(op).unwrap(), cases(op).unwrap());
    }
    assert_eq!(
        render_module(&Config::default()).unwrap(),
        render_module(&Config::default()).unwrap()
    );
}

#[test]
fn equality_never_promotes_through_float_for_integers() {
    let text = cases(Op::Equal).unwrap();

    assert!(text.contains("Value::I32(y) => Some((*x as i64) == (*y as i64)),"));
    assert!(text.contains("Value::F32(y) => Some((*x as f64) == (*y as f64)),"));
}
