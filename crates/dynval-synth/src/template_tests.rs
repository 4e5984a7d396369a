use dynval_core::Op;
use indoc::indoc;

use crate::{Config, render_module};

#[test]
fn header_and_prelude() {
    let module = render_module(&Config::new()).unwrap();

    assert!(module.starts_with(indoc! {"
        // @generated by dynval-synth. Do not edit.

        use chrono::TimeDelta;
        use dynval_core::Op;

        use crate::engine::convert::{nanos, remainder};
        use crate::engine::{Array, OpError, Value, equal};
    "}));
}

#[test]
fn header_can_be_disabled() {
    let config = Config::new().header(false).ops([Op::Less]);
    let module = render_module(&config).unwrap();

    assert!(module.starts_with("use chrono::TimeDelta;\n"));
    assert!(!module.contains("@generated"));
}

#[test]
fn one_function_per_operator() {
    let module = render_module(&Config::new()).unwrap();

    assert_eq!(module.matches("pub(crate) fn ").count(), Op::ALL.len());
    for op in Op::ALL {
        assert!(module.contains(&format!("pub(crate) fn {}_cases(", op.name())));
    }
}

#[test]
fn function_signatures() {
    let config = Config::new().header(false).ops([Op::Less, Op::Modulo]);
    let module = render_module(&config).unwrap();

    assert!(module.contains(
        "\npub(crate) fn less_cases(lhs: &Value, rhs: &Value) -> Option<bool> {\n    match lhs {\n"
    ));
    assert!(module.contains(
        "\npub(crate) fn modulo_cases(lhs: &Value, rhs: &Value) -> Option<Result<Value, OpError>> {\n    match lhs {\n"
    ));
    assert!(module.ends_with("    }\n}\n"));
    assert!(module.find("less_cases") < module.find("modulo_cases"));
}

#[test]
fn config_ops_drop_duplicates() {
    let config = Config::new().ops([Op::Add, Op::Equal, Op::Add]);

    assert_eq!(config.get_ops(), &[Op::Add, Op::Equal]);
}

#[test]
fn default_config_renders_everything() {
    assert_eq!(Config::default().get_ops(), &Op::ALL);
}
