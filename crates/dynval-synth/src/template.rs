//! Module template around the generated case tables.

use dynval_core::Op;

use crate::{Config, Result, cases};

const HEADER: &str = "// @generated by dynval-synth. Do not edit.\n\n";

/// Imports every generated body may reference.
const PRELUDE: &str = "\
use chrono::TimeDelta;
use dynval_core::Op;

use crate::engine::convert::{nanos, remainder};
use crate::engine::{Array, OpError, Value, equal};
";

/// Render a complete module with one `<op>_cases` function per configured
/// operator. Each case table is spliced verbatim.
pub fn render_module(config: &Config) -> Result<String> {
    let mut output = String::new();
    if config.header {
        output.push_str(HEADER);
    }
    output.push_str(PRELUDE);

    for &op in &config.ops {
        let body = cases(op)?;
        output.push('\n');
        output.push_str(&format!(
            "pub(crate) fn {}_cases(lhs: &Value, rhs: &Value) -> Option<{}> {{\n",
            op.name(),
            output_type(op)
        ));
        output.push_str(&body);
        output.push_str("}\n");
    }

    Ok(output)
}

/// Return type of the generated function, wrapped in `Option` (no case matched).
pub(crate) fn output_type(op: Op) -> &'static str {
    if op.is_comparison() {
        "bool"
    } else {
        "Result<Value, OpError>"
    }
}
