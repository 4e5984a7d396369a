//! Operator case tables.
//!
//! Rendered by `dynval-synth` from `build.rs`; one `<op>_cases` function per
//! operator, returning `None` when no case matches the operand pair.

include!(concat!(env!("OUT_DIR"), "/dispatch.rs"));
