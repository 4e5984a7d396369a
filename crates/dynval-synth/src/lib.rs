//! Dispatch table synthesizer.
//!
//! Turns the kind registry and promotion lattice into Rust source for the
//! pairwise operator tables embedded by `dynval-vm`:
//! - `synthesize` - enumerate every (outer, inner) case for one operator
//! - `verify` - re-check a table against the lattice before it is rendered
//! - `render` - print a verified table as a `match lhs { .. }` block
//! - `template` - splice rendered tables into a complete module
//!
//! Synthesis is deterministic: the same registry always yields byte-identical
//! text.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod error;
mod invariants;
mod render;
mod synthesize;
mod table;
mod template;
mod verify;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod synthesize_tests;
#[cfg(test)]
mod template_tests;

use dynval_core::Op;

pub use config::Config;
pub use error::SynthError;
pub use synthesize::synthesize;
pub use table::{Arm, Body, Case, Pattern, Table};
pub use template::render_module;
pub use verify::verify;

/// Result type for synthesis.
pub type Result<T> = std::result::Result<T, SynthError>;

/// Generated case table for one operator.
///
/// The text is a `match lhs { .. }` block indented one level, ready to be
/// spliced verbatim into a function body taking `lhs: &Value, rhs: &Value`.
pub fn cases(op: Op) -> Result<String> {
    let table = synthesize(op);
    verify(&table)?;
    Ok(render::render(&table, 1))
}
