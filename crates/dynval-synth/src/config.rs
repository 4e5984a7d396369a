//! Configuration for module rendering.

use dynval_core::Op;

/// Configuration for [`render_module`](crate::render_module).
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to emit the `@generated` header comment
    pub(crate) header: bool,
    /// Operators to render, in output order
    pub(crate) ops: Vec<Op>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: true,
            ops: Op::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Create a new Config rendering every operator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the `@generated` header.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    /// Restrict rendering to `ops`. Duplicates are dropped, first occurrence wins.
    pub fn ops(mut self, ops: impl IntoIterator<Item = Op>) -> Self {
        self.ops.clear();
        for op in ops {
            if !self.ops.contains(&op) {
                self.ops.push(op);
            }
        }
        self
    }

    pub fn get_ops(&self) -> &[Op] {
        &self.ops
    }
}
