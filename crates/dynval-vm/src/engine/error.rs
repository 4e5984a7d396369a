//! Errors that can occur when applying an operator.

use dynval_core::Op;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
    /// No case and no fallback accepts this operand pairing.
    #[error("invalid operation: {lhs} {op} {rhs}")]
    InvalidOperation { op: Op, lhs: String, rhs: String },

    /// Integer modulo with a zero divisor.
    #[error("integer division by zero")]
    DivisionByZero,

    /// Checked instant or duration arithmetic left the representable range.
    #[error("`{0}` overflowed the time range")]
    Overflow(Op),
}
