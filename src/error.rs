// src/error.rs
// Error type shared by the vector types.

/// Errors raised by the dynamically dispatched vector operations.
///
/// Statically typed operators never fail; only the `try_*` methods, which
/// take an [`Operand`](crate::numerics::types::operand::Operand) whose type
/// is known at run time, and the slice conversions can return this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("invalid operand: expected {expected}, found {found}")]
    InvalidOperand { expected: &'static str, found: String },
}

impl VectorError {
    /// Build an `InvalidOperand` and record the rejection.
    pub(crate) fn rejected(operation: &'static str, expected: &'static str, found: String) -> Self {
        tracing::debug!(
            operation = operation,
            expected = expected,
            found = %found,
            "rejected vector operand"
        );
        VectorError::InvalidOperand { expected, found }
    }
}

pub type Result<T> = core::result::Result<T, VectorError>;
