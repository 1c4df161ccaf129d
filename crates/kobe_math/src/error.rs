//! Math error types

use thiserror::Error;

use crate::EPSILON;

/// Error returned by operations that would divide by (nearly) zero
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A magnitude, determinant or trace-derived divisor fell below [`EPSILON`]
    /// or was not finite
    #[error("degenerate operation in {operation}: divisor {value} is nearly zero or not finite")]
    DegenerateOperation {
        /// Name of the failing operation
        operation: &'static str,
        /// The offending divisor
        value: f32,
    },
}

/// Result of a math operation that can degenerate
pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    /// Check that `value` is usable as a divisor in `operation`
    ///
    /// NaN and infinity count as degenerate.
    #[inline]
    pub(crate) fn check(operation: &'static str, value: f32) -> MathResult<f32> {
        if value.is_finite() && value.abs() >= EPSILON {
            Ok(value)
        } else {
            Err(MathError::DegenerateOperation { operation, value })
        }
    }
}
