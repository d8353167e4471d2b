// ============================================================================
// Fixed-Point Errors
// Error types for checked fixed-point operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported by the checked fixed-point operations.
///
/// The wrapping operations never return these; they reproduce native
/// integer wraparound instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FixedPointError {
    /// Result does not fit in the word
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Numerator exceeds the safe ceiling of the chosen scaling strategy
    ScalingOverflow,
}

impl fmt::Display for FixedPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedPointError::Overflow => {
                write!(f, "arithmetic overflow: result does not fit in the word")
            },
            FixedPointError::DivisionByZero => write!(f, "division by zero"),
            FixedPointError::ScalingOverflow => write!(
                f,
                "scaling overflow: numerator exceeds the strategy's safe ceiling"
            ),
        }
    }
}

impl std::error::Error for FixedPointError {}

/// Result type alias for fixed-point operations
pub type FixedPointResult<T> = Result<T, FixedPointError>;
