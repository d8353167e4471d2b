// ============================================================================
// qfixed Library
// Binary fixed-point arithmetic and decimal rendering without floating point
// ============================================================================

//! # qfixed
//!
//! Fixed-point arithmetic for targets where floating point is absent, slow,
//! or nondeterministic.
//!
//! ## Features
//!
//! - **`FixedPoint<F>`** — fractional values in a single `u32` word with a
//!   compile-time fraction width (Q16.16 by default)
//! - **Decimal rendering** — integer-only expansion of the fractional part to
//!   any digit count, with zero-padding and an explicit resolution boundary
//! - **Round-half-up biasing** — the addend table that turns truncation into
//!   rounding at a chosen decimal digit
//! - **Scaled multiply-divide** — `x * numerator / denominator` on `u16`/
//!   `u32`/`u64` words without widening, via sub-word partitioning
//! - **Wrapping and checked modes** — native wraparound by default, `Result`
//!   reporting on the `checked_*` paths
//!
//! ## Example
//!
//! ```rust
//! use qfixed::prelude::*;
//!
//! // (500 + 10) * 3 / 7 = 218.571428..., without ever leaving u32
//! let price = Q16_16::from_integer(500)
//!     .wrapping_add_integer(10)
//!     .wrapping_mul_integer(3)
//!     .wrapping_div_integer(7);
//!
//! assert_eq!(price.format(4), "218.5714");
//! assert_eq!(price.round_to_digits(2).format(2), "218.57");
//!
//! // Scale a full-range u16 by 16/127 without a u32 intermediate
//! let scaled = 65401u16.scaled_mul_div(16, 127, ScaleStrategy::SplitCenter)?;
//! assert_eq!(scaled, 8239);
//! # Ok::<(), qfixed::FixedPointError>(())
//! ```

pub mod errors;
pub mod fixed_point;
pub mod rounding;
pub mod scaled;

// Re-exports for convenience
pub use errors::{FixedPointError, FixedPointResult};
pub use fixed_point::{FixedPoint, Q16_16, Q24_8};
pub use rounding::ResolutionDiagnostic;
pub use scaled::{ScaleStrategy, ScaledMulDiv};

pub mod prelude {
    pub use crate::errors::{FixedPointError, FixedPointResult};
    pub use crate::fixed_point::{FixedPoint, Q16_16, Q24_8};
    pub use crate::rounding::ResolutionDiagnostic;
    pub use crate::scaled::{ScaleStrategy, ScaledMulDiv};
}
