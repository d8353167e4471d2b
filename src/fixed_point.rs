// ============================================================================
// Fixed-Point Value
// Binary fixed-point arithmetic with compile-time fraction width
// ============================================================================

use crate::errors::{FixedPointError, FixedPointResult};
use std::fmt;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary fixed-point number with compile-time fraction width.
///
/// Internally stores `value × 2^F` in a `u32` word: the low `F` bits hold the
/// fractional part, the remaining `32 - F` bits hold the whole part.
///
/// # Type Parameter
/// - `F`: Number of fraction bits (1-31). Default is 16 (Q16.16 layout).
///
/// # Value Range
/// With F=16 (default):
/// - Minimum: 0.0
/// - Maximum: 65535.99998474...
/// - Resolution: 2^-16 (~0.0000153)
///
/// Arithmetic wraps by default, matching the native unsigned word; every
/// operation also has a `checked_*` form that reports [`FixedPointError`]
/// instead of wrapping.
///
/// # Example
/// ```
/// use qfixed::FixedPoint;
///
/// let price = FixedPoint::<16>::from_integer(500)
///     .wrapping_add_integer(10)
///     .wrapping_mul_integer(3)
///     .wrapping_div_integer(7); // (500 + 10) * 3 / 7 = 218.571428...
///
/// assert_eq!(price.integer_part(), 218);
/// assert_eq!(price.format(4), "218.5714");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct FixedPoint<const F: u32 = 16>(u32);

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time (n <= 19, the u64 power-of-ten range)
pub(crate) const fn pow10(n: u32) -> u64 {
    let mut result: u64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl<const F: u32> FixedPoint<F> {
    /// Number of low bits holding the fractional part
    pub const FRACTION_BITS: u32 = F;

    /// Number of high bits holding the whole part
    pub const WHOLE_BITS: u32 = u32::BITS - F;

    /// The binary scale factor (2^F)
    pub const FRACTION_DIVISOR: u32 = 1 << F;

    /// Mask selecting the fraction bits (2^F - 1)
    pub const FRACTION_MASK: u32 = Self::FRACTION_DIVISOR - 1;

    /// Largest whole number the word can hold (2^(32-F) - 1)
    pub const MAX_WHOLE: u32 = ((1u64 << Self::WHOLE_BITS) - 1) as u32;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(1 << F);

    /// Maximum representable value
    pub const MAX: Self = Self(u32::MAX);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    ///
    /// Use this when you already hold a scaled word.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Create from a whole number by shifting it up into the whole-part bits.
    ///
    /// Whole numbers above [`Self::MAX_WHOLE`] silently lose their high bits,
    /// matching the native shift. Use [`Self::checked_from_integer`] to detect
    /// that instead.
    #[inline]
    pub const fn from_integer(value: u32) -> Self {
        Self(value << F)
    }

    /// Create from a whole number, reporting values the word cannot hold.
    ///
    /// # Errors
    /// Returns `Overflow` if `value > MAX_WHOLE`.
    #[inline]
    pub fn checked_from_integer(value: u32) -> FixedPointResult<Self> {
        if value > Self::MAX_WHOLE {
            return Err(FixedPointError::Overflow);
        }
        Ok(Self(value << F))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    ///
    /// This is the value × 2^F.
    #[inline]
    pub const fn raw_value(self) -> u32 {
        self.0
    }

    /// Get the whole part (truncated).
    #[inline]
    pub const fn integer_part(self) -> u32 {
        self.0 >> F
    }

    /// Get the fraction bits, as a count of 2^F-ths.
    #[inline]
    pub const fn fraction_raw(self) -> u32 {
        self.0 & Self::FRACTION_MASK
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    // ========================================================================
    // Integer Arithmetic on the Scaled Word
    // ========================================================================

    /// Add a whole number, wrapping on overflow.
    #[inline]
    pub const fn wrapping_add_integer(self, value: u32) -> Self {
        Self(self.0.wrapping_add(value << F))
    }

    /// Multiply by a whole number, wrapping on overflow.
    ///
    /// The factor applies directly to the scaled word, so no re-scaling is
    /// needed. When combining with a division, multiply first: dividing first
    /// shifts fraction bits out and the factor cannot bring them back.
    #[inline]
    pub const fn wrapping_mul_integer(self, factor: u32) -> Self {
        Self(self.0.wrapping_mul(factor))
    }

    /// Divide by a whole number, truncating toward zero.
    ///
    /// # Panics
    /// Panics if `divisor` is zero, like native integer division. Use
    /// [`Self::checked_div_integer`] to report it instead.
    #[inline]
    pub const fn wrapping_div_integer(self, divisor: u32) -> Self {
        Self(self.0 / divisor)
    }

    /// Add a whole number, reporting overflow.
    #[inline]
    pub fn checked_add_integer(self, value: u32) -> FixedPointResult<Self> {
        let shifted = (value as u64) << F;
        u32::try_from(shifted)
            .ok()
            .and_then(|s| self.0.checked_add(s))
            .map(Self)
            .ok_or(FixedPointError::Overflow)
    }

    /// Multiply by a whole number, reporting overflow.
    #[inline]
    pub fn checked_mul_integer(self, factor: u32) -> FixedPointResult<Self> {
        self.0
            .checked_mul(factor)
            .map(Self)
            .ok_or(FixedPointError::Overflow)
    }

    /// Divide by a whole number, reporting a zero divisor.
    #[inline]
    pub fn checked_div_integer(self, divisor: u32) -> FixedPointResult<Self> {
        self.0
            .checked_div(divisor)
            .map(Self)
            .ok_or(FixedPointError::DivisionByZero)
    }

    /// Checked addition of two values with the same fraction width.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> FixedPointResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(FixedPointError::Overflow)
    }

    /// Checked subtraction of two values with the same fraction width.
    ///
    /// # Errors
    /// Returns `Overflow` if `rhs > self` (the word is unsigned).
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> FixedPointResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(FixedPointError::Overflow)
    }

    // ========================================================================
    // Decimal Expansion
    // ========================================================================

    /// First `digits` decimal digits of the fractional part, truncated.
    ///
    /// Computes `fraction_raw × 10^digits / 2^F` in a u128 intermediate so the
    /// multiply cannot overflow. This is truncation toward zero of the decimal
    /// expansion; rounding is a separate, opt-in step
    /// ([`Self::round_to_digits`]).
    ///
    /// Digits past [`Self::faithful_decimal_digits`] are no longer faithful to
    /// the binary fraction: the word's resolution is coarser than the decimal
    /// position being asked for, and the expansion distorts rather than errors.
    ///
    /// # Panics
    /// Debug-asserts `digits <= 19` (the u64 power-of-ten range).
    #[inline]
    pub fn fraction_digits(self, digits: u32) -> u64 {
        debug_assert!(digits <= 19, "10^{digits} does not fit in a u64");
        let scaled = self.fraction_raw() as u128 * pow10(digits) as u128;
        (scaled / Self::FRACTION_DIVISOR as u128) as u64
    }

    /// Render as a decimal string with `digits` places after the separator.
    ///
    /// The fractional digits are truncated, not rounded, and left-zero-padded
    /// to exactly `digits` characters. With `digits = 0` only the whole part
    /// is rendered.
    pub fn format(self, digits: u32) -> String {
        if digits == 0 {
            format!("{}", self.integer_part())
        } else {
            format!(
                "{}.{:0>width$}",
                self.integer_part(),
                self.fraction_digits(digits),
                width = digits as usize
            )
        }
    }

    /// Largest decimal digit count the fraction bits can faithfully render.
    ///
    /// This is the resolution boundary: the largest N with `10^N <= 2^F`.
    /// Beyond it, 1/2^F steps are coarser than the decimal position and
    /// [`Self::fraction_digits`] starts to distort. Diagnostic only; nothing
    /// stops a caller from asking for more digits.
    pub const fn faithful_decimal_digits() -> u32 {
        let mut n = 0;
        while pow10(n + 1) <= Self::FRACTION_DIVISOR as u64 {
            n += 1;
        }
        n
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

// Infallible Add/Sub for ergonomics (panics on overflow - use checked_* in
// production)
impl<const F: u32> Add for FixedPoint<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("FixedPoint addition overflow")
    }
}

impl<const F: u32> Sub for FixedPoint<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .expect("FixedPoint subtraction overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const F: u32> fmt::Debug for FixedPoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint<{}>({}, raw={})", F, self, self.0)
    }
}

impl<const F: u32> fmt::Display for FixedPoint<F> {
    /// Renders at the faithful digit count for F (e.g. 4 digits for F=16).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = Self::faithful_decimal_digits();
        write!(
            f,
            "{}.{:0>width$}",
            self.integer_part(),
            self.fraction_digits(digits),
            width = digits as usize
        )
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

#[cfg(feature = "decimal")]
impl<const F: u32> FixedPoint<F> {
    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Intended for display and cross-checking only. Exact for F <= 28
    /// (2^-F has an F-digit decimal expansion and Decimal keeps 28).
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from(self.0) / rust_decimal::Decimal::from(Self::FRACTION_DIVISOR)
    }

    /// Convert from `rust_decimal::Decimal`, truncating toward zero to the
    /// nearest representable 1/2^F step.
    ///
    /// Intended for API boundaries only (e.g. configuration input).
    ///
    /// # Errors
    /// Returns `Overflow` for negative values or values above the word range.
    pub fn from_decimal(d: rust_decimal::Decimal) -> FixedPointResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let scaled = d * rust_decimal::Decimal::from(Self::FRACTION_DIVISOR);
        scaled
            .trunc()
            .to_u32()
            .map(Self)
            .ok_or(FixedPointError::Overflow)
    }
}

// ============================================================================
// Type Aliases for Common Layouts
// ============================================================================

/// Q16.16: 16 whole bits, 16 fraction bits (the classic layout)
pub type Q16_16 = FixedPoint<16>;

/// Q24.8: 24 whole bits, 8 fraction bits (coarser fraction, larger range)
pub type Q24_8 = FixedPoint<8>;

// ============================================================================
// Tests
// ============================================================================
