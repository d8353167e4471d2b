// ============================================================================
// Decimal Rounding
// Round-half-up biasing of fixed-point values before truncating display
// ============================================================================

use crate::errors::{FixedPointError, FixedPointResult};
use crate::fixed_point::{pow10, FixedPoint};

impl<const F: u32> FixedPoint<F> {
    /// Bias to add before truncating the decimal expansion at `digits`.
    ///
    /// `2^F / (2 × 10^digits)` by integer division: half of one unit in the
    /// target decimal position, expressed in 2^F-ths. The division itself
    /// truncates, so the addend is coarse rather than exact; once
    /// `10^digits` passes [`Self::faithful_decimal_digits`] it truncates to 0
    /// and rounding becomes a no-op. That is the resolution floor, not an
    /// error.
    ///
    /// For F=16: 32768, 3276, 327, 32, 3, 0, ...
    #[inline]
    pub const fn round_addend(digits: u32) -> u32 {
        // Past the boundary the quotient is already zero; returning early
        // also keeps 2 * 10^digits inside u64 for any digit count.
        if digits > Self::faithful_decimal_digits() {
            return 0;
        }
        (Self::FRACTION_DIVISOR as u64 / (2 * pow10(digits))) as u32
    }

    /// Bias this value so that truncating at `digits` rounds half-up.
    ///
    /// `round_to_digits(n)` followed by [`Self::format`]`(n)` yields the
    /// decimal expansion rounded half-up at digit `n`, within the resolution
    /// of F. The addition wraps if the value sits near the top of the word.
    #[inline]
    pub const fn round_to_digits(self, digits: u32) -> Self {
        Self::from_raw(self.raw_value().wrapping_add(Self::round_addend(digits)))
    }

    /// Biasing that reports instead of wrapping near the top of the word.
    #[inline]
    pub fn checked_round_to_digits(self, digits: u32) -> FixedPointResult<Self> {
        self.raw_value()
            .checked_add(Self::round_addend(digits))
            .map(Self::from_raw)
            .ok_or(FixedPointError::Overflow)
    }
}

// ============================================================================
// Resolution Diagnostic
// ============================================================================

/// Reports, once, the first time a caller renders more decimal digits than the
/// fraction bits can faithfully hold.
///
/// The caller constructs one and threads it through its rendering calls; there
/// is no process-wide state. For a stateless check, compare against
/// [`FixedPoint::faithful_decimal_digits`] directly.
///
/// # Example
/// ```
/// use qfixed::ResolutionDiagnostic;
///
/// let mut diag = ResolutionDiagnostic::new();
/// assert!(!diag.observe::<16>(4)); // faithful
/// assert!(diag.observe::<16>(5));  // first unfaithful digit count
/// assert!(!diag.observe::<16>(6)); // already reported
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolutionDiagnostic {
    reported: bool,
}

impl ResolutionDiagnostic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendering at `digits` decimal places for fraction width `F`.
    ///
    /// Returns true exactly once: the first time `digits` exceeds the
    /// faithful threshold. Also emits a `tracing` warning at that point so
    /// the loss shows up in logs without any caller plumbing.
    pub fn observe<const F: u32>(&mut self, digits: u32) -> bool {
        if self.reported {
            return false;
        }
        if digits > FixedPoint::<F>::faithful_decimal_digits() {
            self.reported = true;
            tracing::warn!(
                digits,
                fraction_bits = F,
                faithful = FixedPoint::<F>::faithful_decimal_digits(),
                "decimal expansion past the fixed-point resolution boundary"
            );
            return true;
        }
        false
    }

    /// Whether the boundary crossing has already been reported.
    pub fn is_reported(&self) -> bool {
        self.reported
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_point::Q16_16;

    #[test]
    fn test_addend_table_f16() {
        assert_eq!(Q16_16::round_addend(0), 32768);
        assert_eq!(Q16_16::round_addend(1), 3276);
        assert_eq!(Q16_16::round_addend(2), 327);
        assert_eq!(Q16_16::round_addend(3), 32);
        assert_eq!(Q16_16::round_addend(4), 3);
        assert_eq!(Q16_16::round_addend(5), 0); // resolution floor
        assert_eq!(Q16_16::round_addend(6), 0);
    }

    #[test]
    fn test_addend_monotone() {
        let mut prev = Q16_16::round_addend(0);
        for digits in 1..10 {
            let addend = Q16_16::round_addend(digits);
            assert!(addend <= prev);
            prev = addend;
        }
        assert_eq!(prev, 0);
    }

    #[test]
    fn test_round_half_up() {
        // 218.571428...: rounding at each digit position
        let price = Q16_16::from_integer(510)
            .wrapping_mul_integer(3)
            .wrapping_div_integer(7);

        assert_eq!(price.round_to_digits(0).format(0), "219");
        assert_eq!(price.round_to_digits(1).format(1), "218.6");
        assert_eq!(price.round_to_digits(2).format(2), "218.57");
        assert_eq!(price.round_to_digits(3).format(3), "218.571");
    }

    #[test]
    fn test_round_carries_into_whole_part() {
        // 0.99 rounded to 1 digit must carry across the separator: 1.0
        let x = Q16_16::from_decimal_hundredths(99);
        assert_eq!(x.round_to_digits(1).format(1), "1.0");
        assert_eq!(x.format(1), "0.9");
    }

    #[test]
    fn test_round_past_resolution_is_noop() {
        let price = Q16_16::from_integer(510)
            .wrapping_mul_integer(3)
            .wrapping_div_integer(7);
        assert_eq!(price.round_to_digits(5), price);
    }

    #[test]
    fn test_rounding_idempotent_within_ulp() {
        let price = Q16_16::from_integer(510)
            .wrapping_mul_integer(3)
            .wrapping_div_integer(7);
        for digits in 0..6 {
            let once = price.round_to_digits(digits);
            let twice = once.round_to_digits(digits);
            let d_once = once.integer_part() as u64 * pow10(digits) + once.fraction_digits(digits);
            let d_twice =
                twice.integer_part() as u64 * pow10(digits) + twice.fraction_digits(digits);
            assert!(d_twice - d_once <= 1);
        }
    }

    #[test]
    fn test_checked_round_near_top_of_word() {
        let near_max = Q16_16::from_raw(u32::MAX - 10);
        assert_eq!(
            near_max.checked_round_to_digits(0),
            Err(FixedPointError::Overflow)
        );
        // The wrapping form silently goes around
        assert_eq!(
            near_max.round_to_digits(0).raw_value(),
            (u32::MAX - 10).wrapping_add(32768)
        );
    }

    #[test]
    fn test_diagnostic_reports_once() {
        let mut diag = ResolutionDiagnostic::new();
        assert!(!diag.observe::<16>(0));
        assert!(!diag.observe::<16>(4));
        assert!(!diag.is_reported());
        assert!(diag.observe::<16>(5));
        assert!(diag.is_reported());
        assert!(!diag.observe::<16>(6));
    }

    impl Q16_16 {
        /// Test helper: hundredths expressed in 2^16-ths, truncated.
        fn from_decimal_hundredths(h: u32) -> Self {
            Self::from_raw(((h as u64 * 65536) / 100) as u32)
        }
    }
}
