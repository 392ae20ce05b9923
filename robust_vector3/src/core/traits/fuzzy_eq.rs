use crate::core::math::FloatBits;

/// Trait for tolerance based equality comparisons of floating point numbers.
///
/// This trait provides methods for comparing floating point values within an absolute
/// tolerance, within an absolute or relative tolerance, and within an absolute tolerance
/// or a count of representable values (ULPs, units in the last place). Exact equality is
/// rarely achievable with floating point arithmetic so some form of tolerant comparison
/// is required for nearly all geometric computations.
///
/// Every comparison starts with an IEEE `==` check. That shortcut is what makes equal
/// infinities compare equal and `+0.0` compare equal to `-0.0` even with a zero
/// tolerance. NaN fails the shortcut and every tolerance check, so all comparisons
/// involving NaN return `false`.
///
/// # Examples
///
/// ```
/// # use robust_vector3::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
///
/// // Direct comparison fails due to floating point precision
/// assert_ne!(a, b);
///
/// // Fuzzy comparison succeeds
/// assert!(a.fuzzy_eq(b));
///
/// // The shortcut makes infinities and signed zeros equal at zero tolerance
/// assert!(f64::INFINITY.fuzzy_eq_eps(f64::INFINITY, 0.0));
/// assert!(0.0_f64.fuzzy_eq_eps(-0.0, 0.0));
///
/// // NaN is never equal to anything
/// assert!(!f64::NAN.fuzzy_eq(f64::NAN));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if this value is approximately equal to the other one, using
    /// `max_abs_error` as the maximum allowed absolute difference.
    fn fuzzy_eq_eps(&self, other: Self, max_abs_error: Self) -> bool;

    /// Returns `true` if this value is approximately equal to the other one, using
    /// the implemented [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if this value is approximately equal to the other one, passing if
    /// either the absolute difference is within `max_abs_error` or the relative error is
    /// within `max_rel_error`.
    ///
    /// The relative error is the absolute difference divided by the larger magnitude
    /// operand. The absolute check is still required for comparisons against zero, where
    /// relative error degenerates.
    fn fuzzy_eq_rel(&self, other: Self, max_abs_error: Self, max_rel_error: Self) -> bool;

    /// Returns `true` if this value is approximately equal to the other one, passing if
    /// either the absolute difference is within `max_abs_error` or the two values are
    /// within `max_ulps` representable values of each other.
    ///
    /// ULP distance is measured on [FloatBits::ulp_ordered] integers, so it counts
    /// adjacent bit patterns and is meaningful across magnitudes where a fixed absolute
    /// tolerance is not.
    fn fuzzy_eq_ulps(&self, other: Self, max_abs_error: Self, max_ulps: u64) -> bool;

    /// Returns `true` if this value is approximately equal to zero, using
    /// `max_abs_error` as the maximum allowed absolute difference.
    fn fuzzy_eq_zero_eps(&self, max_abs_error: Self) -> bool;

    /// Returns `true` if this value is approximately equal to zero, using
    /// the implemented [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

impl FuzzyEq for f64 {
    #[inline]
    fn fuzzy_epsilon() -> Self {
        1.0e-8
    }

    #[inline]
    fn fuzzy_eq_eps(&self, other: Self, max_abs_error: Self) -> bool {
        if *self == other {
            // shortcut, handles infinities and signed zeros
            return true;
        }

        (*self - other).abs() <= max_abs_error
    }

    #[inline]
    fn fuzzy_eq_rel(&self, other: Self, max_abs_error: Self, max_rel_error: Self) -> bool {
        // needed if comparing against zero
        if self.fuzzy_eq_eps(other, max_abs_error) {
            return true;
        }

        // divide by the larger magnitude operand so the result is symmetric in a and b
        let relative_error = if other.abs() > self.abs() {
            ((*self - other) / other).abs()
        } else {
            ((*self - other) / *self).abs()
        };

        relative_error <= max_rel_error
    }

    #[inline]
    fn fuzzy_eq_ulps(&self, other: Self, max_abs_error: Self, max_ulps: u64) -> bool {
        // needed if comparing against zero
        if self.fuzzy_eq_eps(other, max_abs_error) {
            return true;
        }

        // NaN bit patterns can be adjacent but NaN never compares equal
        if self.is_nan() || other.is_nan() {
            return false;
        }

        // widen so the difference of ordered integers cannot overflow
        let a = i128::from(FloatBits::from(*self).ulp_ordered());
        let b = i128::from(FloatBits::from(other).ulp_ordered());
        (a - b).unsigned_abs() <= u128::from(max_ulps)
    }

    #[inline]
    fn fuzzy_eq_zero_eps(&self, max_abs_error: Self) -> bool {
        self.fuzzy_eq_eps(0.0, max_abs_error)
    }
}
