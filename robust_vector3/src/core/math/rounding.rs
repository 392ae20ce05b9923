/// Tie breaking rule applied when a value is exactly half way between two integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MidpointRounding {
    /// Round half way values away from zero, e.g. `0.5` becomes `1` and `-0.5` becomes
    /// `-1`.
    AwayFromZero,
    /// Round half way values to the nearest even integer, e.g. `0.5` becomes `0` and
    /// `1.5` becomes `2`.
    ToEven,
}

/// Round `value` to the nearest integer using `rule` to break midpoint ties.
///
/// Values that are not midpoints round to the nearest integer under either rule. NaN and
/// infinite values are returned unchanged.
///
/// # Examples
///
/// ```
/// # use robust_vector3::core::math::*;
/// assert_eq!(round_midpoint(0.5, MidpointRounding::AwayFromZero), 1.0);
/// assert_eq!(round_midpoint(0.5, MidpointRounding::ToEven), 0.0);
/// assert_eq!(round_midpoint(-1.5, MidpointRounding::AwayFromZero), -2.0);
/// assert_eq!(round_midpoint(-1.5, MidpointRounding::ToEven), -2.0);
/// assert_eq!(round_midpoint(2.3, MidpointRounding::ToEven), 2.0);
/// ```
#[inline]
pub fn round_midpoint(value: f64, rule: MidpointRounding) -> f64 {
    match rule {
        MidpointRounding::AwayFromZero => value.round(),
        MidpointRounding::ToEven => value.round_ties_even(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoints() {
        assert_eq!(round_midpoint(2.5, MidpointRounding::AwayFromZero), 3.0);
        assert_eq!(round_midpoint(2.5, MidpointRounding::ToEven), 2.0);
        assert_eq!(round_midpoint(-0.5, MidpointRounding::AwayFromZero), -1.0);
        assert_eq!(round_midpoint(-0.5, MidpointRounding::ToEven), -0.0);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_midpoint(f64::NAN, MidpointRounding::ToEven).is_nan());
        assert_eq!(
            round_midpoint(f64::INFINITY, MidpointRounding::AwayFromZero),
            f64::INFINITY
        );
    }
}
