/// Number of mantissa bits in an `f64`.
const MANTISSA_BITS: u32 = 52;
/// Mask for the 11 exponent bits after shifting out the mantissa.
const EXPONENT_MASK: u64 = 0x7FF;
/// Exponent field value used by infinities and NaNs.
const EXPONENT_SPECIAL: u32 = 0x7FF;
/// IEEE-754 bias subtracted from the stored exponent field.
const EXPONENT_BIAS: i32 = 1023;
/// Mask for the 52 mantissa bits.
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
/// Top mantissa bit, set on quiet NaNs.
const QUIET_NAN_BIT: u64 = 1 << (MANTISSA_BITS - 1);

/// Read-only decomposition of an `f64` into its IEEE-754 bit fields.
///
/// The stored layout is 1 sign bit, 11 exponent bits, and 52 mantissa bits. All accessors
/// and classification methods derive from the raw bit pattern, so NaN payloads and zero
/// signs are observable exactly as stored and no input is rejected.
///
/// # Examples
///
/// ```
/// # use robust_vector3::core::math::FloatBits;
/// let bits = FloatBits::new(1.0);
/// assert_eq!(bits.sign_bit(), 0);
/// assert_eq!(bits.exponent_field(), 1023);
/// assert_eq!(bits.unbiased_exponent(), 0);
/// assert_eq!(bits.mantissa_field(), 0);
/// assert!(bits.is_normal());
///
/// let neg_zero = FloatBits::new(-0.0);
/// assert_eq!(neg_zero.sign_bit(), 1);
/// assert!(neg_zero.is_zero());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FloatBits {
    bits: u64,
}

impl FloatBits {
    /// Decompose `value` into its bit fields.
    #[inline]
    pub fn new(value: f64) -> Self {
        FloatBits {
            bits: value.to_bits(),
        }
    }

    /// Raw bit pattern of the value.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// The `f64` value these bits represent.
    #[inline]
    pub fn value(&self) -> f64 {
        f64::from_bits(self.bits)
    }

    /// Sign bit: 0 for positive values (including `+0.0`), 1 for negative values
    /// (including `-0.0` and NaNs with the sign bit set).
    #[inline]
    pub fn sign_bit(&self) -> u32 {
        (self.bits >> 63) as u32
    }

    /// Returns `true` if the sign bit is set.
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.sign_bit() == 1
    }

    /// The raw 11 bit exponent field (biased, range `0..=2047`).
    #[inline]
    pub fn exponent_field(&self) -> u32 {
        ((self.bits >> MANTISSA_BITS) & EXPONENT_MASK) as u32
    }

    /// The raw 52 bit mantissa field.
    #[inline]
    pub fn mantissa_field(&self) -> u64 {
        self.bits & MANTISSA_MASK
    }

    /// The exponent with the IEEE-754 bias of 1023 removed.
    ///
    /// Note this is the raw field minus the bias, so subnormals and zeros report `-1023`
    /// and infinities and NaNs report `1024`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use robust_vector3::core::math::FloatBits;
    /// assert_eq!(FloatBits::new(1.0).unbiased_exponent(), 0);
    /// assert_eq!(FloatBits::new(2.0).unbiased_exponent(), 1);
    /// assert_eq!(FloatBits::new(0.5).unbiased_exponent(), -1);
    /// ```
    #[inline]
    pub fn unbiased_exponent(&self) -> i32 {
        self.exponent_field() as i32 - EXPONENT_BIAS
    }

    /// Returns `true` if the value is `+0.0` or `-0.0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.exponent_field() == 0 && self.mantissa_field() == 0
    }

    /// Returns `true` if the value is subnormal (zero exponent field, non-zero mantissa).
    #[inline]
    pub fn is_subnormal(&self) -> bool {
        self.exponent_field() == 0 && self.mantissa_field() != 0
    }

    /// Returns `true` if the value is normal (finite, not zero, not subnormal).
    #[inline]
    pub fn is_normal(&self) -> bool {
        let exponent = self.exponent_field();
        exponent != 0 && exponent != EXPONENT_SPECIAL
    }

    /// Returns `true` if the value is NaN (maximum exponent field, non-zero mantissa).
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.exponent_field() == EXPONENT_SPECIAL && self.mantissa_field() != 0
    }

    /// Returns `true` if the value is a quiet NaN (NaN with the top mantissa bit set).
    #[inline]
    pub fn is_quiet_nan(&self) -> bool {
        self.is_nan() && (self.mantissa_field() & QUIET_NAN_BIT) != 0
    }

    /// Returns `true` if the value is a signaling NaN (NaN with the top mantissa bit
    /// clear).
    #[inline]
    pub fn is_signaling_nan(&self) -> bool {
        self.is_nan() && (self.mantissa_field() & QUIET_NAN_BIT) == 0
    }

    /// Returns `true` if the value is positive or negative infinity.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.exponent_field() == EXPONENT_SPECIAL && self.mantissa_field() == 0
    }

    /// Returns `true` if the value is positive infinity.
    #[inline]
    pub fn is_positive_infinity(&self) -> bool {
        self.is_infinite() && !self.is_sign_negative()
    }

    /// Returns `true` if the value is negative infinity.
    #[inline]
    pub fn is_negative_infinity(&self) -> bool {
        self.is_infinite() && self.is_sign_negative()
    }

    /// Map the bit pattern to an integer that is monotonic in the represented value, so
    /// the distance between two floats in ULPs (units in the last place) is the
    /// difference of their mapped integers.
    ///
    /// Positive values map to their bit pattern and negative values are reflected below
    /// zero, which places `+0.0` and `-0.0` together at 0 and makes adjacent bit
    /// patterns map to adjacent integers across the entire range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use robust_vector3::core::math::FloatBits;
    /// // smallest positive and negative subnormals sit either side of zero
    /// assert_eq!(FloatBits::new(f64::from_bits(1)).ulp_ordered(), 1);
    /// assert_eq!(FloatBits::new(-f64::from_bits(1)).ulp_ordered(), -1);
    /// assert_eq!(FloatBits::new(0.0).ulp_ordered(), 0);
    /// assert_eq!(FloatBits::new(-0.0).ulp_ordered(), 0);
    /// ```
    #[inline]
    pub fn ulp_ordered(&self) -> i64 {
        let signed = self.bits as i64;
        if signed < 0 {
            0x8000_0000_0000_0000_u64.wrapping_sub(self.bits) as i64
        } else {
            signed
        }
    }
}

impl From<f64> for FloatBits {
    #[inline]
    fn from(value: f64) -> Self {
        FloatBits::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_exponent_classification() {
        assert!(FloatBits::new(f64::INFINITY).is_infinite());
        assert!(FloatBits::new(f64::NEG_INFINITY).is_infinite());
        assert!(FloatBits::new(f64::NAN).is_nan());
        assert!(!FloatBits::new(f64::MAX).is_infinite());
        assert_eq!(FloatBits::new(f64::INFINITY).exponent_field(), 2047);
    }

    #[test]
    fn quiet_and_signaling_nan() {
        // quiet NaN has mantissa bit 51 set, signaling NaN has it clear
        let quiet = FloatBits::new(f64::from_bits(0x7FF8_0000_0000_0000));
        assert!(quiet.is_quiet_nan());
        assert!(!quiet.is_signaling_nan());

        let signaling = FloatBits::new(f64::from_bits(0x7FF0_0000_0000_0001));
        assert!(signaling.is_signaling_nan());
        assert!(!signaling.is_quiet_nan());
    }

    #[test]
    fn ordered_values_are_monotonic() {
        let values = [
            f64::NEG_INFINITY,
            -f64::MAX,
            -1.0,
            -f64::MIN_POSITIVE,
            -f64::from_bits(1),
            0.0,
            f64::from_bits(1),
            f64::MIN_POSITIVE,
            1.0,
            f64::MAX,
            f64::INFINITY,
        ];
        for pair in values.windows(2) {
            assert!(
                FloatBits::new(pair[0]).ulp_ordered() < FloatBits::new(pair[1]).ulp_ordered(),
                "expected {} to order below {}",
                pair[0],
                pair[1]
            );
        }
    }
}
