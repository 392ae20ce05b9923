use robust_vector3::core::math::FloatBits;
use robust_vector3::core::traits::FuzzyEq;
use robust_vector3::vec3;

fn main() {
    why_exact_equality_fails();
    absolute_tolerance();
    relative_tolerance();
    ulps_tolerance();
    bit_level_inspection();
}

fn why_exact_equality_fails() {
    let computed = 0.1 + 0.2;
    assert_ne!(computed, 0.3, "accumulated rounding makes == fail");
    assert!(
        computed.fuzzy_eq(0.3),
        "fuzzy comparison absorbs the rounding"
    );

    let v = vec3(0.1, 0.2, 0.3) + vec3(0.2, 0.1, 0.0);
    assert_ne!(v, vec3(0.3, 0.3, 0.3), "the same applies component-wise");
    assert!(v.fuzzy_eq(vec3(0.3, 0.3, 0.3)), "vectors compare fuzzily too");
}

fn absolute_tolerance() {
    assert!(
        1.0_f64.fuzzy_eq_eps(1.004, 0.005),
        "difference of 0.004 is inside a 0.005 tolerance"
    );
    assert!(
        !1.0_f64.fuzzy_eq_eps(1.006, 0.005),
        "difference of 0.006 is outside it"
    );

    // Equal values shortcut before any subtraction, so infinities and signed
    // zeros behave
    assert!(
        f64::INFINITY.fuzzy_eq_eps(f64::INFINITY, 0.0),
        "equal infinities compare equal at zero tolerance"
    );
    assert!(
        0.0_f64.fuzzy_eq_eps(-0.0, 0.0),
        "positive and negative zero are the same value"
    );
    assert!(
        !f64::NAN.fuzzy_eq_eps(f64::NAN, f64::MAX),
        "NaN never compares equal, not even to itself"
    );
}

fn relative_tolerance() {
    // An absolute tolerance tuned for values near one is useless at a
    // thousand, a relative tolerance scales with the operands
    assert!(
        1000.0_f64.fuzzy_eq_rel(1000.5, 0.0, 1e-3),
        "half a unit in a thousand is within 0.1 percent"
    );
    assert!(
        !1.0_f64.fuzzy_eq_rel(1.5, 0.0, 1e-3),
        "half a unit in one is not"
    );

    // The absolute arm still covers comparisons against zero where relative
    // error degenerates
    assert!(
        1e-12_f64.fuzzy_eq_rel(0.0, 1e-9, 1e-3),
        "tiny value near zero passes on the absolute arm"
    );
}

fn ulps_tolerance() {
    // Counting representable doubles between the operands adapts to their
    // scale automatically
    let exact = 0.3_f64;
    let computed = 0.1 + 0.2;
    assert!(
        computed.fuzzy_eq_ulps(exact, 0.0, 1),
        "0.1 + 0.2 lands one representable double away from 0.3"
    );

    let above = f64::from_bits(exact.to_bits() + 4);
    assert!(
        !above.fuzzy_eq_ulps(exact, 0.0, 3),
        "four steps away fails a three ulp tolerance"
    );
    assert!(
        above.fuzzy_eq_ulps(exact, 0.0, 4),
        "and passes a four ulp tolerance"
    );
}

fn bit_level_inspection() {
    let bits = FloatBits::from(1.0);
    assert_eq!(bits.sign_bit(), 0, "1.0 is positive");
    assert_eq!(bits.unbiased_exponent(), 0, "1.0 is 1.0 x 2^0");
    assert_eq!(bits.mantissa_field(), 0, "1.0 has an empty mantissa");

    assert!(
        FloatBits::from(f64::MIN_POSITIVE / 2.0).is_subnormal(),
        "half the smallest normal is subnormal"
    );
    assert!(
        FloatBits::new(f64::from_bits(0x7FF8_0000_0000_0000)).is_quiet_nan(),
        "mantissa bit 51 marks a quiet NaN"
    );
    assert!(
        FloatBits::new(f64::from_bits(0x7FF0_0000_0000_0001)).is_signaling_nan(),
        "NaN without bit 51 is signaling"
    );

    // The ordered mapping turns bit patterns into integers that sort like the
    // values themselves
    let below = FloatBits::from(-f64::from_bits(1)).ulp_ordered();
    let zero = FloatBits::from(0.0).ulp_ordered();
    let over = FloatBits::from(f64::from_bits(1)).ulp_ordered();
    assert!(
        below < zero && zero < over,
        "ordering is monotonic across zero"
    );
}
