use robust_vector3::{assert_fuzzy_eq, vec3, Vector3};
use std::cmp::Ordering;

#[test]
fn magnitude_ordering() {
    let short = vec3(1.0, 0.0, 0.0);
    let long = vec3(3.0, 4.0, 0.0);
    assert_eq!(short.cmp_magnitude(long), Ordering::Less);
    assert_eq!(long.cmp_magnitude(short), Ordering::Greater);

    // same magnitude along different directions
    assert_eq!(vec3(3.0, 4.0, 0.0).cmp_magnitude(vec3(5.0, 0.0, 0.0)), Ordering::Equal);
    assert_eq!(vec3(0.0, 0.0, 0.0).cmp_magnitude(Vector3::ZERO), Ordering::Equal);

    assert_eq!(vec3(f64::INFINITY, 0.0, 0.0).cmp_magnitude(long), Ordering::Greater);
    assert_eq!(long.cmp_magnitude(vec3(f64::INFINITY, 0.0, 0.0)), Ordering::Less);

    // magnitude collapses the sign of an infinity so these are the same length
    assert_eq!(
        vec3(f64::INFINITY, 0.0, 0.0).cmp_magnitude(vec3(f64::NEG_INFINITY, 0.0, 0.0)),
        Ordering::Equal
    );
}

#[test]
fn magnitude_ordering_with_nan() {
    // a NaN magnitude is not comparable so it reports neither side as larger
    assert_eq!(Vector3::NAN.cmp_magnitude(vec3(1.0, 0.0, 0.0)), Ordering::Equal);
    assert_eq!(vec3(1.0, 0.0, 0.0).cmp_magnitude(Vector3::NAN), Ordering::Equal);
    assert_eq!(Vector3::NAN.cmp_magnitude(Vector3::NAN), Ordering::Equal);
    assert_eq!(
        vec3(f64::NAN, 1.0, 0.0).cmp_magnitude(vec3(f64::INFINITY, 0.0, 0.0)),
        Ordering::Equal
    );
}

#[test]
fn magnitude_ordering_is_antisymmetric() {
    let values = [
        vec3(1.0, 2.0, 3.0),
        vec3(-5.0, 0.0, 0.25),
        Vector3::ZERO,
        Vector3::NAN,
        vec3(f64::INFINITY, 0.0, 0.0),
        vec3(1e-300, 0.0, 0.0),
    ];

    for a in values {
        for b in values {
            assert_eq!(
                a.cmp_magnitude(b),
                b.cmp_magnitude(a).reverse(),
                "cmp_magnitude({a:?}, {b:?})"
            );
        }
    }
}

#[test]
fn magnitude_ordering_with_tolerance() {
    let a = vec3(1.0, 0.0, 0.0);
    let b = vec3(1.0 + 5e-9, 0.0, 0.0);
    assert_eq!(a.cmp_magnitude_eps(b, 1e-8), Ordering::Equal);
    assert_eq!(a.cmp_magnitude_eps(b, 1e-10), Ordering::Less);
    assert_eq!(b.cmp_magnitude_eps(a, 1e-10), Ordering::Greater);

    assert_eq!(Vector3::NAN.cmp_magnitude_eps(a, 1e-8), Ordering::Equal);
}

#[test]
fn componentwise_fuzzy_equality() {
    let v = vec3(1.0, 2.0, 3.0);
    assert!(v.fuzzy_eq(vec3(1.0 + 1e-9, 2.0 - 1e-9, 3.0)));
    assert!(!v.fuzzy_eq(vec3(1.0 + 1e-7, 2.0, 3.0)));

    assert!(v.fuzzy_eq_eps(vec3(1.01, 2.0, 3.0), 0.1));
    assert!(!v.fuzzy_eq_eps(vec3(1.01, 2.0, 3.0), 0.001));

    // every component must pass, not just some
    assert!(!v.fuzzy_eq_eps(vec3(1.0, 2.0, 4.0), 0.1));
}

#[test]
fn componentwise_fuzzy_equality_with_special_values() {
    let inf = vec3(f64::INFINITY, f64::NEG_INFINITY, 1.0);
    assert!(inf.fuzzy_eq(inf));
    assert!(!inf.fuzzy_eq(vec3(f64::INFINITY, f64::INFINITY, 1.0)));

    assert!(vec3(0.0, -0.0, 0.0).fuzzy_eq_eps(vec3(-0.0, 0.0, -0.0), 0.0));

    assert!(!Vector3::NAN.fuzzy_eq(Vector3::NAN));
    assert!(!vec3(f64::NAN, 2.0, 3.0).fuzzy_eq(vec3(f64::NAN, 2.0, 3.0)));
}

#[test]
fn fuzzy_assertion_macro_accepts_vectors() {
    assert_fuzzy_eq!(vec3(1.0, 2.0, 3.0), vec3(1.0 + 1e-10, 2.0, 3.0));
    assert_fuzzy_eq!(vec3(1.0, 2.0, 3.0), vec3(1.05, 2.0, 3.0), 0.1);
}
