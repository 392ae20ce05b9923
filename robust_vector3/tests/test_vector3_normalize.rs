use robust_vector3::{assert_fuzzy_eq, vec3, NormalizeError, Vector3};

#[test]
fn normalized_magnitude_is_one() {
    let cases = [
        vec3(3.0, 1.0, -1.0),
        vec3(-2.0, 7.5, 0.25),
        // subnormal components survive the scaling
        vec3(1e-320, 0.0, 0.0),
        vec3(5e-324, 5e-324, 0.0),
        // and so do components whose squares would overflow
        vec3(1e200, -1e200, 1e200),
        vec3(f64::MAX, f64::MAX, 0.0),
    ];

    for v in cases {
        let unit = v.try_normalize().unwrap();
        assert!(
            unit.is_unit_vector_eps(1e-12),
            "normalize({v:?}) produced {unit:?} with magnitude {}",
            unit.magnitude()
        );
    }
}

#[test]
fn normalized_direction() {
    let unit = vec3(3.0, 1.0, -1.0).try_normalize().unwrap();
    let expected = vec3(3.0, 1.0, -1.0) / 11.0_f64.sqrt();
    assert_fuzzy_eq!(unit, expected, 1e-15);

    let negated = vec3(-3.0, -1.0, 1.0).try_normalize().unwrap();
    assert_fuzzy_eq!(negated, -expected, 1e-15);
}

#[test]
fn zero_vector_has_no_direction() {
    assert_eq!(Vector3::ZERO.try_normalize(), Err(NormalizeError::ZeroMagnitude));
    assert_eq!(vec3(-0.0, 0.0, -0.0).try_normalize(), Err(NormalizeError::ZeroMagnitude));
    assert_eq!(Vector3::ZERO.normalize_or_default(), Vector3::ZERO);
}

#[test]
fn single_infinite_component_dominates() {
    let axis_cases = [
        (vec3(f64::INFINITY, 0.0, 0.0), Vector3::X_AXIS),
        (vec3(f64::NEG_INFINITY, 0.0, 0.0), -Vector3::X_AXIS),
        (vec3(0.0, f64::INFINITY, 0.0), Vector3::Y_AXIS),
        (vec3(0.0, f64::NEG_INFINITY, 0.0), -Vector3::Y_AXIS),
        (vec3(0.0, 0.0, f64::INFINITY), Vector3::Z_AXIS),
        (vec3(0.0, 0.0, f64::NEG_INFINITY), -Vector3::Z_AXIS),
    ];

    for (v, expected) in axis_cases {
        assert_eq!(v.try_normalize(), Ok(expected), "normalize({v:?})");
    }
}

#[test]
fn mixed_infinite_components_are_ambiguous() {
    let ambiguous = [
        // finite components alongside an infinity contribute nothing to the
        // direction but the result is not a plain axis either
        vec3(f64::INFINITY, 3.0, 6.0),
        vec3(1.0, f64::INFINITY, 1.0),
        vec3(f64::INFINITY, f64::INFINITY, 0.0),
        vec3(f64::INFINITY, f64::NEG_INFINITY, 0.0),
        vec3(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
    ];

    for v in ambiguous {
        assert_eq!(v.try_normalize(), Err(NormalizeError::AmbiguousDirection), "normalize({v:?})");
    }
}

#[test]
fn nan_component_takes_precedence() {
    assert_eq!(Vector3::NAN.try_normalize(), Err(NormalizeError::NanComponent));
    assert_eq!(vec3(f64::NAN, 1.0, 2.0).try_normalize(), Err(NormalizeError::NanComponent));
    // NaN wins even when an infinity is present
    assert_eq!(
        vec3(f64::NAN, f64::INFINITY, 0.0).try_normalize(),
        Err(NormalizeError::NanComponent)
    );
}

#[test]
fn normalize_or_default_fills_failures() {
    assert_eq!(Vector3::ZERO.normalize_or_default(), Vector3::ZERO);
    assert!(Vector3::NAN.normalize_or_default().is_nan());
    assert!(vec3(f64::INFINITY, f64::INFINITY, 0.0).normalize_or_default().is_nan());
    assert_eq!(vec3(0.0, -2.0, 0.0).normalize_or_default(), -Vector3::Y_AXIS);
}

#[test]
fn scale_to_magnitude() {
    assert_fuzzy_eq!(vec3(3.0, 4.0, 0.0).scale(10.0).unwrap(), vec3(6.0, 8.0, 0.0), 1e-12);

    // a negative magnitude flips the direction
    assert_fuzzy_eq!(vec3(3.0, 4.0, 0.0).scale(-5.0).unwrap(), vec3(-3.0, -4.0, 0.0), 1e-12);

    assert_eq!(vec3(f64::INFINITY, 0.0, 0.0).scale(3.0), Ok(vec3(3.0, 0.0, 0.0)));
    assert_eq!(Vector3::ZERO.scale(2.0), Err(NormalizeError::ZeroMagnitude));
    assert_eq!(Vector3::NAN.scale(2.0), Err(NormalizeError::NanComponent));
}

#[test]
fn error_messages() {
    assert_eq!(
        NormalizeError::ZeroMagnitude.to_string(),
        "cannot normalize a vector with zero magnitude"
    );
    assert_eq!(
        NormalizeError::NanComponent.to_string(),
        "cannot normalize a vector with a NaN component"
    );
    assert_eq!(
        NormalizeError::AmbiguousDirection.to_string(),
        "cannot normalize a vector with ambiguous infinite components"
    );
}

#[test]
#[should_panic(expected = "zero magnitude")]
fn normalize_panics_on_zero() {
    Vector3::ZERO.normalize();
}
