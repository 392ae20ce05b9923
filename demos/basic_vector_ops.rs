use robust_vector3::{vec3, NormalizeError, Vector3};

fn main() {
    construction();
    arithmetic();
    products();
    normalization();
}

fn construction() {
    // Struct constructor and the free function shorthand build the same value
    let from_new = Vector3::new(1.0, 2.0, 3.0);
    let from_fn = vec3(1.0, 2.0, 3.0);
    assert_eq!(from_new, from_fn, "constructors should agree");

    // From a slice, which fails on the wrong length
    let from_slice = Vector3::from_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(
        from_slice,
        Some(from_fn),
        "three element slice should convert"
    );
    assert_eq!(
        Vector3::from_slice(&[1.0, 2.0]),
        None,
        "two element slice should not convert"
    );

    // Axis constants
    assert_eq!(
        Vector3::X_AXIS + Vector3::Y_AXIS + Vector3::Z_AXIS,
        vec3(1.0, 1.0, 1.0),
        "axis constants should sum to the ones vector"
    );
}

fn arithmetic() {
    let a = vec3(3.0, 7.0, 4.0);
    let b = vec3(2.0, 9.0, 11.0);

    assert_eq!(a + b, vec3(5.0, 16.0, 15.0), "component-wise addition");
    assert_eq!(a - b, vec3(1.0, -2.0, -7.0), "component-wise subtraction");
    assert_eq!(a * 2.0, vec3(6.0, 14.0, 8.0), "scalar multiplication");
    assert_eq!(a / 2.0, vec3(1.5, 3.5, 2.0), "scalar division");
    assert_eq!(-a, vec3(-3.0, -7.0, -4.0), "negation");

    // Special values flow through arithmetic untouched
    let with_infinity = vec3(f64::INFINITY, 0.0, 1.0) + b;
    assert_eq!(
        with_infinity.x,
        f64::INFINITY,
        "infinity plus finite stays infinite"
    );
    let indeterminate = vec3(f64::INFINITY, 0.0, 0.0) - vec3(f64::INFINITY, 0.0, 0.0);
    assert!(
        indeterminate.x.is_nan(),
        "infinity minus infinity should be NaN"
    );
}

fn products() {
    let a = vec3(12.0, 20.0, 0.0);
    let b = vec3(16.0, -5.0, 0.0);
    assert_eq!(a.dot(b), 92.0, "dot product should be 92");

    let cross = vec3(4.0, 1.0, 0.0).cross(vec3(-5.0, 6.0, 0.0));
    assert_eq!(
        cross,
        vec3(0.0, 0.0, 29.0),
        "cross of coplanar vectors points along z"
    );

    assert_eq!(
        vec3(3.0, 1.0, -1.0).magnitude(),
        11.0_f64.sqrt(),
        "magnitude is the square root of the dot with self"
    );
}

fn normalization() {
    let unit = vec3(3.0, 4.0, 0.0).normalize();
    assert_eq!(unit, vec3(0.6, 0.8, 0.0), "direction of a 3-4-5 triangle");
    assert!(unit.is_unit_vector(), "normalized vector should be unit");

    // Fallible form reports why a vector has no direction
    assert_eq!(
        Vector3::ZERO.try_normalize(),
        Err(NormalizeError::ZeroMagnitude),
        "zero vector has no direction"
    );
    assert_eq!(
        Vector3::NAN.try_normalize(),
        Err(NormalizeError::NanComponent),
        "NaN components have no direction"
    );

    // A single infinite component is still a usable direction
    assert_eq!(
        vec3(f64::NEG_INFINITY, 0.0, 0.0).try_normalize(),
        Ok(-Vector3::X_AXIS),
        "axis infinity normalizes to the signed axis"
    );

    // Extreme magnitudes normalize without overflow
    let huge = vec3(1e200, -1e200, 1e200).normalize();
    assert!(
        huge.is_unit_vector_eps(1e-12),
        "huge vector should normalize to unit length"
    );
}
