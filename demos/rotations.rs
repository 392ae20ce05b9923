use robust_vector3::core::traits::FuzzyEq;
use robust_vector3::{assert_fuzzy_eq, vec3, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};

fn main() {
    axis_rotations();
    yaw_pitch_roll();
    rotations_about_offset_axes();
    geometric_relationships();
}

fn axis_rotations() {
    // Quarter turns cycle the axes with a right-handed orientation
    assert_fuzzy_eq!(Vector3::X_AXIS.rotate_z(FRAC_PI_2), Vector3::Y_AXIS);
    assert_fuzzy_eq!(Vector3::Y_AXIS.rotate_x(FRAC_PI_2), Vector3::Z_AXIS);
    assert_fuzzy_eq!(Vector3::Z_AXIS.rotate_y(FRAC_PI_2), Vector3::X_AXIS);

    // A half turn about z flips x and y and leaves z alone
    assert_fuzzy_eq!(vec3(1.0, 2.0, 3.0).rotate_z(PI), vec3(-1.0, -2.0, 3.0));

    // Rotation never changes the length
    let v = vec3(3.0, -2.0, 5.0);
    assert_fuzzy_eq!(v.rotate_y(0.7).magnitude(), v.magnitude(), 1e-12);
}

fn yaw_pitch_roll() {
    let heading = vec3(1.0, 0.0, 0.0);

    // Yaw turns about z, pitch about x, roll about y
    assert_eq!(heading.yaw(FRAC_PI_2), heading.rotate_z(FRAC_PI_2));
    assert_eq!(heading.pitch(FRAC_PI_2), heading.rotate_x(FRAC_PI_2));
    assert_eq!(heading.roll(FRAC_PI_2), heading.rotate_y(FRAC_PI_2));

    assert_fuzzy_eq!(heading.yaw(FRAC_PI_2), Vector3::Y_AXIS);
}

fn rotations_about_offset_axes() {
    // Rotate the point (2, 0, 0) a quarter turn about the vertical line
    // through (1, 0)
    let rotated = vec3(2.0, 0.0, 0.0).rotate_z_about(1.0, 0.0, FRAC_PI_2);
    assert_fuzzy_eq!(rotated, vec3(1.0, 1.0, 0.0));

    // With the axis through the origin this is just rotate_z
    let v = vec3(1.0, 2.0, 3.0);
    assert_eq!(v.rotate_z_about(0.0, 0.0, 0.4), v.rotate_z(0.4));
}

fn geometric_relationships() {
    let v = vec3(2.0, 1.0, 3.0);

    // Projection splits a vector into parallel and perpendicular parts
    let onto = vec3(1.0, 1.0, 0.0);
    let parallel = v.projection(onto);
    let perpendicular = v.rejection(onto);
    assert_eq!(parallel, vec3(1.5, 1.5, 0.0), "component along (1, 1, 0)");
    assert_fuzzy_eq!(parallel + perpendicular, v, 1e-12);
    assert!(
        perpendicular.is_perpendicular(onto),
        "rejection should be perpendicular to the target"
    );

    // Reflection about an axis reverses everything orthogonal to it
    assert_eq!(
        vec3(1.0, 2.0, 3.0).reflection(Vector3::Z_AXIS),
        vec3(-1.0, -2.0, 3.0)
    );

    // Angles come back in radians between 0 and pi
    assert_fuzzy_eq!(Vector3::X_AXIS.angle(Vector3::Y_AXIS), FRAC_PI_2);
    assert_fuzzy_eq!(Vector3::X_AXIS.angle(-Vector3::X_AXIS), PI);
    assert_eq!(v.angle(v), 0.0, "angle with self is exactly zero");
}
