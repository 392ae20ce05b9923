use crate::core::math::{round_midpoint, MidpointRounding};
use crate::core::traits::FuzzyEq;
use crate::vector::NormalizeError;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D vector represented by `x`, `y`, and `z` components.
///
/// `Vector3` is an immutable value type: every operation returns a new vector and no
/// method mutates the receiver. Components may hold any `f64` value including NaN,
/// infinities, and signed zeros, and every operation defines its behavior for those
/// inputs instead of rejecting them.
///
/// Equality comes in three distinct forms:
/// * the `==` operator is component-wise IEEE equality (NaN is never equal to NaN),
/// * [Vector3::eq_value] treats NaN components as equal and ignores zero sign (this is
///   the equality [Hash](std::hash::Hash) agrees with),
/// * [Vector3::fuzzy_eq_eps] compares component-wise within an absolute tolerance.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3 {
    /// X coordinate component of the vector.
    pub x: f64,
    /// Y coordinate component of the vector.
    pub y: f64,
    /// Z coordinate component of the vector.
    pub z: f64,
}

impl Vector3 {
    /// Vector with all components zero.
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector along the positive x axis.
    pub const X_AXIS: Vector3 = Vector3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector along the positive y axis.
    pub const Y_AXIS: Vector3 = Vector3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Unit vector along the positive z axis.
    pub const Z_AXIS: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Vector with all components NaN.
    pub const NAN: Vector3 = Vector3 {
        x: f64::NAN,
        y: f64::NAN,
        z: f64::NAN,
    };

    /// Create a new vector with x, y, and z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Construct a vector from a [x, y, z] slice.
    ///
    /// If the slice does not contain exactly 3 elements then `None` is returned.
    #[inline]
    pub fn from_slice(components: &[f64]) -> Option<Self> {
        if let [x, y, z] = *components {
            Some(Vector3::new(x, y, z))
        } else {
            None
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared magnitude of the vector.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Magnitude (length) of the vector.
    ///
    /// Computed as the square root of the component square sum, so the IEEE-754 special
    /// values follow from the arithmetic: any NaN component yields NaN, and any infinite
    /// component of a NaN free vector yields positive infinity. The zero vector has a
    /// magnitude of exactly 0.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Absolute value of the vector, defined as its magnitude.
    #[inline]
    pub fn abs(&self) -> f64 {
        self.magnitude()
    }

    /// Distance between this vector and `other` interpreted as points.
    #[inline]
    pub fn distance(&self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Square each component.
    #[inline]
    pub fn sqr_components(&self) -> Self {
        Vector3::new(self.x * self.x, self.y * self.y, self.z * self.z)
    }

    /// Take the square root of each component.
    #[inline]
    pub fn sqrt_components(&self) -> Self {
        Vector3::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt())
    }

    /// Raise each component to the power `exponent`.
    #[inline]
    pub fn pow_components(&self, exponent: f64) -> Self {
        Vector3::new(
            self.x.powf(exponent),
            self.y.powf(exponent),
            self.z.powf(exponent),
        )
    }

    /// Round each component to the nearest integer using `rule` to break midpoint ties.
    ///
    /// NaN and infinite components pass through unchanged.
    #[inline]
    pub fn round(&self, rule: MidpointRounding) -> Self {
        Vector3::new(
            round_midpoint(self.x, rule),
            round_midpoint(self.y, rule),
            round_midpoint(self.z, rule),
        )
    }

    /// Unit vector in the direction of this vector, or the reason no such direction
    /// exists.
    ///
    /// Errors are [NormalizeError::NanComponent] if any component is NaN,
    /// [NormalizeError::ZeroMagnitude] if all components are zero, and
    /// [NormalizeError::AmbiguousDirection] if infinite components mix with other
    /// non-zero components. A vector with exactly one infinite component and zeros
    /// elsewhere normalizes to the matching signed axis unit vector.
    ///
    /// The finite path divides by the largest absolute component before forming the
    /// square sum, so vectors with subnormal or near `f64::MAX` components still
    /// normalize to unit magnitude instead of underflowing or overflowing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use robust_vector3::{NormalizeError, Vector3};
    /// let unit = Vector3::new(3.0, 0.0, 0.0).try_normalize().unwrap();
    /// assert_eq!(unit, Vector3::X_AXIS);
    ///
    /// assert_eq!(
    ///     Vector3::ZERO.try_normalize().unwrap_err(),
    ///     NormalizeError::ZeroMagnitude
    /// );
    ///
    /// // an axis aligned infinite vector still has a direction
    /// let unit = Vector3::new(f64::NEG_INFINITY, 0.0, 0.0).try_normalize().unwrap();
    /// assert_eq!(unit, Vector3::new(-1.0, 0.0, 0.0));
    ///
    /// // an infinite component alongside finite ones does not
    /// assert_eq!(
    ///     Vector3::new(f64::INFINITY, 3.0, 6.0).try_normalize().unwrap_err(),
    ///     NormalizeError::AmbiguousDirection
    /// );
    /// ```
    pub fn try_normalize(&self) -> Result<Vector3, NormalizeError> {
        if self.is_nan() {
            return Err(NormalizeError::NanComponent);
        }

        if self.is_zero() {
            return Err(NormalizeError::ZeroMagnitude);
        }

        if self.x.is_infinite() || self.y.is_infinite() || self.z.is_infinite() {
            return self
                .infinite_axis_direction()
                .ok_or(NormalizeError::AmbiguousDirection);
        }

        // dividing by the largest absolute component keeps the square sum away from
        // overflow and subnormal underflow
        let scale = self.x.abs().max(self.y.abs()).max(self.z.abs());
        let scaled = Vector3::new(self.x / scale, self.y / scale, self.z / scale);
        Ok(scaled / scaled.magnitude())
    }

    /// Unit vector in the direction of this vector.
    ///
    /// # Panics
    ///
    /// Panics if the vector has no defined direction (zero magnitude, NaN component, or
    /// ambiguous infinite components). Use [Vector3::try_normalize] to handle those
    /// cases as values.
    #[inline]
    pub fn normalize(&self) -> Vector3 {
        match self.try_normalize() {
            Ok(unit) => unit,
            Err(err) => panic!("{err}"),
        }
    }

    /// Unit vector in the direction of this vector, or a fallback when no direction
    /// exists: the zero vector for zero magnitude input, otherwise a NaN vector.
    #[inline]
    pub fn normalize_or_default(&self) -> Vector3 {
        match self.try_normalize() {
            Ok(unit) => unit,
            Err(NormalizeError::ZeroMagnitude) => Vector3::ZERO,
            Err(_) => Vector3::NAN,
        }
    }

    /// Vector in the same direction as this vector with the `magnitude` given.
    ///
    /// Fails for the same inputs as [Vector3::try_normalize].
    #[inline]
    pub fn scale(&self, magnitude: f64) -> Result<Vector3, NormalizeError> {
        Ok(self.try_normalize()? * magnitude)
    }

    /// Angle between this vector and `other` in radians (range `[0, PI]`).
    ///
    /// Identical vectors (by IEEE equality) short circuit to an angle of exactly zero.
    /// Otherwise the angle is measured between the [Vector3::normalize_or_default]
    /// reductions with the cosine clamped to `[-1, 1]`, so nearly parallel vectors
    /// cannot produce NaN from round off. A zero operand reduces to [Vector3::ZERO]
    /// whose dot with any direction is zero, so the angle against a zero vector is
    /// `FRAC_PI_2`. Any NaN component yields NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use robust_vector3::Vector3;
    /// # use robust_vector3::core::traits::FuzzyEq;
    /// use std::f64::consts::FRAC_PI_2;
    /// let x = Vector3::new(1.0, 0.0, 0.0);
    /// let y = Vector3::new(0.0, 1.0, 0.0);
    /// assert!(x.angle(y).fuzzy_eq(FRAC_PI_2));
    /// // identical vectors short circuit to exactly zero
    /// assert_eq!(x.angle(x), 0.0);
    /// ```
    pub fn angle(&self, other: Self) -> f64 {
        if *self == other {
            return 0.0;
        }

        self.normalize_or_default()
            .dot(other.normalize_or_default())
            .clamp(-1.0, 1.0)
            .acos()
    }

    /// Projection of this vector onto `other`.
    ///
    /// Projecting onto the zero vector produces NaN components.
    #[inline]
    pub fn projection(&self, other: Self) -> Vector3 {
        other * (self.dot(other) / other.magnitude_squared())
    }

    /// Component of this vector perpendicular to `other`, i.e.
    /// `self - self.projection(other)`.
    #[inline]
    pub fn rejection(&self, other: Self) -> Vector3 {
        self - self.projection(other)
    }

    /// Reflection of this vector about `axis`.
    ///
    /// Reflecting twice about the same non-zero axis returns the original vector within
    /// floating point tolerance.
    #[inline]
    pub fn reflection(&self, axis: Self) -> Vector3 {
        self.projection(axis) * 2.0 - self
    }

    /// Rotate around the x axis by `radians`.
    #[inline]
    pub fn rotate_x(&self, radians: f64) -> Vector3 {
        let (s, c) = radians.sin_cos();
        Vector3::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    /// Rotate around the y axis by `radians`.
    #[inline]
    pub fn rotate_y(&self, radians: f64) -> Vector3 {
        let (s, c) = radians.sin_cos();
        Vector3::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }

    /// Rotate around the z axis by `radians`.
    #[inline]
    pub fn rotate_z(&self, radians: f64) -> Vector3 {
        let (s, c) = radians.sin_cos();
        Vector3::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }

    /// Rotate around a line parallel to the x axis passing through `y_origin` and
    /// `z_origin` by `radians`.
    ///
    /// Same as [Vector3::rotate_x] when both origins are zero.
    pub fn rotate_x_about(&self, y_origin: f64, z_origin: f64, radians: f64) -> Vector3 {
        // translate so the rotation axis passes through the origin
        let translated = Vector3::new(self.x, self.y - y_origin, self.z - z_origin);

        // rotate
        let rotated = translated.rotate_x(radians);

        // translate back
        Vector3::new(rotated.x, rotated.y + y_origin, rotated.z + z_origin)
    }

    /// Rotate around a line parallel to the y axis passing through `x_origin` and
    /// `z_origin` by `radians`.
    ///
    /// Same as [Vector3::rotate_y] when both origins are zero.
    pub fn rotate_y_about(&self, x_origin: f64, z_origin: f64, radians: f64) -> Vector3 {
        // translate so the rotation axis passes through the origin
        let translated = Vector3::new(self.x - x_origin, self.y, self.z - z_origin);

        // rotate
        let rotated = translated.rotate_y(radians);

        // translate back
        Vector3::new(rotated.x + x_origin, rotated.y, rotated.z + z_origin)
    }

    /// Rotate around a line parallel to the z axis passing through `x_origin` and
    /// `y_origin` by `radians`.
    ///
    /// Same as [Vector3::rotate_z] when both origins are zero.
    pub fn rotate_z_about(&self, x_origin: f64, y_origin: f64, radians: f64) -> Vector3 {
        // translate so the rotation axis passes through the origin
        let translated = Vector3::new(self.x - x_origin, self.y - y_origin, self.z);

        // rotate
        let rotated = translated.rotate_z(radians);

        // translate back
        Vector3::new(rotated.x + x_origin, rotated.y + y_origin, rotated.z)
    }

    /// Yaw rotation (around the z axis) by `radians`.
    #[inline]
    pub fn yaw(&self, radians: f64) -> Vector3 {
        self.rotate_z(radians)
    }

    /// Pitch rotation (around the x axis) by `radians`.
    #[inline]
    pub fn pitch(&self, radians: f64) -> Vector3 {
        self.rotate_x(radians)
    }

    /// Roll rotation (around the y axis) by `radians`.
    #[inline]
    pub fn roll(&self, radians: f64) -> Vector3 {
        self.rotate_y(radians)
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns `true` if all components are zero (of either sign).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Returns `true` if the magnitude is exactly 1.
    ///
    /// Most computed unit vectors carry round off, see [Vector3::is_unit_vector_eps].
    #[inline]
    pub fn is_unit_vector(&self) -> bool {
        self.magnitude() == 1.0
    }

    /// Returns `true` if the magnitude is within `max_abs_error` of 1.
    #[inline]
    pub fn is_unit_vector_eps(&self, max_abs_error: f64) -> bool {
        self.magnitude().fuzzy_eq_eps(1.0, max_abs_error)
    }

    /// Returns `true` if the dot product with `other` is exactly zero.
    ///
    /// The zero vector is not perpendicular to anything and NaN bearing vectors are
    /// never perpendicular. When infinite components make the dot product NaN the
    /// test falls back to comparing directions, so an axis aligned infinite vector
    /// is perpendicular to whatever its matching signed axis is perpendicular to.
    pub fn is_perpendicular(&self, other: Self) -> bool {
        if self.is_zero() || other.is_zero() || self.is_nan() || other.is_nan() {
            return false;
        }

        let dot = self.dot(other);
        if dot.is_nan() {
            // the component products are indeterminate, fall back to the definite
            // directions when both operands have one
            return match (self.definite_direction(), other.definite_direction()) {
                (Some(a), Some(b)) => a.dot(b) == 0.0,
                _ => false,
            };
        }

        dot == 0.0
    }

    /// Same as [Vector3::is_perpendicular] with the dot product compared against
    /// zero within `max_abs_error`.
    ///
    /// The tolerance bounds the raw dot product, so it scales with the operand
    /// magnitudes.
    pub fn is_perpendicular_eps(&self, other: Self, max_abs_error: f64) -> bool {
        if self.is_zero() || other.is_zero() || self.is_nan() || other.is_nan() {
            return false;
        }

        let dot = self.dot(other);
        if dot.is_nan() {
            return match (self.definite_direction(), other.definite_direction()) {
                (Some(a), Some(b)) => a.dot(b).fuzzy_eq_zero_eps(max_abs_error),
                _ => false,
            };
        }

        dot.fuzzy_eq_zero_eps(max_abs_error)
    }

    /// Order this vector against `other` by magnitude.
    ///
    /// Returns [Ordering::Equal] when neither magnitude is larger, which includes NaN
    /// magnitudes (a NaN magnitude never compares larger or smaller). This keeps the
    /// ordering antisymmetric over all inputs.
    pub fn cmp_magnitude(&self, other: Self) -> Ordering {
        let (a, b) = (self.magnitude(), other.magnitude());
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Same as [Vector3::cmp_magnitude] except magnitudes within `max_abs_error` of
    /// each other compare equal.
    pub fn cmp_magnitude_eps(&self, other: Self, max_abs_error: f64) -> Ordering {
        let (a, b) = (self.magnitude(), other.magnitude());
        if a.fuzzy_eq_eps(b, max_abs_error) {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Component-wise value equality: NaN components are equal to each other and zeros
    /// are equal regardless of sign.
    ///
    /// [Hash](std::hash::Hash) is consistent with this equality. The `==` operator keeps
    /// IEEE semantics where NaN is never equal.
    #[inline]
    pub fn eq_value(&self, other: Self) -> bool {
        value_eq(self.x, other.x) && value_eq(self.y, other.y) && value_eq(self.z, other.z)
    }

    /// Fuzzy equal comparison with another vector using `max_abs_error` for each
    /// component.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, max_abs_error: f64) -> bool {
        self.x.fuzzy_eq_eps(other.x, max_abs_error)
            && self.y.fuzzy_eq_eps(other.y, max_abs_error)
            && self.z.fuzzy_eq_eps(other.z, max_abs_error)
    }

    /// Fuzzy equal comparison with another vector using `f64::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, f64::fuzzy_epsilon())
    }

    /// Direction to compare when a dot product comes out NaN: a finite vector is its
    /// own direction, an infinite vector only has one along an axis.
    fn definite_direction(&self) -> Option<Vector3> {
        if self.x.is_infinite() || self.y.is_infinite() || self.z.is_infinite() {
            self.infinite_axis_direction()
        } else {
            Some(*self)
        }
    }

    /// Direction of a vector with exactly one infinite component and zeros elsewhere,
    /// `None` for any other arrangement of an infinite component.
    fn infinite_axis_direction(&self) -> Option<Vector3> {
        let axes = [
            (self.x, Vector3::X_AXIS),
            (self.y, Vector3::Y_AXIS),
            (self.z, Vector3::Z_AXIS),
        ];

        let mut direction = None;
        for (component, axis) in axes {
            if component.is_infinite() {
                if direction.is_some() {
                    return None;
                }
                direction = Some(axis * component.signum());
            } else if component != 0.0 {
                return None;
            }
        }

        direction
    }
}

/// IEEE value equality for a single component: NaN equals NaN, `+0.0` equals `-0.0`.
#[inline]
fn value_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Bit pattern with all NaN payloads collapsed to the canonical quiet NaN and both zero
/// signs collapsed to `+0.0`, matching the equivalence of [Vector3::eq_value].
#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        0x7FF8_0000_0000_0000
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
        canonical_bits(self.z).hash(state);
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from(components: [f64; 3]) -> Self {
        Vector3::new(components[0], components[1], components[2])
    }
}

#[inline(always)]
pub fn vec3(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl ops::$op_trait<Vector3> for Vector3 {
            type Output = Vector3;
            fn $op_func(self, rhs: Vector3) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl ops::$op_trait<&Vector3> for Vector3 {
            type Output = Vector3;
            fn $op_func(self, rhs: &Vector3) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }


        impl<'a, 'b> ops::$op_trait<&'b Vector3> for &'a Vector3 {
            type Output = Vector3;
            fn $op_func(self, _rhs: &'b Vector3) -> Self::Output {
                Vector3::new(self.x $op _rhs.x, self.y $op _rhs.y, self.z $op _rhs.z)
            }
        }

        impl ops::$op_trait<Vector3> for &Vector3 {
            type Output = Vector3;
            fn $op_func(self, rhs: Vector3) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

macro_rules! ImplUnaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl ops::$op_trait for Vector3 {
            type Output = Vector3;
            fn $op_func(self) -> Self::Output {
                Vector3::new($op self.x, $op self.y, $op self.z)
            }
        }

        impl ops::$op_trait for &Vector3 {
            type Output = Vector3;
            fn $op_func(self) -> Self::Output {
                Vector3::new($op self.x, $op self.y, $op self.z)
            }
        }

    };
}

ImplUnaryOp!(Neg, neg, -);

macro_rules! ImplScalarOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl ops::$op_trait<f64> for Vector3 {
            type Output = Vector3;
            fn $op_func(self, rhs: f64) -> Self::Output {
                Vector3::new(self.x $op rhs, self.y $op rhs, self.z $op rhs)
            }
        }

        impl ops::$op_trait<f64> for &Vector3 {
            type Output = Vector3;
            fn $op_func(self, rhs: f64) -> Self::Output {
                Vector3::new(self.x $op rhs, self.y $op rhs, self.z $op rhs)
            }
        }
    };
}

ImplScalarOp!(Mul, mul, *);
ImplScalarOp!(Div, div, /);

impl ops::Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}
