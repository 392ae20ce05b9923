//! 3D vector math with exact IEEE-754 special value handling.
//!
//! This crate provides [Vector3], an immutable 3D vector value type whose operations are
//! all defined over NaN, infinite, and signed zero components, together with the
//! floating point comparison primitives the vector operations are built on:
//! [FloatBits](crate::core::math::FloatBits) for decomposing an `f64` into its sign,
//! exponent, and mantissa fields, and [FuzzyEq](crate::core::traits::FuzzyEq) for
//! absolute, relative, and ULP based tolerant comparisons.

#[macro_use]
mod macros;

pub mod core;
pub mod vector;

pub use crate::vector::{vec3, NormalizeError, Vector3};
