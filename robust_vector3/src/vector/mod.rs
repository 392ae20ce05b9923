//! 3D vector type with total IEEE-754 edge case behavior across all operations.
mod error;
mod vector3;

pub use error::NormalizeError;
pub use vector3::{vec3, Vector3};
