//! Core/common traits for use in robust_vector3.
mod fuzzy_eq;

pub use fuzzy_eq::FuzzyEq;
