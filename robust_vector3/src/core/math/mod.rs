//! Core/common math for decomposing, ordering, and rounding floating point values.
mod float_bits;
mod rounding;

pub use float_bits::FloatBits;
pub use rounding::{round_midpoint, MidpointRounding};
