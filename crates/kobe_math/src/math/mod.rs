//! Stateless function library
//!
//! All functions take values and return new values; nothing here keeps state.
//! Functions that divide by a computed magnitude return [`crate::MathResult`].
//!
//! - [`vector`] - dot/cross/distance/angle, interpolation, reflection, projection
//! - [`matrix`] - transform and projection builders, transpose, inverse
//! - [`quaternion`] - normalization, inverse, rotation, interpolation
//! - [`convert`] - quaternion, matrix and Euler-angle conversions

pub mod convert;
pub mod matrix;
pub mod quaternion;
pub mod vector;

/// Below this angle (degrees) spherical interpolation falls back to linear
pub const SLERP_LINEAR_THRESHOLD_DEGREES: f32 = 10.0;

/// Clamp a cosine into `acos`'s domain before taking it
#[inline]
pub(crate) fn acos_clamped(cos: f32) -> f32 {
    cos.clamp(-1.0, 1.0).acos()
}
