//! Kobe Mathematics Library
//!
//! Value types and a stateless function library for 3D transforms, camera
//! matrices and interpolation.
//!
//! ## Core Types
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - fixed-size float vectors
//! - [`Euler`] - pitch/yaw/roll in degrees
//! - [`Quaternion`] - rotation in Hamilton convention (`w` is the scalar part)
//! - [`Matrix4`] - 4x4 column-major matrix
//!
//! ## Functions
//!
//! The [`math`] module holds the free functions, grouped by operand:
//! [`math::vector`], [`math::matrix`], [`math::quaternion`] and
//! [`math::convert`].
//!
//! Every operation that divides by a magnitude, determinant or trace-derived
//! scalar checks it against [`EPSILON`] and reports
//! [`MathError::DegenerateOperation`] instead of producing NaN or infinity.

mod angle;
mod error;
mod euler;
mod matrix4;
mod quaternion;
mod vector;
pub mod math;

pub use angle::{AngleUnit, to_degrees, to_radians, DEGREES_TO_RADIANS, RADIANS_TO_DEGREES};
pub use error::{MathError, MathResult};
pub use euler::Euler;
pub use matrix4::Matrix4;
pub use quaternion::Quaternion;
pub use vector::{Vector2, Vector3, Vector4, VectorSpace};

/// Magnitudes below this are treated as zero by every checked division.
pub const EPSILON: f32 = 1.0e-6;
