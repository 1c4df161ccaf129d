//! Vector functions
//!
//! The generic functions work for [`Vector2`](crate::Vector2),
//! [`Vector3`] and [`Vector4`](crate::Vector4).

use crate::math::{acos_clamped, SLERP_LINEAR_THRESHOLD_DEGREES};
use crate::{to_radians, AngleUnit, MathError, MathResult, Vector3, VectorSpace};

/// Sum of componentwise products
#[inline]
pub fn dot<V: VectorSpace>(a: V, b: V) -> f32 {
    a.dot(b)
}

/// Length of `a - b`
#[inline]
pub fn distance<V: VectorSpace>(a: V, b: V) -> f32 {
    (a - b).magnitude()
}

/// Angle between two vectors
///
/// Zero-length inputs give NaN.
pub fn angle<V: VectorSpace>(a: V, b: V, unit: AngleUnit) -> f32 {
    let cos = a.dot(b) / (a.magnitude() * b.magnitude());
    unit.express(acos_clamped(cos))
}

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`
#[inline]
pub fn lerp<V: VectorSpace>(a: V, b: V, t: f32) -> V {
    // a + (b - a) can round away from b
    if t == 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// Reflect `v` across the plane with normal `n`
///
/// `n` should be unit length; it is not renormalized.
#[inline]
pub fn reflect<V: VectorSpace>(v: V, n: V) -> V {
    n * (2.0 * v.dot(n)) - v
}

/// Vector projection of `u` onto `v`
pub fn project<V: VectorSpace>(u: V, v: V) -> MathResult<V> {
    let mag = MathError::check("vector::project", v.magnitude())?;
    Ok(v * (u.dot(v) / (mag * mag)))
}

/// Cross product
#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Unit-length copy of `v`
#[inline]
pub fn normalize(v: Vector3) -> MathResult<Vector3> {
    v.normalized()
}

/// Unit vector orthogonal to `v` with chosen `x` and `y` components
///
/// Solves `dot(normalize(v), result) = 0` for `result.z`, so `v.z` must be
/// non-zero.
pub fn ortho_normalize(v: Vector3, x: f32, y: f32) -> MathResult<Vector3> {
    let normal = v.normalized()?;
    let nz = MathError::check("vector::ortho_normalize", normal.z)?;
    let z = (normal.x * x + normal.y * y) / -nz;
    Vector3::new(x, y, z).normalized()
}

/// Spherical interpolation between the directions of `a` and `b`
///
/// Falls back to [`lerp`] on the raw inputs when they are less than ten
/// degrees apart. Exactly opposite directions are 180 degrees apart, where
/// the great circle is undefined and the call fails.
pub fn slerp(a: Vector3, b: Vector3, t: f32) -> MathResult<Vector3> {
    let n1 = a.normalized()?;
    let n2 = b.normalized()?;

    let mut theta = angle(n1, n2, AngleUnit::Radians);
    if -n1 == n2 {
        theta = std::f32::consts::PI;
    }

    if theta < to_radians(SLERP_LINEAR_THRESHOLD_DEGREES) {
        return Ok(lerp(a, b, t));
    }

    let sin_theta = MathError::check("vector::slerp", theta.sin())?;
    let k1 = (theta * (1.0 - t)).sin() / sin_theta;
    let k2 = (theta * t).sin() / sin_theta;
    Ok(n1 * k1 + n2 * k2)
}
