//! Quaternion functions

use crate::math::{acos_clamped, SLERP_LINEAR_THRESHOLD_DEGREES};
use crate::{to_radians, MathError, MathResult, Quaternion, Vector3};

/// Unit-length copy of `q`
pub fn normalize(q: Quaternion) -> MathResult<Quaternion> {
    let operation = "quaternion::normalize";
    let mag = q.magnitude();
    if mag.is_infinite() {
        // Squares overflowed: bring the largest component to 1 first
        let largest = [q.x.abs(), q.y.abs(), q.z.abs(), q.w.abs()]
            .into_iter()
            .fold(0.0, f32::max);
        let scaled = q * (1.0 / MathError::check(operation, largest)?);
        return Ok(scaled * (1.0 / MathError::check(operation, scaled.magnitude())?));
    }
    Ok(q * (1.0 / MathError::check(operation, mag)?))
}

/// Negate the vector part
#[inline]
pub fn conjugate(q: Quaternion) -> Quaternion {
    Quaternion::new(-q.x, -q.y, -q.z, q.w)
}

/// Conjugate divided by the magnitude
///
/// For a unit quaternion this is its inverse. For any other non-zero
/// quaternion the result is the (unit) inverse of its normalized form, which
/// is what rotation code wants.
pub fn inverse(q: Quaternion) -> MathResult<Quaternion> {
    let mag = MathError::check("quaternion::inverse", q.magnitude())?;
    Ok(conjugate(q) * (1.0 / mag))
}

#[inline]
pub fn dot(a: Quaternion, b: Quaternion) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
}

/// Angle between two quaternions seen as 4D vectors, in radians
///
/// This is half the angle of the relative rotation. Zero-length inputs give NaN.
pub fn angle(a: Quaternion, b: Quaternion) -> f32 {
    acos_clamped(dot(a, b) / (a.magnitude() * b.magnitude()))
}

/// Rotate `v` by the sandwich product `q * (v, 0) * inverse(q)`
pub fn rotate(q: Quaternion, v: Vector3) -> MathResult<Vector3> {
    let rotated = q * Quaternion::from_vector(v) * inverse(q)?;
    Ok(rotated.vector())
}

/// Normalized linear blend, `q1` at `t = 0` and `q2` at `t = 1`
pub fn lerp(q1: Quaternion, q2: Quaternion, t: f32) -> MathResult<Quaternion> {
    normalize(q1 * (1.0 - t) + q2 * t)
}

/// Spherical interpolation between two quaternions
///
/// Below ten degrees of separation this is [`lerp`]. Exactly opposite
/// inputs fail, since every great circle through them is equally short.
/// No sign flip is applied, so `q` and `-q` do not interpolate along the
/// shorter rotation.
pub fn slerp(q1: Quaternion, q2: Quaternion, t: f32) -> MathResult<Quaternion> {
    let n1 = normalize(q1)?;
    let n2 = normalize(q2)?;

    let mut theta = angle(n1, n2);
    if -n1 == n2 {
        theta = std::f32::consts::PI;
    }

    if theta < to_radians(SLERP_LINEAR_THRESHOLD_DEGREES) {
        return lerp(q1, q2, t);
    }

    let sin_theta = MathError::check("quaternion::slerp", theta.sin())?;
    let k1 = (theta * (1.0 - t)).sin() / sin_theta;
    let k2 = (theta * t).sin() / sin_theta;
    Ok(n1 * k1 + n2 * k2)
}
