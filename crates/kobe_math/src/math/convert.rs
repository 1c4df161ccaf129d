//! Conversions between quaternions, rotation matrices and Euler angles
//!
//! Euler angles are applied in yaw (Y), roll (Z), pitch (X) order, so the
//! equivalent quaternion is `q_yaw * q_roll * q_pitch`.

use std::f32::consts::FRAC_PI_2;

use crate::{to_degrees, to_radians, Euler, MathError, MathResult, Matrix4, Quaternion};

/// Above this fraction of the squared magnitude, `xy + zw` means the roll
/// is at +/-90 degrees and yaw and pitch can no longer be told apart.
const GIMBAL_LOCK_THRESHOLD: f32 = 0.499;

/// Rotation matrix of a unit quaternion
pub fn quaternion_to_matrix(q: Quaternion) -> Matrix4 {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);

    let mut m = Matrix4::IDENTITY;
    m[0] = 1.0 - 2.0 * y * y - 2.0 * z * z;
    m[1] = 2.0 * x * y + 2.0 * w * z;
    m[2] = 2.0 * x * z - 2.0 * w * y;

    m[4] = 2.0 * x * y - 2.0 * w * z;
    m[5] = 1.0 - 2.0 * x * x - 2.0 * z * z;
    m[6] = 2.0 * y * z + 2.0 * w * x;

    m[8] = 2.0 * x * z + 2.0 * w * y;
    m[9] = 2.0 * y * z - 2.0 * w * x;
    m[10] = 1.0 - 2.0 * x * x - 2.0 * y * y;
    m
}

/// Unit quaternion of the rotation in the upper 3x3 of `m`
///
/// Picks whichever of the four components is largest and derives the rest
/// from it (Shepperd's method), which keeps the division well away from zero
/// for any rotation matrix. The branch predicates keep `t >= 1` for every
/// finite input, so only NaN or infinite elements can fail here.
pub fn matrix_to_quaternion(m: &Matrix4) -> MathResult<Quaternion> {
    let (t, q) = if m[10] < 0.0 {
        if m[0] > m[5] {
            // x is largest
            let t = 1.0 + m[0] - m[5] - m[10];
            (t, Quaternion::new(t, m[1] + m[4], m[8] + m[2], m[6] - m[9]))
        } else {
            // y is largest
            let t = 1.0 - m[0] + m[5] - m[10];
            (t, Quaternion::new(m[1] + m[4], t, m[6] + m[9], m[8] - m[2]))
        }
    } else if m[0] < -m[5] {
        // z is largest
        let t = 1.0 - m[0] - m[5] + m[10];
        (t, Quaternion::new(m[8] + m[2], m[6] + m[9], t, m[1] - m[4]))
    } else {
        // w is largest
        let t = 1.0 + m[0] + m[5] + m[10];
        (t, Quaternion::new(m[6] - m[9], m[8] - m[2], m[1] - m[4], t))
    };

    let t = MathError::check("convert::matrix_to_quaternion", t)?;
    Ok(q * (0.5 / t.sqrt()))
}

/// Quaternion for Euler angles in degrees
pub fn euler_to_quaternion(e: Euler) -> Quaternion {
    let (s1, c1) = (to_radians(e.yaw) * 0.5).sin_cos();
    let (s2, c2) = (to_radians(e.roll) * 0.5).sin_cos();
    let (s3, c3) = (to_radians(e.pitch) * 0.5).sin_cos();

    let c1c2 = c1 * c2;
    let s1s2 = s1 * s2;

    Quaternion::new(
        c1c2 * s3 + s1s2 * c3,
        s1 * c2 * c3 + c1 * s2 * s3,
        c1 * s2 * c3 - s1 * c2 * s3,
        c1c2 * c3 - s1s2 * s3,
    )
}

/// Euler angles in degrees for a quaternion
///
/// The quaternion need not be normalized. At the poles (roll of +/-90
/// degrees) the whole remaining rotation is reported as yaw and pitch is 0.
pub fn quaternion_to_euler(q: Quaternion) -> MathResult<Euler> {
    let sqw = q.w * q.w;
    let sqx = q.x * q.x;
    let sqy = q.y * q.y;
    let sqz = q.z * q.z;

    let sum = MathError::check("convert::quaternion_to_euler", sqx + sqy + sqz + sqw)?;
    let test = q.x * q.y + q.z * q.w;

    let (yaw, roll, pitch) = if test > GIMBAL_LOCK_THRESHOLD * sum {
        (2.0 * q.x.atan2(q.w), FRAC_PI_2, 0.0)
    } else if test < -GIMBAL_LOCK_THRESHOLD * sum {
        (-2.0 * q.x.atan2(q.w), -FRAC_PI_2, 0.0)
    } else {
        (
            (2.0 * q.y * q.w - 2.0 * q.x * q.z).atan2(sqx - sqy - sqz + sqw),
            (2.0 * test / sum).clamp(-1.0, 1.0).asin(),
            (2.0 * q.x * q.w - 2.0 * q.y * q.z).atan2(-sqx + sqy - sqz + sqw),
        )
    };

    Ok(Euler::new(to_degrees(pitch), to_degrees(yaw), to_degrees(roll)))
}
