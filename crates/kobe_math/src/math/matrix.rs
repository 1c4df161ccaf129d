//! Matrix builders and matrix algebra
//!
//! Every builder returns a column-major [`Matrix4`] for column vectors, so
//! compose with `outer * inner`.

use crate::math::vector::{cross, dot};
use crate::{to_radians, MathError, MathResult, Matrix4, Vector3};

/// Rotation of `degrees` about `axis` (Rodrigues' formula)
///
/// The axis is normalized first and must not be (nearly) zero.
pub fn rotate(degrees: f32, axis: Vector3) -> MathResult<Matrix4> {
    let a = axis.normalized()?;
    let (s, c) = to_radians(degrees).sin_cos();
    let cosm = 1.0 - c;

    Ok(Matrix4::from_cols_array([
        a.x * a.x * cosm + c,
        a.x * a.y * cosm + a.z * s,
        a.x * a.z * cosm - a.y * s,
        0.0,
        a.y * a.x * cosm - a.z * s,
        a.y * a.y * cosm + c,
        a.y * a.z * cosm + a.x * s,
        0.0,
        a.z * a.x * cosm + a.y * s,
        a.z * a.y * cosm - a.x * s,
        a.z * a.z * cosm + c,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]))
}

/// [`rotate`] with the axis given by components
#[inline]
pub fn rotate_xyz(degrees: f32, x: f32, y: f32, z: f32) -> MathResult<Matrix4> {
    rotate(degrees, Vector3::new(x, y, z))
}

/// Scale along each axis
pub fn scale(x: f32, y: f32, z: f32) -> Matrix4 {
    let mut m = Matrix4::IDENTITY;
    m[0] = x;
    m[5] = y;
    m[10] = z;
    m
}

#[inline]
pub fn scale_by(v: Vector3) -> Matrix4 {
    scale(v.x, v.y, v.z)
}

#[inline]
pub fn scale_uniform(s: f32) -> Matrix4 {
    scale(s, s, s)
}

/// Translation by `(x, y, z)`
pub fn translate(x: f32, y: f32, z: f32) -> Matrix4 {
    let mut m = Matrix4::IDENTITY;
    m[12] = x;
    m[13] = y;
    m[14] = z;
    m
}

#[inline]
pub fn translate_by(v: Vector3) -> Matrix4 {
    translate(v.x, v.y, v.z)
}

/// Right-handed perspective projection into OpenGL clip space
///
/// # Arguments
/// * `fovy` - Vertical field of view in degrees
/// * `aspect` - Width divided by height
/// * `z_near`, `z_far` - Distances to the clipping planes
pub fn perspective(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> MathResult<Matrix4> {
    let tan = MathError::check("matrix::perspective", to_radians(fovy * 0.5).tan())?;
    let aspect = MathError::check("matrix::perspective", aspect)?;
    let depth = MathError::check("matrix::perspective", z_near - z_far)?;
    let cot = 1.0 / tan;

    let mut m = Matrix4::ZERO;
    m[0] = cot / aspect;
    m[5] = cot;
    m[10] = (z_near + z_far) / depth;
    m[11] = -1.0;
    m[14] = (2.0 * z_near * z_far) / depth;
    Ok(m)
}

/// Orthographic projection of the given box onto the NDC cube
///
/// Built as a scale followed by a translate.
pub fn orthographic(
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
    z_min: f32,
    z_max: f32,
) -> MathResult<Matrix4> {
    let width = MathError::check("matrix::orthographic", x_max - x_min)?;
    let height = MathError::check("matrix::orthographic", y_max - y_min)?;
    let depth = MathError::check("matrix::orthographic", z_max - z_min)?;

    let s = scale(2.0 / width, 2.0 / height, -2.0 / depth);
    let t = translate(
        -(x_max + x_min) / width,
        -(y_max + y_min) / height,
        -(z_max + z_min) / depth,
    );
    Ok(t * s)
}

/// Map NDC (x, y in [-1, 1], z in [0, 1]) to pixel coordinates
///
/// Screen y grows downwards, so NDC `(-1, 1)` lands on pixel `(0, 0)`.
pub fn viewport_ndc(width: u32, height: u32) -> Matrix4 {
    let (min_z, max_z) = (0.0, 1.0);
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;

    let flip = scale(1.0, -1.0, 1.0);
    let extent = scale(half_w, half_h, max_z - min_z);
    let offset = translate(half_w, half_h, min_z);
    offset * extent * flip
}

/// Undo an axis-aligned scale + translate matrix such as [`orthographic`]
///
/// Only the diagonal scale and the translation column are read, so this is
/// not an inverse of anything else; use [`inverse`] for general matrices.
pub fn un_ortho(ortho: &Matrix4) -> MathResult<Matrix4> {
    let sx = MathError::check("matrix::un_ortho", ortho[0])?;
    let sy = MathError::check("matrix::un_ortho", ortho[5])?;
    let sz = MathError::check("matrix::un_ortho", ortho[10])?;

    let mut m = Matrix4::IDENTITY;
    m[0] = 1.0 / sx;
    m[5] = 1.0 / sy;
    m[10] = 1.0 / sz;
    m[12] = -ortho[12] * m[0];
    m[13] = -ortho[13] * m[5];
    m[14] = -ortho[14] * m[10];
    Ok(m)
}

/// View matrix for a camera at `eye` looking at `at`
///
/// The camera looks down its local -Z with `up` roughly along local +Y.
/// Fails when `eye == at`, when `up` is zero, or when `up` is parallel to
/// the view direction.
pub fn look_at(eye: Vector3, at: Vector3, up: Vector3) -> MathResult<Matrix4> {
    let forward = (at - eye).normalized()?;
    let up = up.normalized()?;
    let side = cross(forward, up).normalized()?;
    let up = cross(side, forward);

    Ok(Matrix4::from_cols_array([
        side.x,
        up.x,
        -forward.x,
        0.0,
        side.y,
        up.y,
        -forward.y,
        0.0,
        side.z,
        up.z,
        -forward.z,
        0.0,
        -dot(side, eye),
        -dot(up, eye),
        dot(forward, eye),
        1.0,
    ]))
}

/// Swap rows and columns
pub fn transpose(m: &Matrix4) -> Matrix4 {
    Matrix4::from_cols_array([
        m[0], m[4], m[8], m[12],
        m[1], m[5], m[9], m[13],
        m[2], m[6], m[10], m[14],
        m[3], m[7], m[11], m[15],
    ])
}

/// Transposed cofactor matrix (adjugate)
#[rustfmt::skip]
fn adjugate(m: &Matrix4) -> [f32; 16] {
    let mut inv = [0.0f32; 16];

    inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
        + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
    inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
        - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
    inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
        + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
    inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
        - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];

    inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
        - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
    inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
        + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
    inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
        - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
    inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
        + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];

    inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
        + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
    inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
        - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
    inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
        + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
    inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
        - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];

    inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
        - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];
    inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
        + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];
    inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
        - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];
    inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
        + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

    inv
}

#[inline]
fn determinant_from(m: &Matrix4, adj: &[f32; 16]) -> f32 {
    m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
}

/// Determinant by cofactor expansion along the first column
pub fn determinant(m: &Matrix4) -> f32 {
    determinant_from(m, &adjugate(m))
}

/// General inverse by cofactor expansion
///
/// Fails when the determinant is (nearly) zero: the matrix collapses space
/// onto a plane, line or point and cannot be undone.
pub fn inverse(m: &Matrix4) -> MathResult<Matrix4> {
    let adj = adjugate(m);
    let det = MathError::check("matrix::inverse", determinant_from(m, &adj))?;
    let inv_det = 1.0 / det;
    Ok(Matrix4::from_cols_array(adj.map(|c| c * inv_det)))
}
