//! Quaternion type
//!
//! Components are stored as `(x, y, z, w)` with `w` as the scalar part. A unit
//! quaternion represents a rotation; `q` and `-q` represent the same one.

use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use crate::{to_radians, MathResult, Vector3};

/// Quaternion in Hamilton convention
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Pure quaternion `(v, 0)` holding a vector
    #[inline]
    pub const fn from_vector(v: Vector3) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w: 0.0 }
    }

    /// Rotation of `degrees` about `axis`
    ///
    /// The axis is normalized first and must not be (nearly) zero.
    pub fn from_axis_angle(degrees: f32, axis: Vector3) -> MathResult<Self> {
        let axis = axis.normalized()?;
        let half = to_radians(degrees) * 0.5;
        let (sin_h, cos_h) = half.sin_cos();
        Ok(Self::new(axis.x * sin_h, axis.y * sin_h, axis.z * sin_h, cos_h))
    }

    /// Vector part `(x, y, z)`
    #[inline]
    pub fn vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

/// Hamilton product `self * other`
///
/// Applied as a rotation, the result rotates by `other` first, then `self`.
impl Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, q: Self) -> Self {
        Self::new(
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y - self.x * q.z + self.y * q.w + self.z * q.x,
            self.w * q.z + self.x * q.y - self.y * q.x + self.z * q.w,
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
        )
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;
    #[inline]
    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}

impl MulAssign<f32> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self.w *= s;
    }
}

impl Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, q: Self) -> Self {
        Self::new(self.x + q.x, self.y + q.y, self.z + q.z, self.w + q.w)
    }
}

impl Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, q: Self) -> Self {
        Self::new(self.x - q.x, self.y - q.y, self.z - q.z, self.w - q.w)
    }
}

impl Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: Quaternion, b: Quaternion) -> bool {
        (a.x - b.x).abs() < EPSILON
            && (a.y - b.y).abs() < EPSILON
            && (a.z - b.z).abs() < EPSILON
            && (a.w - b.w).abs() < EPSILON
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_identity_product() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        assert_eq!(Quaternion::IDENTITY * q, q);
        assert_eq!(q * Quaternion::IDENTITY, q);
    }

    #[test]
    fn test_basis_products() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        // ij = k, ji = -k, ijk = -1
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * j * k, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_from_axis_angle() {
        let q = Quaternion::from_axis_angle(180.0, Vector3::new(0.0, 0.0, 2.0)).unwrap();
        assert!(approx_eq(q, Quaternion::new(0.0, 0.0, 1.0, 0.0)));
        assert!((q.magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_from_axis_angle_zero_axis() {
        assert!(Quaternion::from_axis_angle(90.0, Vector3::ZERO).is_err());
    }

    #[test]
    fn test_composition_adds_angles() {
        let q45 = Quaternion::from_axis_angle(45.0, Vector3::Y).unwrap();
        let q90 = Quaternion::from_axis_angle(90.0, Vector3::Y).unwrap();
        assert!(approx_eq(q45 * q45, q90));
    }

    #[test]
    fn test_scaling() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(2.0 * q, q * 2.0);
        q *= 0.5;
        assert_eq!(q, Quaternion::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(q + q - q, q);
    }
}
