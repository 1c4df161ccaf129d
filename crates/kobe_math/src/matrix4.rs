//! 4x4 matrix type
//!
//! Elements are addressed by a single index 0..16 in column-major order:
//! indices 0..4 are the first column, 12..16 the last (translation) column.
//! Vectors are columns, so `a * b` applies `b` first, then `a`.

use std::ops::{Index, IndexMut, Mul, MulAssign};

use bytemuck::{Pod, Zeroable};

use crate::{Vector3, Vector4};

/// 4x4 column-major matrix
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Matrix4 {
    m: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Build from 16 elements in column-major order
    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Build from four columns
    pub fn from_cols(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        Self {
            m: [
                c0.x, c0.y, c0.z, c0.w,
                c1.x, c1.y, c1.z, c1.w,
                c2.x, c2.y, c2.z, c2.w,
                c3.x, c3.y, c3.z, c3.w,
            ],
        }
    }

    #[inline]
    pub fn to_cols_array(self) -> [f32; 16] {
        self.m
    }

    /// Nested `[column][row]` layout, as shader uniform structs expect it
    pub fn to_cols_array_2d(self) -> [[f32; 4]; 4] {
        let m = self.m;
        [
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.m
    }

    /// Column `col` (0..4) as a vector
    #[inline]
    pub fn column(&self, col: usize) -> Vector4 {
        let i = col * 4;
        Vector4::new(self.m[i], self.m[i + 1], self.m[i + 2], self.m[i + 3])
    }

    /// Row `row` (0..4) as a vector
    #[inline]
    pub fn row(&self, row: usize) -> Vector4 {
        Vector4::new(self.m[row], self.m[row + 4], self.m[row + 8], self.m[row + 12])
    }

    /// Transform a point (`w = 1`); the result is not divided by `w`
    #[inline]
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        (*self * p.extend(1.0)).xyz()
    }

    /// Transform a direction (`w = 0`), ignoring translation
    #[inline]
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        (*self * v.extend(0.0)).xyz()
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.m[i]
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, b: Self) -> Self {
        let a = &self.m;
        let mut result = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                result[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b.m[col * 4 + k]).sum();
            }
        }
        Self { m: result }
    }
}

impl MulAssign for Matrix4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    #[inline]
    fn mul(self, v: Vector4) -> Vector4 {
        let m = &self.m;
        Vector4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix4 {
        Matrix4::from_cols_array([
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        ])
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
        assert_eq!(Matrix4::default()[0], 1.0);
        assert_eq!(Matrix4::default()[1], 0.0);
        assert_eq!(Matrix4::default()[15], 1.0);
    }

    #[test]
    fn test_column_major_indexing() {
        let m = sample();
        assert_eq!(m.column(0), Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.column(3), Vector4::new(13.0, 14.0, 15.0, 16.0));
        assert_eq!(m.row(0), Vector4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(m[6], 7.0);
    }

    #[test]
    fn test_index_mut() {
        let mut m = Matrix4::IDENTITY;
        m[12] = 3.0;
        assert_eq!(m.transform_point(Vector3::ZERO), Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(m.transform_vector(Vector3::X), Vector3::X);
    }

    #[test]
    fn test_mul_identity() {
        let m = sample();
        assert_eq!(Matrix4::IDENTITY * m, m);
        assert_eq!(m * Matrix4::IDENTITY, m);
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        // a: translate x by 1, b: scale by 2
        let mut a = Matrix4::IDENTITY;
        a[12] = 1.0;
        let mut b = Matrix4::IDENTITY;
        b[0] = 2.0;
        b[5] = 2.0;
        b[10] = 2.0;

        let p = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!((a * b).transform_point(p), Vector3::new(3.0, 0.0, 0.0));
        assert_eq!((b * a).transform_point(p), Vector3::new(4.0, 0.0, 0.0));

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn test_mul_vector() {
        let v = sample() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(v, Vector4::new(14.0, 16.0, 18.0, 20.0));
    }

    #[test]
    fn test_cols_array_2d() {
        let nested = sample().to_cols_array_2d();
        assert_eq!(nested[1], [5.0, 6.0, 7.0, 8.0]);
        let c = Matrix4::from_cols(
            sample().column(0),
            sample().column(1),
            sample().column(2),
            sample().column(3),
        );
        assert_eq!(c, sample());
    }
}
