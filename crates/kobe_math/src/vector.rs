//! 2D, 3D and 4D vector types

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::{MathError, MathResult};

/// Operations shared by every vector type, used by the generic functions in
/// [`crate::math::vector`].
pub trait VectorSpace:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Neg<Output = Self>
{
    /// The zero vector
    const ZERO: Self;

    /// Sum of componentwise products
    fn dot(self, other: Self) -> f32;

    /// Euclidean norm
    #[inline]
    fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }
}

macro_rules! define_vector {
    ($(#[$meta:meta])* $name:ident, $n:literal, { $($field:ident),+ }) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
        pub struct $name {
            $(pub $field: f32,)+
        }

        impl $name {
            pub const ZERO: Self = Self { $($field: 0.0),+ };

            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Dot product
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Length squared (faster than length)
            #[inline]
            pub fn magnitude_squared(self) -> f32 {
                self.dot(self)
            }

            /// Euclidean length
            #[inline]
            pub fn magnitude(self) -> f32 {
                self.magnitude_squared().sqrt()
            }

            /// Unit-length copy of this vector
            ///
            /// Fails when the magnitude is below [`crate::EPSILON`] or any
            /// component is not finite.
            pub fn normalized(self) -> MathResult<Self> {
                let operation = concat!(stringify!($name), "::normalized");
                let mag = self.magnitude();
                if mag.is_infinite() {
                    // Squares overflowed: bring the largest component to 1 first
                    let largest = [$(self.$field.abs()),+].into_iter().fold(0.0, f32::max);
                    let scaled = self / MathError::check(operation, largest)?;
                    return Ok(scaled / MathError::check(operation, scaled.magnitude())?);
                }
                Ok(self / MathError::check(operation, mag)?)
            }

            /// Components as an array
            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                [$(self.$field),+]
            }
        }

        impl VectorSpace for $name {
            const ZERO: Self = $name::ZERO;

            #[inline]
            fn dot(self, other: Self) -> f32 {
                $name::dot(self, other)
            }

            #[inline]
            fn magnitude(self) -> f32 {
                $name::magnitude(self)
            }
        }

        impl From<[f32; $n]> for $name {
            #[inline]
            fn from(a: [f32; $n]) -> Self {
                let [$($field),+] = a;
                Self { $($field),+ }
            }
        }

        impl From<$name> for [f32; $n] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                $(self.$field += other.$field;)+
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                $(self.$field -= other.$field;)+
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: f32) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;
            #[inline]
            fn mul(self, v: $name) -> $name {
                v * self
            }
        }

        impl MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, scalar: f32) {
                $(self.$field *= scalar;)+
            }
        }

        impl Div<f32> for $name {
            type Output = Self;
            #[inline]
            fn div(self, scalar: f32) -> Self {
                Self { $($field: self.$field / scalar),+ }
            }
        }

        impl DivAssign<f32> for $name {
            #[inline]
            fn div_assign(&mut self, scalar: f32) {
                $(self.$field /= scalar;)+
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}

define_vector!(
    /// 2D vector with x, y components
    Vector2, 2, { x, y }
);

define_vector!(
    /// 3D vector with x, y, z components
    Vector3, 3, { x, y, z }
);

define_vector!(
    /// 4D vector with x, y, z, w components (homogeneous coordinates)
    Vector4, 4, { x, y, z, w }
);

impl Vector3 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Extend to a homogeneous vector with the given `w`
    #[inline]
    pub fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl Vector4 {
    /// Drop the `w` component
    #[inline]
    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}
