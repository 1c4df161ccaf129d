//! Euler angles

use bytemuck::{Pod, Zeroable};

/// Rotation as three angles in degrees
///
/// Pitch turns about X, yaw about Y and roll about Z. Conversions in
/// [`crate::math::convert`] apply them in yaw, roll, pitch order.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Euler {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Euler {
    pub const ZERO: Self = Self { pitch: 0.0, yaw: 0.0, roll: 0.0 };

    #[inline]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}
