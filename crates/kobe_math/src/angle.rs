//! Angle units and conversions

use std::f32::consts::PI;

/// Multiply degrees by this to get radians
pub const DEGREES_TO_RADIANS: f32 = PI / 180.0;

/// Multiply radians by this to get degrees
pub const RADIANS_TO_DEGREES: f32 = 180.0 / PI;

/// Unit an angle-returning function reports its result in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Express an angle given in radians in this unit
    #[inline]
    pub fn express(self, radians: f32) -> f32 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians * RADIANS_TO_DEGREES,
        }
    }
}

#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * DEGREES_TO_RADIANS
}

#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * RADIANS_TO_DEGREES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for deg in [0.0f32, 45.0, 90.0, 180.0, -90.0, 270.0] {
            assert!((to_degrees(to_radians(deg)) - deg).abs() < 1e-4);
        }
    }

    #[test]
    fn test_unit_express() {
        assert_eq!(AngleUnit::Radians.express(PI), PI);
        assert!((AngleUnit::Degrees.express(PI) - 180.0).abs() < 1e-4);
    }
}
