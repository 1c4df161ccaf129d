//! First-person camera
//!
//! The camera keeps yaw and pitch in degrees and derives its basis vectors
//! from them. Yaw is measured in the XZ plane from +X towards +Z, so a yaw of
//! -90 degrees looks down -Z. All matrices come from [`kobe_math::math`].

use kobe_math::math::{convert, matrix, quaternion, vector};
use kobe_math::{to_radians, Euler, MathResult, Matrix4, Quaternion, Vector3};

use crate::config::CameraConfig;

/// First-person camera with a yaw/pitch orientation
#[derive(Clone, Debug)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vector3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    ortho_near: f32,
    ortho_far: f32,
    yaw: f32,
    pitch: f32,
    pitch_limit: f32,
    world_up: Vector3,
    forward: Vector3,
    right: Vector3,
    up: Vector3,
}

impl Camera {
    /// Create a camera from configuration
    ///
    /// Fails when the world-up vector is zero or parallel to the initial
    /// view direction.
    pub fn from_config(config: &CameraConfig) -> MathResult<Self> {
        let mut camera = Self {
            position: Vector3::from(config.position),
            fov: config.fov,
            near: config.near,
            far: config.far,
            ortho_near: config.ortho_near,
            ortho_far: config.ortho_far,
            yaw: config.yaw,
            pitch: config.pitch.clamp(-config.pitch_limit, config.pitch_limit),
            pitch_limit: config.pitch_limit,
            world_up: Vector3::from(config.world_up).normalized()?,
            forward: Vector3::new(0.0, 0.0, -1.0),
            right: Vector3::X,
            up: Vector3::Y,
        };
        camera.update_vectors()?;
        Ok(camera)
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn forward(&self) -> Vector3 {
        self.forward
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    /// Recompute forward, right and up from yaw and pitch
    pub fn update_vectors(&mut self) -> MathResult<()> {
        let (sy, cy) = to_radians(self.yaw).sin_cos();
        let (sp, cp) = to_radians(self.pitch).sin_cos();

        self.forward = Vector3::new(cy * cp, sp, sy * cp).normalized()?;
        self.right = vector::cross(self.forward, self.world_up).normalized()?;
        self.up = vector::cross(self.right, self.forward).normalized()?;
        Ok(())
    }

    /// Turn by the given yaw and pitch deltas in degrees
    ///
    /// Pitch is clamped to the configured limit.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) -> MathResult<()> {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-self.pitch_limit, self.pitch_limit);
        self.update_vectors()
    }

    /// Orientation of a camera with this yaw and pitch
    ///
    /// Rotating -Z by the result gives the camera's forward vector.
    pub fn orientation_for(yaw: f32, pitch: f32) -> Quaternion {
        convert::euler_to_quaternion(Euler::new(pitch, -(yaw + 90.0), 0.0))
    }

    /// Current orientation as a quaternion
    pub fn orientation(&self) -> Quaternion {
        Self::orientation_for(self.yaw, self.pitch)
    }

    /// Point the camera along a quaternion orientation
    ///
    /// Any roll in `q` is dropped, since the camera only tracks yaw and pitch.
    pub fn set_orientation(&mut self, q: Quaternion) -> MathResult<()> {
        let e = convert::quaternion_to_euler(q)?;
        self.yaw = -e.yaw - 90.0;
        self.pitch = e.pitch.clamp(-self.pitch_limit, self.pitch_limit);
        self.update_vectors()
    }

    /// Orientation `t` of the way along the shorter arc from `from` to `to`
    pub fn interpolate_orientation(from: Quaternion, to: Quaternion, t: f32) -> MathResult<Quaternion> {
        // q and -q are the same rotation
        let to = if quaternion::dot(from, to) < 0.0 { -to } else { to };
        quaternion::slerp(from, to, t)
    }

    /// Turn `t` of the way from the current orientation towards `target`
    pub fn turn_towards(&mut self, target: Quaternion, t: f32) -> MathResult<()> {
        let q = Self::interpolate_orientation(self.orientation(), target, t)?;
        self.set_orientation(q)
    }

    /// View matrix
    pub fn view(&self) -> MathResult<Matrix4> {
        matrix::look_at(self.position, self.position + self.forward, self.up)
    }

    /// Perspective projection for the given aspect ratio
    pub fn perspective(&self, aspect: f32) -> MathResult<Matrix4> {
        matrix::perspective(self.fov, aspect, self.near, self.far)
    }

    /// Orthographic projection covering a `width` x `height` pixel area
    pub fn orthographic(&self, width: u32, height: u32) -> MathResult<Matrix4> {
        matrix::orthographic(
            0.0,
            width as f32,
            0.0,
            height as f32,
            self.ortho_near,
            self.ortho_far,
        )
    }

    /// NDC to pixel transform for a `width` x `height` viewport
    pub fn viewport(&self, width: u32, height: u32) -> Matrix4 {
        matrix::viewport_ndc(width, height)
    }

    /// Map a pixel position back into the orthographic projection's space
    ///
    /// Pixel `(0, 0)` is the top-left corner.
    pub fn screen_to_world(&self, x: f32, y: f32, width: u32, height: u32) -> MathResult<Vector3> {
        let to_ndc = matrix::inverse(&self.viewport(width, height))?;
        let unproject = matrix::un_ortho(&self.orthographic(width, height)?)?;
        let ndc = to_ndc.transform_point(Vector3::new(x, y, 0.0));
        Ok(unproject.transform_point(ndc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn vec_approx_eq(a: Vector3, b: Vector3) -> bool {
        (a - b).magnitude() < EPSILON
    }

    fn camera() -> Camera {
        Camera::from_config(&CameraConfig::default()).unwrap()
    }

    #[test]
    fn test_default_looks_down_negative_z() {
        let cam = camera();
        assert!(vec_approx_eq(cam.forward(), Vector3::new(0.0, 0.0, -1.0)));
        assert!(vec_approx_eq(cam.right(), Vector3::X));
        assert!(vec_approx_eq(cam.up(), Vector3::Y));
    }

    #[test]
    fn test_rotate_clamps_pitch() {
        let mut cam = camera();
        cam.rotate(0.0, 200.0).unwrap();
        assert_eq!(cam.pitch(), 89.0);
        cam.rotate(0.0, -500.0).unwrap();
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn test_rotate_yaw_turns_right() {
        let mut cam = camera();
        cam.rotate(90.0, 0.0).unwrap();
        assert!(vec_approx_eq(cam.forward(), Vector3::X));
    }

    #[test]
    fn test_orientation_rotates_negative_z_onto_forward() {
        let mut cam = camera();
        cam.rotate(37.0, 25.0).unwrap();
        let fwd = quaternion::rotate(cam.orientation(), Vector3::new(0.0, 0.0, -1.0)).unwrap();
        assert!(vec_approx_eq(fwd, cam.forward()), "{:?} vs {:?}", fwd, cam.forward());
    }

    #[test]
    fn test_set_orientation_round_trip() {
        let mut cam = camera();
        let q = Camera::orientation_for(-30.0, 20.0);
        cam.set_orientation(q).unwrap();
        assert!((cam.pitch() - 20.0).abs() < 1e-3);
        let expected = Camera::orientation_for(-30.0, 20.0);
        let fwd = quaternion::rotate(expected, Vector3::new(0.0, 0.0, -1.0)).unwrap();
        assert!(vec_approx_eq(cam.forward(), fwd));
    }

    #[test]
    fn test_interpolate_orientation_endpoints() {
        let from = Camera::orientation_for(-90.0, 0.0);
        let to = Camera::orientation_for(0.0, 30.0);
        let start = Camera::interpolate_orientation(from, to, 0.0).unwrap();
        let end = Camera::interpolate_orientation(from, to, 1.0).unwrap();
        assert!((start - from).magnitude() < EPSILON);
        assert!((end - to).magnitude() < EPSILON);
    }

    #[test]
    fn test_turn_towards_reaches_target() {
        let mut cam = camera();
        let target = Camera::orientation_for(0.0, 30.0);
        cam.turn_towards(target, 1.0).unwrap();
        assert!((cam.yaw() - 0.0).abs() < 1e-2, "yaw {}", cam.yaw());
        assert!((cam.pitch() - 30.0).abs() < 1e-2, "pitch {}", cam.pitch());
    }

    #[test]
    fn test_turn_towards_halfway_stays_between() {
        let mut cam = camera();
        cam.turn_towards(Camera::orientation_for(0.0, 0.0), 0.5).unwrap();
        assert!((cam.yaw() + 45.0).abs() < 1e-2, "yaw {}", cam.yaw());
        assert!(cam.pitch().abs() < 1e-3);
    }

    #[test]
    fn test_turn_towards_takes_short_way_round() {
        // -90 to 170 is 260 degrees one way and 100 the other
        let mut cam = camera();
        cam.turn_towards(Camera::orientation_for(170.0, 0.0), 0.5).unwrap();
        assert!((cam.yaw() + 140.0).abs() < 1e-2, "yaw {}", cam.yaw());
    }

    #[test]
    fn test_turn_towards_full_turn_stays_put() {
        // Yaw + 360 is the negated quaternion of the current orientation
        let mut cam = camera();
        let before = cam.forward();
        cam.turn_towards(Camera::orientation_for(270.0, 0.0), 0.5).unwrap();
        assert!(vec_approx_eq(cam.forward(), before), "{:?} vs {:?}", cam.forward(), before);
    }

    #[test]
    fn test_view_moves_camera_to_origin() {
        let cam = camera();
        let view = cam.view().unwrap();
        assert!(vec_approx_eq(view.transform_point(cam.position), Vector3::ZERO));
        let ahead = cam.position + cam.forward() * 3.0;
        assert!(vec_approx_eq(view.transform_point(ahead), Vector3::new(0.0, 0.0, -3.0)));
    }

    #[test]
    fn test_screen_to_world_corners() {
        let cam = camera();
        // Top-left pixel is the top of the orthographic box
        let top_left = cam.screen_to_world(0.0, 0.0, 800, 600).unwrap();
        let bottom_right = cam.screen_to_world(800.0, 600.0, 800, 600).unwrap();
        assert!((top_left.x - 0.0).abs() < 1e-2 && (top_left.y - 600.0).abs() < 1e-2);
        assert!((bottom_right.x - 800.0).abs() < 1e-2 && bottom_right.y.abs() < 1e-2);
    }

    #[test]
    fn test_flat_orthographic_box_is_rejected() {
        let config = CameraConfig {
            ortho_near: -1.0,
            ortho_far: -1.0,
            ..CameraConfig::default()
        };
        let cam = Camera::from_config(&config).unwrap();
        assert!(cam.orthographic(800, 600).is_err());
    }

    #[test]
    fn test_zero_world_up_is_rejected() {
        let config = CameraConfig {
            world_up: [0.0, 0.0, 0.0],
            ..CameraConfig::default()
        };
        assert!(Camera::from_config(&config).is_err());
    }
}
