//! Keyboard driven cameras.
//!
//! [`FreeCamera`] flies around the scene, turning with yaw and pitch. [`OrbitCamera`] circles a
//! fixed target point. Both update in place from a [`CameraInput`] and report whether they moved,
//! so callers only rebuild the view matrix when needed.

use glam::{Mat4, Vec3};

use crate::{
    config::CameraConfig,
    input::CameraInput,
    maths::{self, wrap_degrees},
};

pub const MAX_PITCH: f32 = 89.0;

/// A free-fly camera.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeCamera {
    pub position: Vec3,
    /// Degrees, always in `[0, 360)`.
    pub yaw: f32,
    /// Degrees, clamped to `[-MAX_PITCH, MAX_PITCH]`.
    pub pitch: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Units per second.
    pub speed: f32,
    /// Degrees per second, for both yaw and pitch.
    pub yaw_speed: f32,
}

impl FreeCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from(config.position),
            yaw: 0.0,
            pitch: 0.0,
            fov: config.fov,
            near: config.near,
            far: config.far,
            speed: config.speed,
            yaw_speed: config.yaw_speed,
        }
    }

    /// Direction of travel for "forward", flattened onto the XZ plane.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
    }

    pub fn right(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), 0.0, -yaw.sin())
    }

    pub fn view(&self) -> Mat4 {
        let translation = maths::translate(Mat4::IDENTITY, -self.position);
        maths::rotate_x_deg(maths::rotate_y_deg(translation, -self.yaw), -self.pitch)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        maths::projection(self.fov, aspect, self.near, self.far)
    }

    pub fn turn(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = wrap_degrees(self.yaw + d_yaw);
        self.pitch = (self.pitch + d_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Moves and turns the camera for one frame. Returns `true` if any key had an effect.
    pub fn apply(&mut self, input: &CameraInput, dt: f32) -> bool {
        if input.is_idle() || dt <= 0.0 {
            return false;
        }

        let step = self.speed * dt;
        let movement = self.forward() * input.forward_axis()
            + self.right() * input.strafe_axis()
            + Vec3::Y * input.vertical_axis();
        self.position += movement * step;

        let turn = self.yaw_speed * dt;
        self.turn(input.yaw_axis() * turn, input.pitch_axis() * turn);
        true
    }
}

/// A camera circling `target` at `distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Degrees per second.
    pub orbit_speed: f32,
    /// Units per second.
    pub zoom_speed: f32,
}

impl OrbitCamera {
    /// Places the camera on the +Z axis at the length of the configured start position.
    ///
    /// The zoom range is `[2 * near, far / 2]`, widened to a single point when the clip planes
    /// are too close together for that to be a valid range.
    pub fn new(config: &CameraConfig, target: Vec3) -> Self {
        let min_distance = config.near * 2.0;
        let max_distance = (config.far * 0.5).max(min_distance);
        let distance = Vec3::from(config.position)
            .distance(target)
            .clamp(min_distance, max_distance);
        Self {
            target,
            distance,
            yaw: 0.0,
            pitch: 0.0,
            fov: config.fov,
            near: config.near,
            far: config.far,
            min_distance,
            max_distance,
            orbit_speed: config.yaw_speed * 2.0,
            zoom_speed: config.speed,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let offset = Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos());
        self.target + offset * self.distance
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        maths::projection(self.fov, aspect, self.near, self.far)
    }

    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = wrap_degrees(self.yaw + d_yaw);
        self.pitch = (self.pitch + d_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Positive values move the camera towards the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(self.min_distance, self.max_distance);
    }

    pub fn apply(&mut self, input: &CameraInput, dt: f32) -> bool {
        if input.is_idle() || dt <= 0.0 {
            return false;
        }

        let turn = self.orbit_speed * dt;
        self.orbit(input.yaw_axis() * turn, input.pitch_axis() * turn);
        self.zoom(input.forward_axis() * self.zoom_speed * dt);
        true
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn camera() -> FreeCamera {
        FreeCamera::new(&CameraConfig::default())
    }

    #[test]
    fn offset_produces_expected_translation() {
        let cam = camera();
        let origin = cam.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(origin.abs_diff_eq(Vec4::new(0.0, 0.0, -3.0, 1.0), 1e-5));
    }

    #[test]
    fn turning_left_brings_left_side_into_view() {
        let mut cam = camera();
        cam.position = Vec3::ZERO;
        cam.turn(90.0, 0.0);
        let p = cam.view().transform_point3(Vec3::new(-1.0, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
        assert!(cam.forward().abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn pitching_up_brings_ceiling_into_view() {
        let mut cam = camera();
        cam.position = Vec3::ZERO;
        cam.pitch = 45.0;
        let above_ahead = Vec3::new(0.0, 1.0, -1.0);
        let p = cam.view().transform_point3(above_ahead);
        assert!(p.x.abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
        assert!(p.z < 0.0);
    }

    #[test]
    fn yaw_wraps_and_pitch_clamps() {
        let mut cam = camera();
        cam.turn(-30.0, 200.0);
        assert_eq!(cam.yaw, 330.0);
        assert_eq!(cam.pitch, MAX_PITCH);
        cam.turn(60.0, -400.0);
        assert!((cam.yaw - 30.0).abs() < 1e-4);
        assert_eq!(cam.pitch, -MAX_PITCH);
    }

    #[test]
    fn apply_moves_relative_to_heading() {
        let mut cam = camera();
        let input = CameraInput {
            forward: true,
            ..Default::default()
        };
        assert!(cam.apply(&input, 0.5));
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, 1.5), 1e-5));

        cam.yaw = 90.0;
        let strafe = CameraInput {
            right: true,
            up: true,
            ..Default::default()
        };
        assert!(cam.apply(&strafe, 1.0));
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 3.0, -1.5), 1e-5));
    }

    #[test]
    fn apply_turns_at_yaw_speed() {
        let mut cam = camera();
        let input = CameraInput {
            yaw_right: true,
            ..Default::default()
        };
        assert!(cam.apply(&input, 1.0));
        assert_eq!(cam.yaw, 330.0);
    }

    #[test]
    fn idle_input_does_not_move() {
        let mut cam = camera();
        let before = cam.clone();
        assert!(!cam.apply(&CameraInput::default(), 1.0));
        let forward = CameraInput {
            forward: true,
            ..Default::default()
        };
        assert!(!cam.apply(&forward, 0.0));
        assert_eq!(cam, before);
    }

    #[test]
    fn orbit_eye_starts_on_positive_z() {
        let cam = OrbitCamera::new(&CameraConfig::default(), Vec3::ZERO);
        assert!(cam.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), 1e-5));
        let target = cam.view().transform_point3(Vec3::ZERO);
        assert!(target.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), 1e-5));
    }

    #[test]
    fn orbit_circles_target() {
        let mut cam = OrbitCamera::new(&CameraConfig::default(), Vec3::new(1.0, 0.0, 0.0));
        cam.orbit(90.0, 0.0);
        assert!(cam.eye().abs_diff_eq(Vec3::new(1.0 + cam.distance, 0.0, 0.0), 1e-5));
        cam.orbit(0.0, 120.0);
        assert_eq!(cam.pitch, MAX_PITCH);
        assert!((cam.eye().distance(cam.target) - cam.distance).abs() < 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::new(&CameraConfig::default(), Vec3::ZERO);
        cam.zoom(1000.0);
        assert_eq!(cam.distance, cam.min_distance);
        cam.zoom(-1000.0);
        assert_eq!(cam.distance, cam.max_distance);
    }

    #[test]
    fn close_clip_planes_collapse_zoom_range() {
        let config = CameraConfig {
            near: 1.0,
            far: 3.0,
            ..Default::default()
        };
        let mut cam = OrbitCamera::new(&config, Vec3::ZERO);
        assert_eq!(cam.min_distance, 2.0);
        assert_eq!(cam.max_distance, 2.0);
        assert_eq!(cam.distance, 2.0);

        let input = CameraInput {
            yaw_left: true,
            forward: true,
            ..Default::default()
        };
        assert!(cam.apply(&input, 0.5));
        assert_eq!(cam.distance, 2.0);
    }

    #[test]
    fn start_distance_is_clamped_into_range() {
        let config = CameraConfig {
            position: [0.0, 0.0, 500.0],
            ..Default::default()
        };
        let cam = OrbitCamera::new(&config, Vec3::ZERO);
        assert_eq!(cam.distance, cam.max_distance);
    }
}
