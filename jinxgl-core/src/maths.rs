//! Matrix helpers on top of [`glam`].
//!
//! Rotations and translations are applied in world space: the new transform is multiplied on the
//! left of the given matrix, so `rotate_y_deg(rotate_x_deg(m, a), b)` rotates around X first and
//! then around Y.

use glam::{Mat4, Vec3, Vec4};

pub const ONE_DEG_IN_RAD: f32 = std::f32::consts::PI / 180.0;

/// Builds a right-handed OpenGL perspective projection from a vertical field of view in degrees.
pub fn projection(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let fov = fov_deg * ONE_DEG_IN_RAD;
    let range = (fov * 0.5).tan() * near;
    let sx = (2.0 * near) / (range * aspect + range * aspect);
    let sy = near / range;
    let sz = -(far + near) / (far - near);
    let pz = -(2.0 * far * near) / (far - near);

    Mat4::from_cols(
        Vec4::new(sx, 0.0, 0.0, 0.0),
        Vec4::new(0.0, sy, 0.0, 0.0),
        Vec4::new(0.0, 0.0, sz, -1.0),
        Vec4::new(0.0, 0.0, pz, 0.0),
    )
}

pub fn translate(m: Mat4, v: Vec3) -> Mat4 {
    Mat4::from_translation(v) * m
}

pub fn rotate_x_deg(m: Mat4, deg: f32) -> Mat4 {
    Mat4::from_rotation_x(deg * ONE_DEG_IN_RAD) * m
}

pub fn rotate_y_deg(m: Mat4, deg: f32) -> Mat4 {
    Mat4::from_rotation_y(deg * ONE_DEG_IN_RAD) * m
}

pub fn rotate_z_deg(m: Mat4, deg: f32) -> Mat4 {
    Mat4::from_rotation_z(deg * ONE_DEG_IN_RAD) * m
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Width over height. A minimised window reports a zero height, which is treated as 1.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        assert!(a.abs_diff_eq(b, 1e-5), "{a:?} != {b:?}");
    }

    #[test]
    fn projection_at_90_degrees_has_unit_scale() {
        let p = projection(90.0, 1.0, 0.1, 100.0);
        assert!((p.x_axis.x - 1.0).abs() < 1e-5);
        assert!((p.y_axis.y - 1.0).abs() < 1e-5);
        assert_eq!(p.z_axis.w, -1.0);
        assert_eq!(p.w_axis.w, 0.0);
    }

    #[test]
    fn projection_matches_glam() {
        let ours = projection(67.0, 640.0 / 480.0, 0.1, 100.0);
        let glam = Mat4::perspective_rh_gl(67.0f32.to_radians(), 640.0 / 480.0, 0.1, 100.0);
        assert_mat_eq(ours, glam);
    }

    #[test]
    fn projection_maps_near_and_far_planes() {
        let p = projection(67.0, 1.5, 0.1, 100.0);
        let near = p * Vec4::new(0.0, 0.0, -0.1, 1.0);
        let far = p * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w + 1.0).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn rotations_are_applied_in_world_space() {
        let m = translate(Mat4::IDENTITY, Vec3::new(1.0, 0.0, 0.0));
        let r = rotate_y_deg(m, 90.0);
        let p = r.transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
    }

    #[test]
    fn rotation_order() {
        let xy = rotate_y_deg(rotate_x_deg(Mat4::IDENTITY, 90.0), 90.0);
        let expected = Mat4::from_rotation_y(90f32.to_radians()) * Mat4::from_rotation_x(90f32.to_radians());
        assert_mat_eq(xy, expected);

        let z = rotate_z_deg(Mat4::IDENTITY, 90.0);
        assert!(z.transform_vector3(Vec3::X).abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn wraps_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-30.0), 330.0);
        assert_eq!(wrap_degrees(-720.0), 0.0);
        assert!(wrap_degrees(-1e-9) < 360.0);
    }

    #[test]
    fn aspect_ratio_ignores_zero_height() {
        assert_eq!(aspect_ratio(640, 480), 640.0 / 480.0);
        assert_eq!(aspect_ratio(640, 0), 640.0);
    }
}
