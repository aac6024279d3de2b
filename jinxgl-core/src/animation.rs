use glam::Mat4;

use crate::maths::{rotate_x_deg, rotate_y_deg};

/// Advances the wobbling spin of a model by `elapsed` seconds at absolute time `now`.
///
/// The X rate follows `sin(now)` and the Y rate follows `cos(now)`, so the model rocks back and
/// forth instead of spinning at a constant speed.
pub fn spin(model: Mat4, elapsed: f32, now: f32) -> Mat4 {
    let model = rotate_x_deg(model, elapsed * 45.0 * now.sin());
    rotate_y_deg(model, elapsed * 120.0 * now.cos())
}
