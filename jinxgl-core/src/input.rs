//! Keyboard intent, decoupled from any windowing library.

/// What the user is asking the camera to do this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CameraInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

impl CameraInput {
    /// Returns `true` if no key is held.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    /// `-1`, `0` or `1` along the forward axis.
    pub fn forward_axis(&self) -> f32 {
        axis(self.forward, self.back)
    }

    pub fn strafe_axis(&self) -> f32 {
        axis(self.right, self.left)
    }

    pub fn vertical_axis(&self) -> f32 {
        axis(self.up, self.down)
    }

    /// Positive turns left (counter-clockwise seen from above).
    pub fn yaw_axis(&self) -> f32 {
        axis(self.yaw_left, self.yaw_right)
    }

    pub fn pitch_axis(&self) -> f32 {
        axis(self.pitch_up, self.pitch_down)
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    positive as i8 as f32 - negative as i8 as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let input = CameraInput {
            forward: true,
            back: true,
            yaw_left: true,
            ..Default::default()
        };
        assert_eq!(input.forward_axis(), 0.0);
        assert_eq!(input.yaw_axis(), 1.0);
        assert!(!input.is_idle());
        assert!(CameraInput::default().is_idle());
    }

    #[test]
    fn axes() {
        let input = CameraInput {
            left: true,
            down: true,
            pitch_down: true,
            ..Default::default()
        };
        assert_eq!(input.strafe_axis(), -1.0);
        assert_eq!(input.vertical_axis(), -1.0);
        assert_eq!(input.pitch_axis(), -1.0);
    }
}
