//! Frame timing helpers.

/// How often [`FpsCounter`] reports, in seconds.
pub const FPS_REPORT_INTERVAL: f32 = 0.25;

/// Tracks the time between consecutive frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame at `now` seconds and returns the seconds since the last one.
    ///
    /// The first call returns `0.0`. A clock going backwards also yields `0.0`.
    pub fn tick(&mut self, now: f64) -> f64 {
        let elapsed = match self.previous {
            Some(previous) => (now - previous).max(0.0),
            None => 0.0,
        };
        self.previous = Some(now);
        elapsed
    }
}

/// Averages the frame rate over [`FPS_REPORT_INTERVAL`] windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct FpsCounter {
    accumulated: f32,
    frames: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one frame that took `dt` seconds. Returns the average rate once per interval.
    pub fn frame(&mut self, dt: f32) -> Option<f32> {
        self.accumulated += dt.max(0.0);
        self.frames += 1;
        if self.accumulated < FPS_REPORT_INTERVAL {
            return None;
        }

        let fps = self.frames as f32 / self.accumulated;
        self.accumulated = 0.0;
        self.frames = 0;
        Some(fps)
    }
}
