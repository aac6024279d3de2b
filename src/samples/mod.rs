//! Module providing the [`Sample`] trait and all sample implementations.
//!
//! Each sample owns its render state: shader program, meshes, textures and camera. The run loop
//! in `main` only forwards events, frame times and resizes.

use std::sync::Arc;

use jinxgl_core::Config;

use crate::other::UpdateContext;

pub mod cube;
pub mod orbit;
pub mod triangle;

/// The Sample trait defines the common interface for all samples.
pub trait Sample {
    /// Handles an event that the run loop did not consume.
    fn handle_event(&mut self, _event: &sdl2::event::Event) {}

    /// Called once after creation and again whenever the drawable size changes.
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Advances the sample by one frame.
    fn update(&mut self, _ctx: &UpdateContext) {}

    /// Draws the sample into the current framebuffer.
    fn render(&mut self);
}

/// Which sample to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SampleKind {
    /// A textured triangle.
    Triangle,
    /// A spinning cube seen through a free-fly camera.
    Cube,
    /// A cube seen through a camera orbiting it.
    Orbit,
}

impl SampleKind {
    /// Loads the sample's resources and uploads its geometry.
    pub fn build(
        self,
        gl: &Arc<glow::Context>,
        config: &Config,
    ) -> Result<Box<dyn Sample>, String> {
        log::info!("Loading sample {self:?}");
        Ok(match self {
            SampleKind::Triangle => Box::new(triangle::Triangle::new(gl, config)?),
            SampleKind::Cube => Box::new(cube::Cube::new(gl, config)?),
            SampleKind::Orbit => Box::new(orbit::Orbit::new(gl, config)?),
        })
    }
}
