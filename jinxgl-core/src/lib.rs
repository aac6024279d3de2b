//! The windowing-independent half of JiNXGL: matrix helpers, cameras, sample geometry, frame
//! timing and configuration. Nothing in here touches OpenGL, so all of it is testable without a
//! context.

pub mod animation;
pub mod camera;
pub mod config;
pub mod geometry;
pub mod input;
pub mod maths;
pub mod timing;

pub use config::Config;
