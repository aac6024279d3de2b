//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;
use jinxgl_core::config::WindowConfig;

/// Integer context limits reported by [`App::log_gl_params`].
const GL_INT_PARAMS: [(u32, &str); 10] = [
    (glow::MAX_COMBINED_TEXTURE_IMAGE_UNITS, "GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS"),
    (glow::MAX_CUBE_MAP_TEXTURE_SIZE, "GL_MAX_CUBE_MAP_TEXTURE_SIZE"),
    (glow::MAX_DRAW_BUFFERS, "GL_MAX_DRAW_BUFFERS"),
    (glow::MAX_FRAGMENT_UNIFORM_COMPONENTS, "GL_MAX_FRAGMENT_UNIFORM_COMPONENTS"),
    (glow::MAX_TEXTURE_IMAGE_UNITS, "GL_MAX_TEXTURE_IMAGE_UNITS"),
    (glow::MAX_TEXTURE_SIZE, "GL_MAX_TEXTURE_SIZE"),
    // same enum as GL_MAX_VARYING_COMPONENTS
    (glow::MAX_VARYING_COMPONENTS, "GL_MAX_VARYING_FLOATS"),
    (glow::MAX_VERTEX_ATTRIBS, "GL_MAX_VERTEX_ATTRIBS"),
    (glow::MAX_VERTEX_TEXTURE_IMAGE_UNITS, "GL_MAX_VERTEX_TEXTURE_IMAGE_UNITS"),
    (glow::MAX_VERTEX_UNIFORM_COMPONENTS, "GL_MAX_VERTEX_UNIFORM_COMPONENTS"),
];

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Opens a window and a core profile OpenGL context as described by `config`.
    pub fn new(config: &WindowConfig) -> Result<Self, String> {
        log::info!("Starting SDL {}", sdl2::version::version());

        let sdl = sdl2::init().map_err(|e| format!("Could not start SDL2: {e}"))?;
        let video_subsystem = sdl.video()?;

        let [major, minor] = config.gl_version;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(major, minor);
        gl_attr.set_context_flags().forward_compatible().set();
        gl_attr.set_depth_size(24);
        if config.samples > 0 {
            gl_attr.set_multisample_buffers(1);
            gl_attr.set_multisample_samples(config.samples);
        }

        let mut window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .resizable()
            .allow_highdpi()
            .build()
            .map_err(|e| format!("Could not open window: {e}"))?;
        if config.fullscreen {
            window.set_fullscreen(sdl2::video::FullscreenType::Desktop)?;
        }

        let gl_context = window
            .gl_create_context()
            .map_err(|e| format!("Could not create OpenGL {major}.{minor} context: {e}"))?;
        window.gl_make_current(&gl_context)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        let interval = if config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {e}");
        }

        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }

    /// Size of the framebuffer in pixels. Larger than the window size on HiDPI displays.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    /// Writes the renderer, driver version and context limits to the log.
    pub fn log_gl_params(&self) {
        unsafe {
            log::info!("Renderer: {}", self.gl.get_parameter_string(glow::RENDERER));
            log::info!(
                "OpenGL version supported {}",
                self.gl.get_parameter_string(glow::VERSION)
            );
            log::info!(
                "GLSL version {}",
                self.gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION)
            );

            log::info!("GL Context Params:");
            for (param, name) in GL_INT_PARAMS {
                log::info!("{name} {}", self.gl.get_parameter_i32(param));
            }

            let mut dims = [0i32; 2];
            self.gl
                .get_parameter_i32_slice(glow::MAX_VIEWPORT_DIMS, &mut dims);
            log::info!("GL_MAX_VIEWPORT_DIMS {} {}", dims[0], dims[1]);
            log::info!("GL_STEREO {}", self.gl.get_parameter_i32(glow::STEREO));
            log::info!("-----------------------------");
        }
    }
}
