//! The spinning cube sample, explored with a free-fly camera.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use glow::HasContext;
use jinxgl_core::{
    Config,
    animation::spin,
    camera::FreeCamera,
    geometry::{self, CUBE_CENTERING},
    maths::{self, aspect_ratio},
};

use crate::{
    abs::{Mesh, ShaderProgram},
    other::UpdateContext,
    shader_program,
};

/// World space position of the point light used by the cube shaders.
pub(super) const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 2.0);

/// Depth testing and back-face culling with counter-clockwise front faces.
pub(super) fn enable_solid_state(gl: &glow::Context) {
    unsafe {
        gl.enable(glow::DEPTH_TEST);
        gl.depth_func(glow::LESS);
        gl.enable(glow::CULL_FACE);
        gl.cull_face(glow::BACK);
        gl.front_face(glow::CCW);
    }
}

pub struct Cube {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    mesh: Mesh,
    camera: FreeCamera,
    model: Mat4,
    view: Mat4,
    projection: Mat4,
    time: f32,
    clear_color: [f32; 4],
}

impl Cube {
    pub fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, String> {
        let program = shader_program!(cube, gl, config)?;
        let mesh = Mesh::new(gl, &program, &geometry::cube(), glow::TRIANGLES)?;
        enable_solid_state(gl);

        let camera = FreeCamera::new(&config.camera);
        let window = &config.window;
        Ok(Self {
            gl: Arc::clone(gl),
            program,
            mesh,
            view: camera.view(),
            projection: camera.projection(aspect_ratio(window.width, window.height)),
            camera,
            model: maths::translate(Mat4::IDENTITY, CUBE_CENTERING),
            time: 0.0,
            clear_color: config.clear_color,
        })
    }
}

impl super::Sample for Cube {
    fn resize(&mut self, width: u32, height: u32) {
        self.projection = self.camera.projection(aspect_ratio(width, height));
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.time = ctx.time;
        self.model = spin(self.model, ctx.delta_time, ctx.time);

        if self
            .camera
            .apply(&ctx.keyboard.camera_input(), ctx.delta_time)
        {
            self.view = self.camera.view();
            log::trace!(
                "Camera at {} yaw {:.1} pitch {:.1}",
                self.camera.position,
                self.camera.yaw,
                self.camera.pitch
            );
        }
    }

    fn render(&mut self) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.program.use_program();
        self.program.set_uniform("view_mat", self.view);
        self.program.set_uniform("projection_mat", self.projection);
        self.program.set_uniform("model_mat", self.model);
        self.program.set_uniform("current_time", self.time);
        self.program.set_uniform("light_position_world", LIGHT_POSITION);

        self.mesh.draw();
    }
}
