//! The orbit camera sample. Uses the cube shaders with an indexed cube that stays still while
//! the camera circles it.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use glow::HasContext;
use jinxgl_core::{
    Config,
    camera::OrbitCamera,
    geometry::{self, CUBE_CENTERING},
    maths::{self, aspect_ratio},
};

use crate::{
    abs::{Mesh, ShaderProgram},
    other::UpdateContext,
    shader_program,
};

pub struct Orbit {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    mesh: Mesh,
    camera: OrbitCamera,
    model: Mat4,
    projection: Mat4,
    time: f32,
    clear_color: [f32; 4],
}

impl Orbit {
    pub fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, String> {
        let program = shader_program!(cube, gl, config)?;
        let mesh = Mesh::new(gl, &program, &geometry::cube().indexed(), glow::TRIANGLES)?;
        log::debug!("Indexed cube uses {} indices", mesh.count());
        super::cube::enable_solid_state(gl);

        let camera = OrbitCamera::new(&config.camera, Vec3::ZERO);
        let window = &config.window;
        Ok(Self {
            gl: Arc::clone(gl),
            program,
            mesh,
            projection: camera.projection(aspect_ratio(window.width, window.height)),
            camera,
            model: maths::translate(Mat4::IDENTITY, CUBE_CENTERING),
            time: 0.0,
            clear_color: config.clear_color,
        })
    }
}

impl super::Sample for Orbit {
    fn resize(&mut self, width: u32, height: u32) {
        self.projection = self.camera.projection(aspect_ratio(width, height));
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.time = ctx.time;
        self.camera
            .apply(&ctx.keyboard.camera_input(), ctx.delta_time);
    }

    fn render(&mut self) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.program.use_program();
        self.program.set_uniform("view_mat", self.camera.view());
        self.program.set_uniform("projection_mat", self.projection);
        self.program.set_uniform("model_mat", self.model);
        self.program.set_uniform("current_time", self.time);
        self.program
            .set_uniform("light_position_world", super::cube::LIGHT_POSITION);

        self.mesh.draw();
    }
}
