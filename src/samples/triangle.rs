//! The textured triangle sample.

use std::sync::Arc;

use glow::HasContext;
use jinxgl_core::{Config, geometry};

use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    shader_program,
};

pub const TEXTURE_FILE: &str = "hazard.png";

pub struct Triangle {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    texture: Texture,
    mesh: Mesh,
    clear_color: [f32; 4],
}

impl Triangle {
    pub fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, String> {
        let program = shader_program!(triangle, gl, config)?;
        let texture = Texture::from_file(gl, &config.resource_path(TEXTURE_FILE))?;
        let mesh = Mesh::new(gl, &program, &geometry::triangle(), glow::TRIANGLES)?;

        unsafe {
            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::CULL_FACE);
        }

        Ok(Self {
            gl: Arc::clone(gl),
            program,
            texture,
            mesh,
            clear_color: config.clear_color,
        })
    }
}

impl super::Sample for Triangle {
    fn render(&mut self) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.program.use_program();
        self.texture.bind(0);
        self.program.set_uniform("tex", 0i32);

        self.mesh.draw();

        self.texture.unbind(0);
        self.program.stop_using();
    }
}
