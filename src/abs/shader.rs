//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! This module also provides the [`Uniform`] trait for setting uniform variables in shader
//! programs.

use std::{cell::RefCell, collections::HashMap, path::Path, sync::Arc};

use glam::{IVec3, Mat4, Vec2, Vec3, Vec4};
use glow::HasContext;

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, String> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(|e| e.to_string())?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(log);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }

    /// Reads and compiles the shader source at `path`.
    pub fn from_file(
        gl: &Arc<glow::Context>,
        shader_type: u32,
        path: &Path,
    ) -> Result<Self, String> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to open file {}: {e}", path.display()))?;
        Self::new(gl, shader_type, &source).map_err(|info_log| {
            log::error!("Compile failure in shader {}:\n{info_log}", path.display());
            format!("Compile failure in shader {}:\n{info_log}", path.display())
        })
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents a uniform variable in a shader program.
pub trait Uniform {
    /// Uploads the value to the uniform at `location` of the currently bound program.
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for bool {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_1_i32(Some(location), *self as i32);
        }
    }
}

impl Uniform for f32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_1_f32(Some(location), *self);
        }
    }
}

impl Uniform for i32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_1_i32(Some(location), *self);
        }
    }
}

impl Uniform for Vec2 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_2_f32(Some(location), self.x, self.y);
        }
    }
}

impl Uniform for Vec3 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_3_f32(Some(location), self.x, self.y, self.z);
        }
    }
}

impl Uniform for IVec3 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_3_i32(Some(location), self.x, self.y, self.z);
        }
    }
}

impl Uniform for Vec4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_4_f32(Some(location), self.x, self.y, self.z, self.w);
        }
    }
}

impl Uniform for Mat4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref());
        }
    }
}

/// Uploads a `uniform vec3 name[N]` array.
impl<const N: usize> Uniform for [Vec3; N] {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        let data = flatten_vec3(self);
        unsafe {
            gl.uniform_3_f32_slice(Some(location), &data);
        }
    }
}

fn flatten_vec3(values: &[Vec3]) -> Vec<f32> {
    values.iter().flat_map(|v| v.to_array()).collect()
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
    /// Uniform locations by name. `None` records a name the linker optimised out.
    uniforms: RefCell<HashMap<String, Option<glow::UniformLocation>>>,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        if shaders.is_empty() {
            return Err("No shaders were provided to create the program".to_string());
        }

        unsafe {
            let program = gl.create_program().map_err(|e| e.to_string())?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            if !gl.get_program_link_status(program) {
                let info_log = gl.get_program_info_log(program);
                gl.delete_program(program);
                log::error!("Program linking failure:\n{info_log}");
                return Err(format!("Program linking failure: {info_log}"));
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
                uniforms: RefCell::new(HashMap::new()),
            })
        }
    }

    /// Compiles a vertex and a fragment shader from files and links them.
    pub fn from_files(gl: &Arc<glow::Context>, vert: &Path, frag: &Path) -> Result<Self, String> {
        let vert = Shader::from_file(gl, glow::VERTEX_SHADER, vert)?;
        let frag = Shader::from_file(gl, glow::FRAGMENT_SHADER, frag)?;
        Self::new(gl, &[&vert, &frag])
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Unbinds whatever program is current.
    pub fn stop_using(&self) {
        unsafe {
            self.gl.use_program(None);
        }
    }

    /// Location of the vertex attribute `name`.
    pub fn attrib(&self, name: &str) -> Result<u32, String> {
        unsafe { self.gl.get_attrib_location(self.id, name) }
            .ok_or_else(|| format!("Program attribute not found: {name}"))
    }

    /// Location of the uniform `name`, looked up once and cached.
    pub fn uniform_location(&self, name: &str) -> Option<glow::UniformLocation> {
        if let Some(location) = self.uniforms.borrow().get(name) {
            return location.clone();
        }

        let location = unsafe { self.gl.get_uniform_location(self.id, name) };
        if location.is_none() {
            log::warn!("Program uniform not found: {name}");
        }
        self.uniforms
            .borrow_mut()
            .insert(name.to_string(), location.clone());
        location
    }

    /// Sets a uniform variable in the shader program. The program must be in use.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        if let Some(location) = self.uniform_location(name) {
            value.set_uniform(&self.gl, &location);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
