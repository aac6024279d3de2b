//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing mesh data on the GPU side.
//! Vertices should implement the [`Vertex`] trait.

use std::sync::Arc;

use glow::HasContext;
use jinxgl_core::geometry::{LitVertex, MeshData, TexturedVertex};

use super::ShaderProgram;

/// One `f32` vector attribute inside a vertex.
pub struct VertexAttribute {
    /// Name of the `in` variable in the vertex shader.
    pub name: &'static str,
    pub components: i32,
    pub normalized: bool,
}

/// Trait that describes the memory layout of a vertex.
///
/// Attributes are tightly packed `f32` vectors in declaration order.
pub trait Vertex: Copy {
    const ATTRIBUTES: &'static [VertexAttribute];
}

impl Vertex for TexturedVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute {
            name: "vert",
            components: 3,
            normalized: false,
        },
        VertexAttribute {
            name: "vertTexCoord",
            components: 2,
            normalized: true,
        },
    ];
}

impl Vertex for LitVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute {
            name: "vertex_position",
            components: 3,
            normalized: false,
        },
        VertexAttribute {
            name: "vertex_normal",
            components: 3,
            normalized: false,
        },
    ];
}

/// Reinterprets a slice of plain data as bytes for upload.
fn as_bytes<T: Copy>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data)) }
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    count: i32,
}

impl Mesh {
    /// Uploads `data` and wires its attributes to the matching inputs of `program`.
    pub fn new<V: Vertex>(
        gl: &Arc<glow::Context>,
        program: &ShaderProgram,
        data: &MeshData<V>,
        draw_mode: u32,
    ) -> Result<Self, String> {
        let stride = std::mem::size_of::<V>() as i32;
        let declared: i32 = V::ATTRIBUTES.iter().map(|a| a.components * 4).sum();
        if declared != stride {
            return Err(format!(
                "Vertex attributes cover {declared} bytes but the vertex is {stride} bytes"
            ));
        }

        let locations = V::ATTRIBUTES
            .iter()
            .map(|attribute| program.attrib(attribute.name))
            .collect::<Result<Vec<_>, _>>()?;

        unsafe {
            let vao = gl.create_vertex_array()?;
            let vbo = gl.create_buffer()?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                as_bytes(&data.vertices),
                glow::STATIC_DRAW,
            );

            let ebo = match &data.indices {
                Some(indices) => {
                    let ebo = gl.create_buffer()?;
                    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                    gl.buffer_data_u8_slice(
                        glow::ELEMENT_ARRAY_BUFFER,
                        as_bytes(indices),
                        glow::STATIC_DRAW,
                    );
                    Some(ebo)
                }
                None => None,
            };

            let mut offset = 0;
            for (attribute, location) in V::ATTRIBUTES.iter().zip(locations) {
                gl.enable_vertex_attrib_array(location);
                gl.vertex_attrib_pointer_f32(
                    location,
                    attribute.components,
                    glow::FLOAT,
                    attribute.normalized,
                    stride,
                    offset,
                );
                offset += attribute.components * 4;
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            if ebo.is_some() {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                vbo,
                ebo,
                count: data.element_count() as i32,
            })
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl
                    .draw_elements(self.draw_mode, self.count, glow::UNSIGNED_INT, 0);
            } else {
                self.gl.draw_arrays(self.draw_mode, 0, self.count);
            }
            self.gl.bind_vertex_array(None);
        }
    }

    /// Number of vertices processed per draw call.
    pub fn count(&self) -> usize {
        self.count as usize
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stride<V: Vertex>() -> i32 {
        V::ATTRIBUTES.iter().map(|a| a.components * 4).sum()
    }

    #[test]
    fn attribute_layouts_match_vertex_sizes() {
        assert_eq!(stride::<TexturedVertex>() as usize, std::mem::size_of::<TexturedVertex>());
        assert_eq!(stride::<LitVertex>() as usize, std::mem::size_of::<LitVertex>());
    }

    #[test]
    fn bytes_cover_whole_slice() {
        let data = [1.0f32, 2.0, 3.0];
        let bytes = as_bytes(&data);
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[..4], &1.0f32.to_ne_bytes());
    }
}
