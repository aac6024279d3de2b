//! Hardcoded sample geometry and a CPU-side mesh container.

use std::collections::HashMap;

use glam::Vec3;

/// Translation that centres [`cube`] on the origin.
pub const CUBE_CENTERING: Vec3 = Vec3::new(-0.5, 0.5, 0.5);

/// Position plus texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Position plus normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LitVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Vertex types whose values can be compared bit for bit.
pub trait VertexBits: Copy {
    type Bits: Eq + std::hash::Hash;

    fn bits(&self) -> Self::Bits;
}

impl VertexBits for TexturedVertex {
    type Bits = [u32; 5];

    fn bits(&self) -> Self::Bits {
        let [x, y, z] = self.position;
        let [u, v] = self.uv;
        [x, y, z, u, v].map(f32::to_bits)
    }
}

impl VertexBits for LitVertex {
    type Bits = [u32; 6];

    fn bits(&self) -> Self::Bits {
        let [x, y, z] = self.position;
        let [nx, ny, nz] = self.normal;
        [x, y, z, nx, ny, nz].map(f32::to_bits)
    }
}

/// Vertex data ready for upload. Without indices the vertices are drawn in order.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData<V> {
    pub vertices: Vec<V>,
    pub indices: Option<Vec<u32>>,
}

impl<V> MeshData<V> {
    pub fn new(vertices: Vec<V>) -> Self {
        Self {
            vertices,
            indices: None,
        }
    }

    /// Number of vertices the draw call will process.
    pub fn element_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len(),
            None => self.vertices.len(),
        }
    }
}

impl<V: VertexBits> MeshData<V> {
    /// Collapses identical vertices and produces an index list that draws the same primitives.
    pub fn indexed(self) -> Self {
        let order: Vec<V> = match &self.indices {
            Some(indices) => indices.iter().map(|&i| self.vertices[i as usize]).collect(),
            None => self.vertices,
        };

        let mut seen: HashMap<V::Bits, u32> = HashMap::new();
        let mut vertices = Vec::new();
        let mut indices = Vec::with_capacity(order.len());
        for vertex in order {
            let index = *seen.entry(vertex.bits()).or_insert_with(|| {
                vertices.push(vertex);
                (vertices.len() - 1) as u32
            });
            indices.push(index);
        }

        Self {
            vertices,
            indices: Some(indices),
        }
    }
}

pub fn triangle() -> MeshData<TexturedVertex> {
    MeshData::new(vec![
        TexturedVertex {
            position: [0.0, 0.8, 0.0],
            uv: [0.5, 1.0],
        },
        TexturedVertex {
            position: [-0.8, -0.8, 0.0],
            uv: [0.0, 0.0],
        },
        TexturedVertex {
            position: [0.8, -0.8, 0.0],
            uv: [1.0, 0.0],
        },
    ])
}

const CUBE_FACES: [([[f32; 3]; 6], [f32; 3]); 6] = [
    // front
    (
        [
            [0.0, 0.0, 0.0],
            [0.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0],
            [1.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
        ],
        [0.0, 0.0, 1.0],
    ),
    // top
    (
        [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, -1.0],
            [1.0, 0.0, 0.0],
            [1.0, 0.0, -1.0],
            [0.0, 0.0, -1.0],
        ],
        [0.0, 1.0, 0.0],
    ),
    // left
    (
        [
            [0.0, 0.0, 0.0],
            [0.0, 0.0, -1.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, -1.0],
            [0.0, -1.0, -1.0],
            [0.0, -1.0, 0.0],
        ],
        [-1.0, 0.0, 0.0],
    ),
    // back
    (
        [
            [1.0, -1.0, -1.0],
            [0.0, -1.0, -1.0],
            [1.0, 0.0, -1.0],
            [0.0, -1.0, -1.0],
            [0.0, 0.0, -1.0],
            [1.0, 0.0, -1.0],
        ],
        [0.0, 0.0, -1.0],
    ),
    // bottom
    (
        [
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 0.0],
            [0.0, -1.0, -1.0],
            [1.0, -1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, -1.0, -1.0],
        ],
        [0.0, -1.0, 0.0],
    ),
    // right
    (
        [
            [1.0, -1.0, -1.0],
            [1.0, 0.0, -1.0],
            [1.0, -1.0, 0.0],
            [1.0, 0.0, -1.0],
            [1.0, 0.0, 0.0],
            [1.0, -1.0, 0.0],
        ],
        [1.0, 0.0, 0.0],
    ),
];

/// A unit cube spanning `(0, 0, 0)` to `(1, -1, -1)` with flat per-face normals.
///
/// Triangles are wound counter-clockwise when seen from outside the cube.
pub fn cube() -> MeshData<LitVertex> {
    let vertices = CUBE_FACES
        .iter()
        .flat_map(|(positions, normal)| {
            positions.iter().map(|&position| LitVertex {
                position,
                normal: *normal,
            })
        })
        .collect();
    MeshData::new(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_winding_agrees_with_normals() {
        let cube = cube();
        assert_eq!(cube.vertices.len(), 36);
        for tri in cube.vertices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| Vec3::from(v.position));
            let face = (b - a).cross(c - a);
            assert_eq!(face, Vec3::from(tri[0].normal));
            assert!(tri.iter().all(|v| v.normal == tri[0].normal));
        }
    }

    #[test]
    fn centering_moves_cube_onto_origin() {
        let cube = cube();
        let sum: Vec3 = cube
            .vertices
            .iter()
            .map(|v| Vec3::from(v.position) + CUBE_CENTERING)
            .sum();
        assert!((sum / cube.vertices.len() as f32).abs_diff_eq(Vec3::ZERO, 1e-6));
    }

    #[test]
    fn indexing_the_cube_keeps_four_corners_per_face() {
        let indexed = cube().indexed();
        assert_eq!(indexed.vertices.len(), 24);
        assert_eq!(indexed.element_count(), 36);

        let original = cube();
        let indices = indexed.indices.as_ref().unwrap();
        for (i, &index) in indices.iter().enumerate() {
            assert_eq!(indexed.vertices[index as usize], original.vertices[i]);
        }
    }

    #[test]
    fn indexing_twice_is_stable() {
        let once = cube().indexed();
        let twice = once.clone().indexed();
        assert_eq!(once, twice);
    }

    #[test]
    fn triangle_has_no_duplicates() {
        let tri = triangle();
        assert_eq!(tri.element_count(), 3);
        let indexed = tri.indexed();
        assert_eq!(indexed.vertices.len(), 3);
        assert_eq!(indexed.indices, Some(vec![0, 1, 2]));
    }
}
