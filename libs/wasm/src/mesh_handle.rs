//! # Mesh Handle
//!
//! Snapshot of an edited mesh in GPU-ready buffers.

use mesh_edit::EditableMesh;
use wasm_bindgen::prelude::*;

/// Flat buffers copied out of an [`EditableMesh`].
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = editor.mesh();
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('color', new THREE.BufferAttribute(mesh.colors(), 4));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Positions as [x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle corners as [i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Colors as [r, g, b, a, ...]
    colors: Vec<f32>,
    normals: Option<Vec<f32>>,
    vertex_colored: bool,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the vertex colors as a Float32Array, four floats per vertex.
    pub fn colors(&self) -> Vec<f32> {
        self.colors.clone()
    }

    /// Returns the vertex normals, if the mesh carries them.
    pub fn normals(&self) -> Option<Vec<f32>> {
        self.normals.clone()
    }

    /// True once the mesh renders with per-vertex colors.
    #[wasm_bindgen(getter)]
    pub fn vertex_colored(&self) -> bool {
        self.vertex_colored
    }
}

impl MeshHandle {
    /// Copies the current buffers of `mesh`.
    pub fn from_mesh(mesh: &EditableMesh) -> Self {
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            colors: mesh.colors_f32(),
            normals: mesh.normals_f32(),
            vertex_colored: mesh.is_vertex_colored(),
        }
    }
}
