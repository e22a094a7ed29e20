//! # Editable Mesh
//!
//! The vertex buffer of one editing session: positions, per-vertex colors and
//! the triangle list, plus pass-through normals and UVs.
//!
//! The buffer is cloned from an immutable [`SourceMesh`] and only ever grows.
//! Colors are kept at vertex cardinality at all times.

use std::fmt;

use config::constants::{EditConfig, NormalPolicy, MAX_TRIANGLES, MAX_VERTICES};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{EditError, EditResult};
use crate::math::middle_point;

/// An ordered triple of vertex indices drawn from the triangle list.
///
/// Winding matters: the outward normal follows the counter-clockwise order
/// of the corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face(pub [u32; 3]);

impl Face {
    /// Creates a face from three corner indices.
    pub const fn new(v0: u32, v1: u32, v2: u32) -> Self {
        Self([v0, v1, v2])
    }

    /// Builds a face from an index slice, rejecting anything but a triple.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_edit::Face;
    ///
    /// assert_eq!(Face::from_slice(&[0, 2, 1]).unwrap(), Face::new(0, 2, 1));
    /// assert!(Face::from_slice(&[0, 1]).is_err());
    /// ```
    pub fn from_slice(indices: &[u32]) -> EditResult<Self> {
        match *indices {
            [v0, v1, v2] => Ok(Self([v0, v1, v2])),
            _ => Err(EditError::degenerate(format!(
                "expected 3 vertex indices, got {}",
                indices.len()
            ))),
        }
    }

    /// Returns the corner indices.
    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        self.0
    }

    /// Returns true if all three corners are distinct vertex slots.
    #[inline]
    pub fn is_distinct(&self) -> bool {
        let [a, b, c] = self.0;
        a != b && b != c && a != c
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({a}, {b}, {c})")
    }
}

impl From<[u32; 3]> for Face {
    fn from(indices: [u32; 3]) -> Self {
        Self(indices)
    }
}

/// Immutable mesh supplied by the host, cloned at the start of a session.
///
/// The source is never mutated; it may be shared with other consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMesh {
    /// Vertex positions in local space.
    pub vertices: Vec<DVec3>,
    /// Triangle corner indices.
    pub triangles: Vec<[u32; 3]>,
    /// Optional per-vertex normals.
    pub normals: Option<Vec<DVec3>>,
    /// Optional per-vertex texture coordinates.
    pub uvs: Option<Vec<DVec2>>,
}

impl SourceMesh {
    /// Creates a source mesh from positions and triangles only.
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            normals: None,
            uvs: None,
        }
    }

    /// Builds a source mesh from flat GPU-style buffers.
    ///
    /// `positions` is `[x, y, z, x, y, z, ...]` and `indices` is
    /// `[i0, i1, i2, ...]`; both lengths must be multiples of 3.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_edit::SourceMesh;
    ///
    /// let source = SourceMesh::from_flat(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2]).unwrap();
    /// assert_eq!(source.vertices.len(), 3);
    /// assert_eq!(source.triangles, vec![[0, 1, 2]]);
    /// ```
    pub fn from_flat(positions: &[f32], indices: &[u32]) -> EditResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(EditError::precondition(format!(
                "position buffer length {} is not a multiple of 3",
                positions.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(EditError::precondition(format!(
                "index buffer length {} is not a multiple of 3",
                indices.len()
            )));
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
            .collect();
        let triangles = indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();

        Ok(Self::new(vertices, triangles))
    }
}

/// Mutable copy of a mesh owned by one editing session.
///
/// # Example
///
/// ```rust
/// use config::constants::EditConfig;
/// use glam::DVec3;
/// use mesh_edit::{EditableMesh, SourceMesh};
///
/// let source = SourceMesh::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// let mut mesh = EditableMesh::from_source(&source, EditConfig::default()).unwrap();
/// mesh.set_position(0, DVec3::Z).unwrap();
/// assert_eq!(mesh.vertex(0).unwrap(), DVec3::Z);
/// assert_eq!(source.vertices[0], DVec3::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct EditableMesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    colors: Vec<[f32; 4]>,
    normals: Option<Vec<DVec3>>,
    uvs: Option<Vec<DVec2>>,
    vertex_colored: bool,
    normals_dirty: bool,
    config: EditConfig,
}

impl EditableMesh {
    /// Deep-copies `source` into a new editable buffer.
    ///
    /// Colors start at `config.default_color`. Normals and UVs are copied
    /// unchanged when present.
    ///
    /// # Errors
    ///
    /// - `EmptySource` if the source has no vertices
    /// - `TooManyVertices` if the source exceeds the vertex limit
    /// - `InvalidIndex` if a triangle references a missing vertex
    /// - `PreconditionViolation` if normals or UVs are not at vertex cardinality
    pub fn from_source(source: &SourceMesh, config: EditConfig) -> EditResult<Self> {
        let vertex_count = source.vertices.len();
        if vertex_count == 0 {
            return Err(EditError::EmptySource);
        }
        if vertex_count > MAX_VERTICES {
            return Err(EditError::TooManyVertices {
                count: vertex_count,
                max: MAX_VERTICES,
            });
        }
        if source.triangles.len() > MAX_TRIANGLES {
            return Err(EditError::precondition(format!(
                "source has {} triangles (max: {MAX_TRIANGLES})",
                source.triangles.len()
            )));
        }
        if let Some(&index) = source
            .triangles
            .iter()
            .flatten()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(EditError::InvalidIndex {
                index,
                vertex_count,
            });
        }
        if source.normals.as_ref().is_some_and(|n| n.len() != vertex_count) {
            return Err(EditError::precondition("normal count differs from vertex count"));
        }
        if source.uvs.as_ref().is_some_and(|uv| uv.len() != vertex_count) {
            return Err(EditError::precondition("uv count differs from vertex count"));
        }

        Ok(Self {
            vertices: source.vertices.clone(),
            triangles: source.triangles.clone(),
            colors: vec![config.default_color; vertex_count],
            normals: source.normals.clone(),
            uvs: source.uvs.clone(),
            vertex_colored: false,
            normals_dirty: false,
            config,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the length of the flat index list (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex colors (always one per vertex).
    #[inline]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Returns the vertex normals, if any.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns the texture coordinates, if any.
    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Returns the configuration this mesh was cloned with.
    #[inline]
    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    /// Returns true once vertex-color mode has been enabled.
    #[inline]
    pub fn is_vertex_colored(&self) -> bool {
        self.vertex_colored
    }

    /// Switches the mesh into vertex-color mode so it can be painted.
    pub fn enable_vertex_colors(&mut self) {
        self.vertex_colored = true;
    }

    /// Returns true if geometry changed since normals were last computed.
    #[inline]
    pub fn normals_dirty(&self) -> bool {
        self.normals_dirty
    }

    /// Checks that `index` addresses an existing vertex.
    pub fn check_index(&self, index: u32) -> EditResult<()> {
        if (index as usize) < self.vertices.len() {
            Ok(())
        } else {
            Err(EditError::InvalidIndex {
                index,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Checks that every corner of `face` addresses an existing vertex.
    pub fn check_face(&self, face: Face) -> EditResult<()> {
        face.indices().into_iter().try_for_each(|i| self.check_index(i))
    }

    /// Returns the position of a vertex.
    pub fn vertex(&self, index: u32) -> EditResult<DVec3> {
        self.check_index(index)?;
        Ok(self.vertices[index as usize])
    }

    /// Returns the color of a vertex.
    pub fn color(&self, index: u32) -> EditResult<[f32; 4]> {
        self.check_index(index)?;
        Ok(self.colors[index as usize])
    }

    /// Returns the triangle at `triangle_index` as a face.
    pub fn face_at(&self, triangle_index: usize) -> Option<Face> {
        self.triangles.get(triangle_index).copied().map(Face)
    }

    /// Iterates the triangle list as faces, in order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.triangles.iter().copied().map(Face)
    }

    /// Finds the first triangle whose corners equal `face` in that exact order.
    pub fn find_triangle(&self, face: Face) -> Option<usize> {
        self.triangles.iter().position(|tri| *tri == face.0)
    }

    /// Checks that `face` is in range and currently in the triangle list.
    ///
    /// Returns the index of its first occurrence.
    pub fn check_face_present(&self, face: Face) -> EditResult<usize> {
        self.check_face(face)?;
        self.find_triangle(face).ok_or(EditError::InvalidFace { face })
    }

    /// Returns the corner positions of `face`.
    pub fn face_positions(&self, face: Face) -> EditResult<[DVec3; 3]> {
        self.check_face(face)?;
        Ok(face.0.map(|i| self.vertices[i as usize]))
    }

    /// Returns the middle point of `face`, the anchor of a face drag.
    pub fn face_center(&self, face: Face) -> EditResult<DVec3> {
        Ok(middle_point(&self.face_positions(face)?))
    }

    /// Replaces the position of one vertex.
    ///
    /// Normals are only flagged as stale; see [`EditableMesh::apply_normal_policy`].
    pub fn set_position(&mut self, index: u32, position: DVec3) -> EditResult<()> {
        self.check_index(index)?;
        self.vertices[index as usize] = position;
        self.normals_dirty = true;
        Ok(())
    }

    /// Replaces the color of one vertex.
    pub fn set_color(&mut self, index: u32, color: [f32; 4]) -> EditResult<()> {
        self.check_index(index)?;
        self.colors[index as usize] = color;
        Ok(())
    }

    /// Appends vertices and returns the index of the first new slot.
    ///
    /// Colors grow with the default color, UVs with `(0, 0)`, and normals
    /// (when present) with zero vectors until the next recomputation.
    pub fn append_vertices(&mut self, positions: &[DVec3]) -> EditResult<u32> {
        let start = self.vertices.len();
        let count = start + positions.len();
        if count > MAX_VERTICES {
            return Err(EditError::TooManyVertices {
                count,
                max: MAX_VERTICES,
            });
        }

        self.vertices.extend_from_slice(positions);
        self.colors.resize(count, self.config.default_color);
        if let Some(uvs) = &mut self.uvs {
            uvs.resize(count, DVec2::ZERO);
        }
        if let Some(normals) = &mut self.normals {
            normals.resize(count, DVec3::ZERO);
        }
        self.normals_dirty = true;

        Ok(start as u32)
    }

    /// Appends triangles and returns the index of the first new triangle.
    pub fn append_triangles(&mut self, triangles: &[[u32; 3]]) -> EditResult<usize> {
        let start = self.triangles.len();
        if start + triangles.len() > MAX_TRIANGLES {
            return Err(EditError::precondition(format!(
                "mesh would exceed {MAX_TRIANGLES} triangles"
            )));
        }
        for tri in triangles {
            self.check_face(Face(*tri))?;
        }

        self.triangles.extend_from_slice(triangles);
        self.normals_dirty = true;
        Ok(start)
    }

    /// Overwrites the triangle at `triangle_index` in place.
    pub fn overwrite_triangle_at(&mut self, triangle_index: usize, triangle: [u32; 3]) -> EditResult<()> {
        self.check_face(Face(triangle))?;
        let slot = self
            .triangles
            .get_mut(triangle_index)
            .ok_or_else(|| EditError::precondition(format!("no triangle at {triangle_index}")))?;
        *slot = triangle;
        self.normals_dirty = true;
        Ok(())
    }

    /// Recomputes area-weighted vertex normals and clears the dirty flag.
    pub fn recompute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.try_normalize().unwrap_or(DVec3::ZERO);
        }

        self.normals = Some(normals);
        self.normals_dirty = false;
    }

    /// Recomputes normals now if the policy asks for it.
    ///
    /// Called once at the end of each geometry edit, so a weld group move
    /// recomputes at most once.
    pub fn apply_normal_policy(&mut self) {
        if self.normals_dirty && self.config.normal_policy == NormalPolicy::Immediate {
            self.recompute_normals();
        }
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports colors as flattened [r, g, b, a, ...].
    pub fn colors_f32(&self) -> Vec<f32> {
        self.colors.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}

#[cfg(test)]
mod tests;
