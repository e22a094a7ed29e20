//! # Face Extrusion
//!
//! Turns one triangle into an offset cap joined to its old boundary by three
//! side quads:
//!
//! ```text
//!        n2                 new corners: old + normal * depth
//!       /  \
//!     n0----n1              cap:   (n0, n1, n2) replaces (o0, o1, o2)
//!      |    |               sides: one quad per old edge, 2 triangles each
//!     o0----o1
//! ```
//!
//! The extruded mesh has three more vertices and six more triangles.

use config::constants::{
    EXTRUDE_NEW_VERTICES, EXTRUDE_SIDE_TRIANGLES, MAX_TRIANGLES, MAX_VERTICES,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EditError, EditResult};
use crate::math::{cross, normalize};
use crate::mesh::{EditableMesh, Face};

/// Outcome of a successful extrusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrudeResult {
    /// Indices of the three appended vertices, in input-face order.
    pub new_vertices: [u32; 3],
    /// Triangle-list index of the cap (the overwritten original triangle).
    pub cap_triangle: usize,
    /// Triangle-list index of the first side triangle.
    pub first_side_triangle: usize,
    /// The input face; it no longer exists in the mesh and must be dropped
    /// from any selection.
    pub stale_face: Face,
}

impl ExtrudeResult {
    /// The cap face, wound like the input face.
    pub fn cap(&self) -> Face {
        Face(self.new_vertices)
    }
}

/// Direction in which `face` is pushed out, scaled by `depth`.
///
/// The cross product is taken relative to the first corner, so this is the
/// geometric face normal for counter-clockwise winding.
pub fn extrusion_offset(corners: [DVec3; 3], depth: f64) -> EditResult<DVec3> {
    let [v0, v1, v2] = corners;
    normalize(cross(v1, v2, v0))
        .map(|normal| normal * depth)
        .ok_or_else(|| EditError::degenerate("face has zero area"))
}

/// Writes one triangle at `offset` of `triangles` with the given corners.
fn create_triangle(triangles: &mut [[u32; 3]], offset: usize, corners: [u32; 3]) {
    triangles[offset] = corners;
}

/// Writes the two triangles of the quad `(a, b, c, d)` starting at `offset`:
/// `(a, b, c)` and `(d, c, b)`.
fn create_quad(triangles: &mut [[u32; 3]], offset: usize, [a, b, c, d]: [u32; 4]) {
    create_triangle(triangles, offset, [a, b, c]);
    create_triangle(triangles, offset + 1, [d, c, b]);
}

/// The six side triangles joining old edge `(o_i, o_j)` to new edge
/// `(n_i, n_j)` for every edge of the face.
fn side_triangles(old: [u32; 3], new: [u32; 3]) -> [[u32; 3]; EXTRUDE_SIDE_TRIANGLES] {
    let [o0, o1, o2] = old;
    let [n0, n1, n2] = new;

    let mut sides = [[0; 3]; EXTRUDE_SIDE_TRIANGLES];
    create_quad(&mut sides, 0, [o1, o2, n1, n2]);
    create_quad(&mut sides, 2, [o2, o0, n2, n0]);
    create_quad(&mut sides, 4, [o0, o1, n0, n1]);
    sides
}

/// Extrudes `face` along its normal by the mesh's configured depth.
///
/// # Errors
///
/// - `InvalidIndex` if a corner is out of range (stale face)
/// - `DegenerateFace` if corners repeat or the face has zero area
/// - `InvalidFace` if no triangle matches `face` in exact winding order
/// - `TooManyVertices` if the mesh is at its vertex limit
/// - `PreconditionViolation` if the mesh is at its triangle limit
///
/// The mesh is untouched when an error is returned.
///
/// # Example
///
/// ```rust
/// use config::constants::EditConfig;
/// use glam::DVec3;
/// use mesh_edit::{extrude, EditableMesh, Face, SourceMesh};
///
/// let source = SourceMesh::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// let mut mesh = EditableMesh::from_source(&source, EditConfig::default()).unwrap();
/// let result = extrude(&mut mesh, Face::new(0, 1, 2)).unwrap();
/// assert_eq!(result.new_vertices, [3, 4, 5]);
/// assert_eq!(mesh.vertex(3).unwrap(), DVec3::new(0.0, 0.0, 0.5));
/// assert_eq!(mesh.triangle_count(), 7);
/// ```
pub fn extrude(mesh: &mut EditableMesh, face: Face) -> EditResult<ExtrudeResult> {
    mesh.check_face(face)?;
    if !face.is_distinct() {
        return Err(EditError::degenerate(format!("face {face} repeats a vertex")));
    }
    let cap_triangle = mesh
        .find_triangle(face)
        .ok_or(EditError::InvalidFace { face })?;

    let vertex_count = mesh.vertex_count() + EXTRUDE_NEW_VERTICES;
    if vertex_count > MAX_VERTICES {
        return Err(EditError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }
    if mesh.triangle_count() + EXTRUDE_SIDE_TRIANGLES > MAX_TRIANGLES {
        return Err(EditError::precondition(format!(
            "mesh would exceed {MAX_TRIANGLES} triangles"
        )));
    }

    let corners = mesh.face_positions(face)?;
    let offset = extrusion_offset(corners, mesh.config().extrude_depth)?;
    debug!(%face, ?offset, "extrusion offset");

    let first_new = mesh.append_vertices(&corners.map(|corner| corner + offset))?;
    let new_vertices = [first_new, first_new + 1, first_new + 2];
    debug_assert_eq!(mesh.vertex_count() as u32, first_new + EXTRUDE_NEW_VERTICES as u32);

    // Limits and indices were checked above, so none of the writes below fail.
    mesh.overwrite_triangle_at(cap_triangle, new_vertices)?;
    let first_side_triangle = mesh.append_triangles(&side_triangles(face.0, new_vertices))?;

    mesh.apply_normal_policy();

    info!(
        %face,
        cap = %Face(new_vertices),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "extruded face"
    );

    Ok(ExtrudeResult {
        new_vertices,
        cap_triangle,
        first_side_triangle,
        stale_face: face,
    })
}

#[cfg(test)]
mod tests;
