//! # Weld-Aware Mutations
//!
//! Every position or color edit resolves the weld group of the touched
//! vertex first, so duplicated corners move and paint as one.
//!
//! These functions hold no state: all side effects land in the mesh (and,
//! for extrusion, the selection) passed in.

use glam::DVec3;
use tracing::debug;

use crate::error::{EditError, EditResult};
use crate::mesh::{EditableMesh, Face};
use crate::ops::extrude::{extrude, ExtrudeResult};
use crate::selection::SelectionState;
use crate::weld::{WeldIndex, WeldMap};

fn require_vertex_colors(mesh: &EditableMesh) -> EditResult<()> {
    if mesh.is_vertex_colored() {
        Ok(())
    } else {
        Err(EditError::precondition("mesh is not in vertex-color mode"))
    }
}

/// Collects the distinct weld groups of the face corners, in corner order.
fn face_groups(mesh: &EditableMesh, face: Face) -> EditResult<Vec<u32>> {
    mesh.check_face_present(face)?;
    let map = WeldMap::of(mesh);

    let mut seen = Vec::with_capacity(3);
    let mut members = Vec::new();
    for corner in face.indices() {
        let id = map.group_id(corner);
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        members.extend_from_slice(map.group(corner)?);
    }
    Ok(members)
}

/// Snaps the weld group of `index` to `position`.
///
/// Every member gets the same absolute position. Returns the moved indices.
///
/// # Example
///
/// ```rust
/// use config::constants::EditConfig;
/// use glam::DVec3;
/// use mesh_edit::{move_vertex, EditableMesh, SourceMesh};
///
/// let source = SourceMesh::new(vec![DVec3::ZERO, DVec3::X, DVec3::ZERO], vec![[0, 1, 2]]);
/// let mut mesh = EditableMesh::from_source(&source, EditConfig::default()).unwrap();
/// let moved = move_vertex(&mut mesh, 2, DVec3::ONE).unwrap();
/// assert_eq!(moved, vec![0, 2]);
/// assert_eq!(mesh.vertex(0).unwrap(), DVec3::ONE);
/// ```
pub fn move_vertex(mesh: &mut EditableMesh, index: u32, position: DVec3) -> EditResult<Vec<u32>> {
    let group = WeldIndex::of(mesh).same_vertices(index)?;
    for &member in &group {
        mesh.set_position(member, position)?;
    }
    mesh.apply_normal_policy();

    debug!(index, welded = group.len(), ?position, "moved vertex");
    Ok(group)
}

/// Drags `face` so its middle point lands on `new_center`.
///
/// The weld groups of all three corners are translated by the same offset,
/// each group exactly once. Returns the applied offset.
///
/// Fails with [`EditError::InvalidFace`] unless `face` is a current triangle.
pub fn move_face(mesh: &mut EditableMesh, face: Face, new_center: DVec3) -> EditResult<DVec3> {
    let members = face_groups(mesh, face)?;
    let offset = new_center - mesh.face_center(face)?;

    for member in members.iter().copied() {
        let position = mesh.vertex(member)?;
        mesh.set_position(member, position + offset)?;
    }
    mesh.apply_normal_policy();

    debug!(%face, moved = members.len(), ?offset, "moved face");
    Ok(offset)
}

/// Paints the weld group of `index`. Returns the painted indices.
///
/// Requires vertex-color mode.
pub fn recolor_vertex(mesh: &mut EditableMesh, index: u32, color: [f32; 4]) -> EditResult<Vec<u32>> {
    require_vertex_colors(mesh)?;
    let group = WeldIndex::of(mesh).same_vertices(index)?;
    for &member in &group {
        mesh.set_color(member, color)?;
    }
    Ok(group)
}

/// Paints the weld groups of every corner of `face`. Returns the painted
/// indices.
///
/// Requires vertex-color mode and a face present in the triangle list.
pub fn recolor_face(mesh: &mut EditableMesh, face: Face, color: [f32; 4]) -> EditResult<Vec<u32>> {
    require_vertex_colors(mesh)?;
    let members = face_groups(mesh, face)?;
    for &member in &members {
        mesh.set_color(member, color)?;
    }
    Ok(members)
}

/// Paints every vertex. Returns the number of painted vertices.
///
/// Requires vertex-color mode.
pub fn recolor_whole_mesh(mesh: &mut EditableMesh, color: [f32; 4]) -> EditResult<usize> {
    require_vertex_colors(mesh)?;
    let count = mesh.vertex_count();
    for index in 0..count as u32 {
        mesh.set_color(index, color)?;
    }
    Ok(count)
}

/// Extrudes the selected face and clears the selection.
///
/// The selection is only cleared on success; a failed extrusion keeps it so
/// the host can report against it.
pub fn extrude_selected_face(
    mesh: &mut EditableMesh,
    selection: &mut SelectionState,
) -> EditResult<ExtrudeResult> {
    let face = selection
        .selected_face()
        .ok_or_else(|| EditError::precondition("no face selected"))?;
    let result = extrude(mesh, face)?;
    selection.clear();
    Ok(result)
}
