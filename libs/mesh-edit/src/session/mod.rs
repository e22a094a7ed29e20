//! # Editing Session
//!
//! Owns the edited mesh, the selection and the render-sync sink for one
//! object. Host input handlers call into the session once per event; each
//! call runs to completion and notifies the sink.

use config::constants::EditConfig;
use glam::DVec3;
use tracing::{debug, warn};

use crate::error::{EditError, EditResult};
use crate::mesh::{EditableMesh, Face, SourceMesh};
use crate::ops::{self, ExtrudeResult};
use crate::selection::{EditMode, Selection, SelectionState};
use crate::sync::{ChangeSet, RenderSync};

fn log_rejected<T>(operation: &str, result: EditResult<T>) -> EditResult<T> {
    if let Err(err) = &result {
        warn!(operation, %err, "edit rejected");
    }
    result
}

/// One mesh being edited.
///
/// # Example
///
/// ```rust
/// use config::constants::EditConfig;
/// use glam::DVec3;
/// use mesh_edit::{ChangeSet, EditMode, EditSession, SourceMesh};
///
/// let source = SourceMesh::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// let mut session = EditSession::new(&source, EditConfig::default(), ChangeSet::default()).unwrap();
/// session.set_mode(EditMode::Vertex);
/// session.pick_vertex(1).unwrap();
/// session.drag_selected_vertex(DVec3::new(2.0, 0.0, 0.0)).unwrap();
/// assert!(session.sync_mut().take().geometry);
/// ```
#[derive(Debug)]
pub struct EditSession<S: RenderSync = ChangeSet> {
    mesh: EditableMesh,
    selection: SelectionState,
    sync: S,
}

impl<S: RenderSync> EditSession<S> {
    /// Clones `source` and starts in object mode.
    pub fn new(source: &SourceMesh, config: EditConfig, sync: S) -> EditResult<Self> {
        let mesh = EditableMesh::from_source(source, config)?;
        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "editing session started"
        );
        Ok(Self {
            mesh,
            selection: SelectionState::new(),
            sync,
        })
    }

    /// The edited mesh.
    pub fn mesh(&self) -> &EditableMesh {
        &self.mesh
    }

    /// Mode and selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Current edit mode.
    pub fn mode(&self) -> EditMode {
        self.selection.mode()
    }

    /// The render-sync sink.
    pub fn sync(&self) -> &S {
        &self.sync
    }

    /// Mutable access to the sink, e.g. to poll a [`ChangeSet`].
    pub fn sync_mut(&mut self) -> &mut S {
        &mut self.sync
    }

    /// Ends the session, returning the edited mesh.
    pub fn into_mesh(self) -> EditableMesh {
        self.mesh
    }

    /// Switches the edited object. The new mesh is cloned from `source`; the
    /// selection is dropped and the session returns to object mode.
    ///
    /// On error the current mesh and selection are kept.
    pub fn retarget(&mut self, source: &SourceMesh) -> EditResult<()> {
        let mesh = log_rejected(
            "retarget",
            EditableMesh::from_source(source, *self.mesh.config()),
        )?;
        self.mesh = mesh;
        if let Some(tool) = self.selection.reset() {
            self.sync.tool_changed(tool);
        }
        self.sync.geometry_changed();
        self.sync.colors_changed();
        self.sync.selection_changed();
        Ok(())
    }

    /// Changes the edit mode, clearing the selection on a real change.
    pub fn set_mode(&mut self, mode: EditMode) {
        if let Some(tool) = self.selection.set_mode(mode) {
            debug!(?mode, "edit mode changed");
            self.sync.tool_changed(tool);
            self.sync.selection_changed();
        }
    }

    /// Selects a vertex reported by the pick resolver.
    pub fn pick_vertex(&mut self, index: u32) -> EditResult<()> {
        let result = self
            .mesh
            .check_index(index)
            .and_then(|()| self.selection.pick_vertex(index));
        log_rejected("pick_vertex", result)?;
        self.sync.selection_changed();
        Ok(())
    }

    /// Selects a face reported by the pick resolver.
    pub fn pick_face(&mut self, face: Face) -> EditResult<()> {
        let result = self
            .mesh
            .check_face_present(face)
            .and_then(|_| self.selection.pick_face(face));
        log_rejected("pick_face", result)?;
        self.sync.selection_changed();
        Ok(())
    }

    /// Drops the selection.
    pub fn clear_selection(&mut self) {
        if self.selection.selection() != Selection::None {
            self.selection.clear();
            self.sync.selection_changed();
        }
    }

    fn selected_vertex(&self) -> EditResult<u32> {
        let index = self
            .selection
            .selected_vertex()
            .ok_or_else(|| EditError::precondition("no vertex selected"))?;
        self.mesh.check_index(index)?;
        Ok(index)
    }

    fn selected_face(&self) -> EditResult<Face> {
        let face = self
            .selection
            .selected_face()
            .ok_or_else(|| EditError::precondition("no face selected"))?;
        self.mesh.check_face_present(face)?;
        Ok(face)
    }

    /// Moves the selected vertex (and its weld group) to `position`, given in
    /// local space.
    pub fn drag_selected_vertex(&mut self, position: DVec3) -> EditResult<Vec<u32>> {
        let result = self
            .selected_vertex()
            .and_then(|index| ops::move_vertex(&mut self.mesh, index, position));
        let moved = log_rejected("drag_selected_vertex", result)?;
        self.sync.geometry_changed();
        Ok(moved)
    }

    /// Moves the selected face so its middle point lands on `new_center`,
    /// given in local space.
    pub fn drag_selected_face(&mut self, new_center: DVec3) -> EditResult<DVec3> {
        let result = self
            .selected_face()
            .and_then(|face| ops::move_face(&mut self.mesh, face, new_center));
        let offset = log_rejected("drag_selected_face", result)?;
        self.sync.geometry_changed();
        Ok(offset)
    }

    /// Switches the mesh into vertex-color mode.
    pub fn enable_vertex_colors(&mut self) {
        if !self.mesh.is_vertex_colored() {
            self.mesh.enable_vertex_colors();
            self.sync.colors_changed();
        }
    }

    /// Paints according to the current mode: the selected vertex's weld
    /// group, the selected face's corner groups, or the whole mesh.
    ///
    /// Returns the number of painted vertices.
    pub fn apply_color(&mut self, color: [f32; 4]) -> EditResult<usize> {
        let result = match self.selection.mode() {
            EditMode::Vertex => self
                .selected_vertex()
                .and_then(|index| ops::recolor_vertex(&mut self.mesh, index, color))
                .map(|painted| painted.len()),
            EditMode::Face => self
                .selected_face()
                .and_then(|face| ops::recolor_face(&mut self.mesh, face, color))
                .map(|painted| painted.len()),
            EditMode::Object => ops::recolor_whole_mesh(&mut self.mesh, color),
        };
        let painted = log_rejected("apply_color", result)?;
        self.sync.colors_changed();
        Ok(painted)
    }

    /// Extrudes the selected face and clears the selection.
    pub fn extrude_selected_face(&mut self) -> EditResult<ExtrudeResult> {
        let result = self
            .selected_face()
            .and_then(|_| ops::extrude_selected_face(&mut self.mesh, &mut self.selection));
        let extruded = log_rejected("extrude_selected_face", result)?;
        self.sync.geometry_changed();
        self.sync.colors_changed();
        self.sync.selection_changed();
        Ok(extruded)
    }

    /// Recomputes vertex normals now, for hosts using the deferred policy.
    pub fn recompute_normals(&mut self) {
        self.mesh.recompute_normals();
        self.sync.geometry_changed();
    }
}
