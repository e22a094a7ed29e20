//! WASM-facing entry points for the mesh editing engine.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The host resolves picks and drags in its own scene and
//! forwards indices and local-space positions to an [`EditorHandle`].
//! Native tests use the `*_internal` methods, which return Rust errors
//! instead of `JsValue`.
//!
//! ```
//! use mesh_edit_wasm::EditorHandle;
//!
//! let mut editor = EditorHandle::new_internal(
//!     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
//!     &[0, 1, 2],
//! ).unwrap();
//! editor.set_mode_internal(1).unwrap();
//! editor.pick_face_internal(0, 1, 2).unwrap();
//! editor.extrude_selected_face_internal().unwrap();
//! assert_eq!(editor.mesh().vertex_count(), 6);
//! ```

use config::constants::EditConfig;
use glam::DVec3;
use mesh_edit::{ChangeSet, EditError, EditMode, EditResult, EditSession, Face, SourceMesh};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "mesh-edit-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: EditError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One editing session driven from JavaScript.
///
/// # Examples
/// ```no_run
/// // const editor = new EditorHandle(positions, indices);
/// // editor.set_mode(1);              // face mode
/// // editor.pick_face(0, 2, 1);
/// // editor.extrude_selected_face();
/// // if (editor.take_changes() & 1) upload(editor.mesh());
/// ```
#[wasm_bindgen]
#[derive(Debug)]
pub struct EditorHandle {
    session: EditSession<ChangeSet>,
}

#[wasm_bindgen]
impl EditorHandle {
    /// Starts a session on flat positions and triangle indices.
    ///
    /// # Errors
    /// Returns a JavaScript error string when the buffers do not describe a
    /// valid triangle mesh.
    #[wasm_bindgen(constructor)]
    pub fn new(positions: &[f32], indices: &[u32]) -> Result<EditorHandle, JsValue> {
        Self::new_internal(positions, indices).map_err(to_js)
    }

    /// Switches mode: 0 vertex, 1 face, 2 object.
    pub fn set_mode(&mut self, mode: u8) -> Result<(), JsValue> {
        self.set_mode_internal(mode).map_err(to_js)
    }

    /// Current mode as the same numeric code `set_mode` takes.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> u8 {
        match self.session.mode() {
            EditMode::Vertex => 0,
            EditMode::Face => 1,
            EditMode::Object => 2,
        }
    }

    /// Selects the vertex slot the host picked.
    pub fn pick_vertex(&mut self, index: u32) -> Result<(), JsValue> {
        self.pick_vertex_internal(index).map_err(to_js)
    }

    /// Selects the face the host picked, as three corner indices.
    pub fn pick_face(&mut self, v0: u32, v1: u32, v2: u32) -> Result<(), JsValue> {
        self.pick_face_internal(v0, v1, v2).map_err(to_js)
    }

    /// Drops the current selection.
    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    /// Moves the selected vertex to a local-space position.
    ///
    /// Returns the number of welded slots moved.
    pub fn move_vertex(&mut self, x: f64, y: f64, z: f64) -> Result<u32, JsValue> {
        self.move_vertex_internal(x, y, z).map_err(to_js)
    }

    /// Moves the selected face so its center lands on a local-space point.
    pub fn move_face(&mut self, x: f64, y: f64, z: f64) -> Result<(), JsValue> {
        self.move_face_internal(x, y, z).map(drop).map_err(to_js)
    }

    /// Switches the mesh to per-vertex colors.
    pub fn enable_vertex_colors(&mut self) {
        self.session.enable_vertex_colors();
    }

    /// Paints according to the current mode. Returns the painted slot count.
    pub fn apply_color(&mut self, r: f32, g: f32, b: f32, a: f32) -> Result<u32, JsValue> {
        self.apply_color_internal(r, g, b, a).map_err(to_js)
    }

    /// Extrudes the selected face.
    ///
    /// Returns the three new vertex indices, which form the cap face.
    pub fn extrude_selected_face(&mut self) -> Result<Vec<u32>, JsValue> {
        self.extrude_selected_face_internal().map_err(to_js)
    }

    /// Recomputes vertex normals.
    pub fn recompute_normals(&mut self) {
        self.session.recompute_normals();
    }

    /// Copies the current buffers for upload.
    pub fn mesh(&self) -> MeshHandle {
        MeshHandle::from_mesh(self.session.mesh())
    }

    /// Returns and clears the dirty flags as a bitmask: 1 geometry,
    /// 2 colors, 4 selection, 8 tool.
    pub fn take_changes(&mut self) -> u32 {
        self.session.sync_mut().take().bits()
    }

    /// Returns and clears the dirty flags as JSON, including which transform
    /// tool the host should show.
    pub fn take_changes_json(&mut self) -> Result<String, JsValue> {
        let changes = self.session.sync_mut().take();
        serde_json::to_string(&changes).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl EditorHandle {
    /// Host-only constructor returning Rust errors.
    pub fn new_internal(positions: &[f32], indices: &[u32]) -> EditResult<Self> {
        let source = SourceMesh::from_flat(positions, indices)?;
        let session = EditSession::new(&source, EditConfig::default(), ChangeSet::default())?;
        Ok(Self { session })
    }

    /// Read access to the wrapped session.
    pub fn session(&self) -> &EditSession<ChangeSet> {
        &self.session
    }

    /// Host-only twin of `set_mode`.
    pub fn set_mode_internal(&mut self, mode: u8) -> EditResult<()> {
        let mode = EditMode::try_from(mode)?;
        self.session.set_mode(mode);
        Ok(())
    }

    /// Host-only twin of `pick_vertex`.
    pub fn pick_vertex_internal(&mut self, index: u32) -> EditResult<()> {
        self.session.pick_vertex(index)
    }

    /// Host-only twin of `pick_face`.
    pub fn pick_face_internal(&mut self, v0: u32, v1: u32, v2: u32) -> EditResult<()> {
        self.session.pick_face(Face::new(v0, v1, v2))
    }

    /// Host-only twin of `move_vertex`.
    pub fn move_vertex_internal(&mut self, x: f64, y: f64, z: f64) -> EditResult<u32> {
        let moved = self.session.drag_selected_vertex(DVec3::new(x, y, z))?;
        Ok(moved.len() as u32)
    }

    /// Host-only twin of `move_face`; returns the applied offset.
    pub fn move_face_internal(&mut self, x: f64, y: f64, z: f64) -> EditResult<DVec3> {
        self.session.drag_selected_face(DVec3::new(x, y, z))
    }

    /// Host-only twin of `apply_color`.
    pub fn apply_color_internal(&mut self, r: f32, g: f32, b: f32, a: f32) -> EditResult<u32> {
        let painted = self.session.apply_color([r, g, b, a])?;
        Ok(painted as u32)
    }

    /// Host-only twin of `extrude_selected_face`.
    pub fn extrude_selected_face_internal(&mut self) -> EditResult<Vec<u32>> {
        let result = self.session.extrude_selected_face()?;
        Ok(result.new_vertices.to_vec())
    }
}
