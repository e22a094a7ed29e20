//! # Mesh Edit
//!
//! Topology engine for interactive triangle-mesh editing: pick a vertex or
//! face, move it, paint it, or extrude it, while keeping a buffer the host
//! renderer can re-upload.
//!
//! ## Architecture
//!
//! ```text
//! pick resolver (host) → EditSession → ops (weld-aware) → EditableMesh
//!                              ↓
//!                         RenderSync (host re-upload)
//! ```
//!
//! - **EditableMesh**: positions, colors and triangles cloned from a
//!   [`SourceMesh`]; append-only growth.
//! - **WeldIndex / WeldMap**: vertex slots sharing an exact position.
//! - **SelectionState**: edit mode plus the picked vertex or face.
//! - **ops**: move, recolor and extrude, each resolving weld groups first.
//! - **EditSession**: owns one mesh, its selection and the sync sink.
//!
//! Everything works in the mesh's local space. Converting drag positions
//! from world space is the host's job.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::EditConfig;
//! use glam::DVec3;
//! use mesh_edit::{ChangeSet, EditMode, EditSession, Face, SourceMesh};
//!
//! let source = SourceMesh::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
//! let mut session = EditSession::new(&source, EditConfig::default(), ChangeSet::default())?;
//!
//! session.set_mode(EditMode::Face);
//! session.pick_face(Face::new(0, 1, 2))?;
//! let result = session.extrude_selected_face()?;
//!
//! assert_eq!(result.new_vertices, [3, 4, 5]);
//! assert_eq!(session.mesh().vertex_count(), 6);
//! # Ok::<(), mesh_edit::EditError>(())
//! ```

pub mod error;
pub mod math;
pub mod mesh;
pub mod ops;
pub mod selection;
pub mod session;
pub mod sync;
pub mod weld;

#[cfg(test)]
mod fixtures;

pub use error::{EditError, EditResult};
pub use mesh::{EditableMesh, Face, SourceMesh};
pub use ops::{
    extrude, extrude_selected_face, move_face, move_vertex, recolor_face, recolor_vertex,
    recolor_whole_mesh, ExtrudeResult,
};
pub use selection::{EditMode, Selection, SelectionState, TransformTool};
pub use session::EditSession;
pub use sync::{ChangeSet, RenderSync};
pub use weld::{WeldIndex, WeldMap};
