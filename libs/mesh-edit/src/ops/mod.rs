//! # Mesh Operations
//!
//! Edits applied to an [`EditableMesh`](crate::EditableMesh): weld-aware
//! moves and recolors, and face extrusion.

pub mod extrude;
pub mod mutate;

pub use extrude::{extrude, ExtrudeResult};
pub use mutate::{
    extrude_selected_face, move_face, move_vertex, recolor_face, recolor_vertex,
    recolor_whole_mesh,
};
