//! # Selection State
//!
//! Tracks the interaction mode and what is currently picked. Only one
//! interaction can be active at a time, which is what serializes edits.

use serde::{Deserialize, Serialize};

use crate::error::{EditError, EditResult};
use crate::mesh::Face;

/// What the user is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EditMode {
    /// Individual vertices (and their weld groups).
    Vertex,
    /// Triangular faces.
    Face,
    /// The whole object; the host's own transform tool is active.
    #[default]
    Object,
}

impl TryFrom<u8> for EditMode {
    type Error = EditError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EditMode::Vertex),
            1 => Ok(EditMode::Face),
            2 => Ok(EditMode::Object),
            other => Err(EditError::precondition(format!("unknown edit mode {other}"))),
        }
    }
}

/// Host transform-tool affordance toggled by mode switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformTool {
    /// Host tool hidden while vertices or faces are edited.
    None,
    /// Host move tool shown in object mode.
    Move,
}

impl EditMode {
    /// The host tool that should be active in this mode.
    pub fn transform_tool(self) -> TransformTool {
        match self {
            EditMode::Vertex | EditMode::Face => TransformTool::None,
            EditMode::Object => TransformTool::Move,
        }
    }
}

/// The currently picked element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// One vertex slot.
    Vertex(u32),
    /// One triangle, in triangle-list winding.
    Face(Face),
}

/// Mode plus selection for one editing session.
///
/// # Example
///
/// ```rust
/// use mesh_edit::{EditMode, Face, Selection, SelectionState};
///
/// let mut state = SelectionState::new();
/// state.set_mode(EditMode::Face);
/// state.pick_face(Face::new(0, 2, 1)).unwrap();
/// state.set_mode(EditMode::Vertex);
/// assert_eq!(state.selection(), Selection::None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    mode: EditMode,
    selection: Selection,
}

impl SelectionState {
    /// Starts in object mode with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current edit mode.
    #[inline]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Current selection.
    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected vertex, if any.
    pub fn selected_vertex(&self) -> Option<u32> {
        match self.selection {
            Selection::Vertex(index) => Some(index),
            _ => None,
        }
    }

    /// The selected face, if any.
    pub fn selected_face(&self) -> Option<Face> {
        match self.selection {
            Selection::Face(face) => Some(face),
            _ => None,
        }
    }

    /// Selects a vertex. Only valid in vertex mode.
    pub fn pick_vertex(&mut self, index: u32) -> EditResult<()> {
        if self.mode != EditMode::Vertex {
            return Err(EditError::precondition(format!(
                "cannot pick a vertex in {:?} mode",
                self.mode
            )));
        }
        self.selection = Selection::Vertex(index);
        Ok(())
    }

    /// Selects a face. Only valid in face mode.
    pub fn pick_face(&mut self, face: Face) -> EditResult<()> {
        if self.mode != EditMode::Face {
            return Err(EditError::precondition(format!(
                "cannot pick a face in {:?} mode",
                self.mode
            )));
        }
        self.selection = Selection::Face(face);
        Ok(())
    }

    /// Switches mode. A real change clears the selection and returns the
    /// transform tool the host should now show; switching to the current
    /// mode is a no-op.
    pub fn set_mode(&mut self, mode: EditMode) -> Option<TransformTool> {
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        self.selection = Selection::None;
        Some(mode.transform_tool())
    }

    /// Drops the selection without changing mode.
    pub fn clear(&mut self) {
        self.selection = Selection::None;
    }

    /// Resets to object mode with nothing selected.
    pub fn reset(&mut self) -> Option<TransformTool> {
        self.selection = Selection::None;
        self.set_mode(EditMode::Object)
    }
}
