//! # Render Sync
//!
//! How the engine tells the host renderer that buffers need re-uploading.
//! The transport is up to the host: direct callbacks, or the polled
//! [`ChangeSet`] dirty flags.

use serde::{Deserialize, Serialize};

use crate::selection::TransformTool;

/// Callbacks fired after each completed mutation.
///
/// All methods default to no-ops.
pub trait RenderSync {
    /// Positions or the triangle list changed.
    fn geometry_changed(&mut self) {}

    /// Vertex colors changed.
    fn colors_changed(&mut self) {}

    /// Mode or selection changed; handles need repainting.
    fn selection_changed(&mut self) {}

    /// The host transform tool should switch.
    fn tool_changed(&mut self, _tool: TransformTool) {}
}

/// Dirty flags accumulated between host polls.
///
/// # Example
///
/// ```rust
/// use mesh_edit::{ChangeSet, RenderSync};
///
/// let mut changes = ChangeSet::default();
/// changes.colors_changed();
/// let taken = changes.take();
/// assert!(taken.colors);
/// assert!(changes.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Geometry needs re-upload.
    pub geometry: bool,
    /// Colors need re-upload.
    pub colors: bool,
    /// Handles need repaint.
    pub selection: bool,
    /// Latest requested host tool, if any.
    pub tool: Option<TransformTool>,
}

impl ChangeSet {
    /// Bit set in [`ChangeSet::bits`] for geometry changes.
    pub const GEOMETRY: u32 = 1;
    /// Bit set in [`ChangeSet::bits`] for color changes.
    pub const COLORS: u32 = 1 << 1;
    /// Bit set in [`ChangeSet::bits`] for selection changes.
    pub const SELECTION: u32 = 1 << 2;
    /// Bit set in [`ChangeSet::bits`] when a tool change is pending.
    pub const TOOL: u32 = 1 << 3;

    /// Returns true if nothing changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the accumulated flags and resets them.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Packs the flags into a bitmask for hosts without structured values.
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.geometry {
            bits |= Self::GEOMETRY;
        }
        if self.colors {
            bits |= Self::COLORS;
        }
        if self.selection {
            bits |= Self::SELECTION;
        }
        if self.tool.is_some() {
            bits |= Self::TOOL;
        }
        bits
    }
}

impl RenderSync for ChangeSet {
    fn geometry_changed(&mut self) {
        self.geometry = true;
    }

    fn colors_changed(&mut self) {
        self.colors = true;
    }

    fn selection_changed(&mut self) {
        self.selection = true;
    }

    fn tool_changed(&mut self, tool: TransformTool) {
        self.tool = Some(tool);
    }
}
