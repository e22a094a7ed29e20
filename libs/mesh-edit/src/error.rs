//! # Edit Errors
//!
//! Error types for mesh editing operations. Every variant is recoverable:
//! the failing operation leaves the mesh untouched.

use config::constants::ConfigError;
use thiserror::Error;

use crate::Face;

/// Result type for editing operations.
pub type EditResult<T> = Result<T, EditError>;

/// Errors that can occur while editing a mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Vertex index outside the current buffer (often a stale selection).
    #[error("invalid vertex index {index} (mesh has {vertex_count} vertices)")]
    InvalidIndex {
        /// The offending index.
        index: u32,
        /// Vertex count at the time of the check.
        vertex_count: usize,
    },

    /// The face is not present in the triangle list.
    #[error("face {face} not found in triangle list")]
    InvalidFace {
        /// The face that could not be located.
        face: Face,
    },

    /// The face is not a proper triangle.
    #[error("degenerate face: {reason}")]
    DegenerateFace {
        /// What makes the face unusable.
        reason: String,
    },

    /// The operation is not allowed in the current state.
    #[error("precondition violated: {message}")]
    PreconditionViolation {
        /// Description of the unmet precondition.
        message: String,
    },

    /// Source mesh has no vertices to clone.
    #[error("source mesh has no vertices")]
    EmptySource,

    /// Growing the mesh would exceed the configured limit.
    #[error("too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertex count the operation would produce.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Invalid edit configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EditError {
    /// Creates a precondition violation error.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            message: message.into(),
        }
    }

    /// Creates a degenerate face error.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateFace {
            reason: reason.into(),
        }
    }
}
