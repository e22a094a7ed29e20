//! Centralized configuration values shared across the mesh editing crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Scale applied to the unit face normal when extruding a face.
///
/// New cap vertices are placed at `corner + normal * EXTRUDE_DEPTH`.
///
/// # Examples
/// ```
/// use config::constants::EXTRUDE_DEPTH;
/// assert_eq!(EXTRUDE_DEPTH, 0.5);
/// ```
pub const EXTRUDE_DEPTH: f64 = 0.5;

/// Number of vertices appended by a single face extrusion.
pub const EXTRUDE_NEW_VERTICES: usize = 3;

/// Number of side triangles synthesized by a single face extrusion
/// (three quads, two triangles each).
///
/// # Examples
/// ```
/// use config::constants::EXTRUDE_SIDE_TRIANGLES;
/// assert_eq!(EXTRUDE_SIDE_TRIANGLES * 3, 18);
/// ```
pub const EXTRUDE_SIDE_TRIANGLES: usize = 6;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default vertex color assigned on clone and to freshly appended vertices
/// (gray). RGBA values in range [0.0, 1.0].
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_VERTEX_COLOR;
/// assert_eq!(DEFAULT_VERTEX_COLOR[3], 1.0);
/// ```
pub const DEFAULT_VERTEX_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in an edited mesh.
///
/// Triangle indices are stored as `u32`, and each extrusion appends three
/// vertices, so the editor refuses to grow past this bound.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert!(MAX_VERTICES < u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in an edited mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// EDIT CONFIGURATION
// =============================================================================

/// When vertex normals are recomputed after a geometry change.
///
/// # Examples
/// ```
/// use config::constants::NormalPolicy;
/// assert_eq!(NormalPolicy::default(), NormalPolicy::Deferred);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalPolicy {
    /// Mutations only flag normals as stale; the host recomputes once after a
    /// batch of moves.
    #[default]
    Deferred,
    /// Every geometry mutation recomputes normals before returning.
    Immediate,
}

/// Immutable snapshot of editing settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::EditConfig;
/// let config = EditConfig::default();
/// assert!(config.extrude_depth > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditConfig {
    /// Scale of the face normal used as extrusion offset.
    pub extrude_depth: f64,
    /// Color given to cloned and appended vertices.
    pub default_color: [f32; 4],
    /// Normal recomputation policy.
    pub normal_policy: NormalPolicy,
}

impl EditConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// depth and color.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{EditConfig, NormalPolicy};
    /// let cfg = EditConfig::new(1.0, [1.0, 0.0, 0.0, 1.0], NormalPolicy::Immediate)
    ///     .expect("valid config");
    /// assert_eq!(cfg.extrude_depth, 1.0);
    /// ```
    pub fn new(
        extrude_depth: f64,
        default_color: [f32; 4],
        normal_policy: NormalPolicy,
    ) -> Result<Self, ConfigError> {
        if !extrude_depth.is_finite() || extrude_depth <= 0.0 {
            return Err(ConfigError::InvalidExtrudeDepth(extrude_depth));
        }
        if default_color
            .iter()
            .any(|c| !c.is_finite() || !(0.0..=1.0).contains(c))
        {
            return Err(ConfigError::InvalidColor(default_color));
        }
        Ok(Self {
            extrude_depth,
            default_color,
            normal_policy,
        })
    }
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            extrude_depth: EXTRUDE_DEPTH,
            default_color: DEFAULT_VERTEX_COLOR,
            normal_policy: NormalPolicy::Deferred,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the extrusion depth is zero, negative or not finite.
    InvalidExtrudeDepth(f64),
    /// Raised when a color component falls outside [0, 1].
    InvalidColor([f32; 4]),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidExtrudeDepth(value) => {
                write!(f, "extrude_depth must be positive and finite: {value}")
            }
            ConfigError::InvalidColor(value) => {
                write!(f, "color components must be within [0, 1]: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
