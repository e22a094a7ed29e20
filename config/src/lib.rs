//! # Config Crate
//!
//! Centralized configuration constants for the mesh editing toolkit.
//! Extrusion depth, default paint colors and safety limits live here so the
//! editing engine and the host bindings agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EditConfig, EXTRUDE_DEPTH, DEFAULT_VERTEX_COLOR};
//!
//! let cfg = EditConfig::default();
//! assert_eq!(cfg.extrude_depth, EXTRUDE_DEPTH);
//! assert_eq!(cfg.default_color, DEFAULT_VERTEX_COLOR);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated**: Runtime overrides go through `EditConfig::new`

pub mod constants;
