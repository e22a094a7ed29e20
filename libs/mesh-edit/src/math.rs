//! # Vector Helpers
//!
//! Small pure functions used by the editing operations. They take no mesh
//! state and can be called from any host loop.

use glam::DVec3;

/// Cross product of `first` and `second` taken relative to `right_hand`.
///
/// Both vectors are translated by `-right_hand` before crossing, so passing
/// the three corners of a triangle `(v1, v2, v0)` yields the face normal
/// direction `(v1 - v0) x (v2 - v0)`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_edit::math::cross;
///
/// let n = cross(DVec3::new(2.0, 1.0, 1.0), DVec3::new(1.0, 2.0, 1.0), DVec3::ONE);
/// assert_eq!(n, DVec3::Z);
/// ```
#[inline]
pub fn cross(first: DVec3, second: DVec3, right_hand: DVec3) -> DVec3 {
    (first - right_hand).cross(second - right_hand)
}

/// Normalizes a vector, returning `None` for zero-length or non-finite input.
#[inline]
pub fn normalize(vector: DVec3) -> Option<DVec3> {
    vector.try_normalize()
}

/// Mean of the given points, or the origin for an empty slice.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_edit::math::middle_point;
///
/// let mid = middle_point(&[DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0), DVec3::new(0.0, 3.0, 0.0)]);
/// assert_eq!(mid, DVec3::new(1.0, 1.0, 0.0));
/// ```
pub fn middle_point(points: &[DVec3]) -> DVec3 {
    if points.is_empty() {
        return DVec3::ZERO;
    }
    let sum: DVec3 = points.iter().copied().sum();
    sum / points.len() as f64
}
