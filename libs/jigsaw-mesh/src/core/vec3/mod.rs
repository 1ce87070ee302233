//! Thin wrapper around `glam::DVec3` shared across engine modules.
//!
//! The helper functions keep vector creation readable while avoiding direct
//! dependencies on `glam` from higher layers.

use super::vec2::Vec2;

pub use glam::DVec3 as Vec3;

/// Promotes a contour point to 3D on the `z = 0` plane.
///
/// # Examples
/// ```
/// use jigsaw_mesh::core::{vec2::Vec2, vec3::promote};
/// let p = promote(Vec2::new(0.25, 0.5));
/// assert_eq!(p.z, 0.0);
/// ```
pub fn promote(point: Vec2) -> Vec3 {
    point.extend(0.0)
}
