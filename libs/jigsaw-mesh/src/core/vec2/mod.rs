//! 2D vector definitions for the geometry engine.
//!
//! Provides type alias for `glam::DVec2` and common utilities.

use config::constants::approx_zero;

pub use glam::DVec2 as Vec2;

/// Creates a unit vector along the X axis.
pub fn unit_x() -> Vec2 {
    Vec2::new(1.0, 0.0)
}

/// Creates a unit vector along the Y axis.
pub fn unit_y() -> Vec2 {
    Vec2::new(0.0, 1.0)
}

/// Twice the signed area of the triangle `a, b, c`.
///
/// Positive when the points turn counter-clockwise (y up).
///
/// # Examples
/// ```
/// use jigsaw_mesh::core::vec2::{cross_2d, Vec2};
/// let ccw = cross_2d(Vec2::ZERO, Vec2::X, Vec2::Y);
/// assert!(ccw > 0.0);
/// ```
pub fn cross_2d(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Distance from `point` to the segment `a..b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if approx_zero(len_sq) {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
