//! Adaptive curve flattening.
//!
//! Each cubic is split in half recursively until the chord is short enough,
//! every sampled point stays close to the chord and the end tangents stay
//! close to the chord direction.

use crate::border::CubicBezier;
use crate::config::TessellationOptions;
use crate::contour::PieceContour;
use crate::core::vec2::{distance_to_segment, Vec2};
use config::constants::MIN_SAMPLING_STEP_SIZE;

/// Flattens `cubic`, appending every polyline point after its start point.
pub fn flatten_cubic(cubic: &CubicBezier, options: &TessellationOptions, out: &mut Vec<Vec2>) {
    subdivide(cubic, 0.0, 1.0, 0, options, out);
}

/// Closed polyline around `contour`.
///
/// The first point is not repeated at the end, and consecutive points closer
/// than the tolerance are merged.
pub fn flatten_contour(contour: &PieceContour, options: &TessellationOptions) -> Vec<Vec2> {
    let cubics = contour.cubics();
    let mut raw = Vec::new();
    if let Some(first) = cubics.first() {
        raw.push(first.p0);
    }
    for cubic in &cubics {
        flatten_cubic(cubic, options, &mut raw);
    }

    let mut points: Vec<Vec2> = Vec::with_capacity(raw.len());
    for point in raw {
        if points
            .last()
            .map_or(true, |last| last.distance(point) > options.tolerance)
        {
            points.push(point);
        }
    }
    while points.len() > 1
        && points
            .first()
            .zip(points.last())
            .is_some_and(|(first, last)| first.distance(*last) <= options.tolerance)
    {
        points.pop();
    }
    points
}

fn subdivide(
    cubic: &CubicBezier,
    t0: f64,
    t1: f64,
    depth: u32,
    options: &TessellationOptions,
    out: &mut Vec<Vec2>,
) {
    let end = cubic.evaluate(t1);
    if depth >= options.max_subdivision_depth || is_flat(cubic, t0, t1, options) {
        out.push(end);
        return;
    }
    let mid = 0.5 * (t0 + t1);
    subdivide(cubic, t0, mid, depth + 1, options, out);
    subdivide(cubic, mid, t1, depth + 1, options, out);
}

fn is_flat(cubic: &CubicBezier, t0: f64, t1: f64, options: &TessellationOptions) -> bool {
    let a = cubic.evaluate(t0);
    let b = cubic.evaluate(t1);
    let chord = b - a;
    if chord.length() > options.step_distance {
        return false;
    }

    for s in sample_parameters(options.sampling_step_size) {
        let p = cubic.evaluate(t0 + (t1 - t0) * s);
        if distance_to_segment(p, a, b) > options.max_cord_deviation {
            return false;
        }
    }

    if chord.length() <= options.tolerance {
        return true;
    }
    let direction = chord.normalize();
    angle(cubic.tangent(t0), direction) <= options.max_tan_angle_deviation
        && angle(cubic.tangent(t1), direction) <= options.max_tan_angle_deviation
}

/// Interior parameters `step, 2·step, …` strictly below 1.
///
/// The count is fixed up front and clamped by the smallest accepted step.
fn sample_parameters(step: f64) -> impl Iterator<Item = f64> {
    let step = step.max(MIN_SAMPLING_STEP_SIZE);
    let count = (1.0 / step).ceil() as u32;
    (1..count).map(move |i| f64::from(i) * step).filter(|s| *s < 1.0)
}

/// Unsigned angle between two unit vectors.
fn angle(a: Vec2, b: Vec2) -> f64 {
    a.perp_dot(b).atan2(a.dot(b)).abs()
}
