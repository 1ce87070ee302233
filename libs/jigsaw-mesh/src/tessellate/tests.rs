//! Tests for flattening and the earcut adapter.

use super::flatten::{flatten_contour, flatten_cubic};
use super::*;
use crate::border::{BorderCache, PathSegment};
use crate::core::lattice::{CellIndex, GridSize};
use approx::assert_relative_eq;
use rand::{rngs::StdRng, SeedableRng};

fn contours(grid: GridSize, seed: u64) -> Vec<PieceContour> {
    let mut cache = BorderCache::new(grid);
    cache.populate(&mut StdRng::seed_from_u64(seed)).unwrap();
    grid.cells()
        .map(|cell| PieceContour::from_populated(cell, &cache).unwrap())
        .collect()
}

/// Test that a straight span flattens to its end point only.
#[test]
fn test_flatten_straight() {
    let cubic = PathSegment::straight(Vec2::ZERO, Vec2::X).to_cubic(Vec2::X);
    let mut out = Vec::new();
    flatten_cubic(&cubic, &TessellationOptions::default(), &mut out);
    assert_eq!(out, vec![Vec2::X]);
}

/// Test that long straight spans respect the step distance.
#[test]
fn test_flatten_step_distance() {
    let cubic = PathSegment::straight(Vec2::ZERO, Vec2::X).to_cubic(Vec2::X);
    let options = TessellationOptions {
        step_distance: 0.3,
        ..TessellationOptions::default()
    };
    let mut out = Vec::new();
    flatten_cubic(&cubic, &options, &mut out);
    assert!(out.len() >= 4);
    let mut previous = Vec2::ZERO;
    for point in &out {
        assert!(previous.distance(*point) <= 0.3);
        previous = *point;
    }
    assert_relative_eq!(previous.x, 1.0);
}

/// Test that the recursion depth bounds the output.
#[test]
fn test_flatten_depth_limit() {
    let cubic = crate::border::CubicBezier {
        p0: Vec2::ZERO,
        p1: Vec2::new(0.0, 1.0),
        p2: Vec2::new(1.0, 1.0),
        p3: Vec2::X,
    };
    let options = TessellationOptions {
        max_subdivision_depth: 2,
        max_cord_deviation: 1e-9,
        ..TessellationOptions::default()
    };
    let mut out = Vec::new();
    flatten_cubic(&cubic, &options, &mut out);
    assert_eq!(out.len(), 4);
}

/// Test that an unvalidated, vanishing sampling step still terminates.
#[test]
fn test_flatten_tiny_sampling_step() {
    let cubic = crate::border::CubicBezier {
        p0: Vec2::ZERO,
        p1: Vec2::new(0.0, 1.0),
        p2: Vec2::new(1.0, 1.0),
        p3: Vec2::X,
    };
    let flatten_with = |step: f64| {
        let options = TessellationOptions {
            sampling_step_size: step,
            ..TessellationOptions::default()
        };
        let mut out = Vec::new();
        flatten_cubic(&cubic, &options, &mut out);
        out
    };

    let tiny = flatten_with(1e-12);
    assert_eq!(tiny, flatten_with(config::constants::MIN_SAMPLING_STEP_SIZE));
    assert_eq!(tiny.last(), Some(&Vec2::X));
}

/// Test that tighter tolerances produce finer polylines.
#[test]
fn test_tighter_tolerance_refines() {
    let contour = &contours(GridSize::new(2, 2), 4)[0];
    let coarse = flatten_contour(
        contour,
        &TessellationOptions {
            max_cord_deviation: 0.05,
            max_tan_angle_deviation: 0.5,
            ..TessellationOptions::default()
        },
    );
    let fine = flatten_contour(
        contour,
        &TessellationOptions {
            max_cord_deviation: 0.001,
            max_tan_angle_deviation: 0.01,
            ..TessellationOptions::default()
        },
    );
    assert!(fine.len() > coarse.len());
}

/// Test that the closing point is not duplicated.
#[test]
fn test_flatten_contour_closed_without_repeat() {
    let options = TessellationOptions::default();
    for contour in contours(GridSize::new(3, 3), 6) {
        let points = flatten_contour(&contour, &options);
        assert!(points.len() > 4);
        for pair in points.windows(2) {
            assert!(pair[0].distance(pair[1]) > options.tolerance);
        }
        let first = points[0];
        let last = points[points.len() - 1];
        assert!(first.distance(last) > options.tolerance);
    }
}

/// Test triangulation of every piece of a 2x2 grid.
#[test]
fn test_earcut_pieces_face_down() {
    let options = TessellationOptions::default();
    for contour in contours(GridSize::new(2, 2), 10) {
        let mesh = EarcutTessellator.tessellate(&contour, &options).unwrap();
        assert!(!mesh.is_empty());
        assert!(mesh.signed_area() < 0.0, "cell {}", contour.cell());
        assert!(mesh.positions.iter().all(|p| p.z == 0.0));
        for [a, b, c] in mesh.triangles() {
            assert!((a as usize) < mesh.vertex_count());
            assert!((b as usize) < mesh.vertex_count());
            assert!((c as usize) < mesh.vertex_count());
        }
    }
}

/// Test that the pieces tile the unit square exactly.
#[test]
fn test_pieces_partition_unit_square() {
    let options = TessellationOptions::default();
    for (h, v) in [(2, 2), (3, 2), (4, 4)] {
        let total: f64 = contours(GridSize::new(h, v), 12)
            .iter()
            .map(|contour| {
                EarcutTessellator
                    .tessellate(contour, &options)
                    .unwrap()
                    .signed_area()
                    .abs()
            })
            .sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    }
}

/// Test that every vertex is referenced after compaction.
#[test]
fn test_no_unused_vertices() {
    let options = TessellationOptions::default();
    let contour = &contours(GridSize::new(3, 3), 1)[4];
    assert_eq!(contour.cell(), CellIndex::new(1, 1));
    let mesh = EarcutTessellator.tessellate(contour, &options).unwrap();
    let mut used = vec![false; mesh.vertex_count()];
    for index in &mesh.indices {
        used[*index as usize] = true;
    }
    assert!(used.into_iter().all(|u| u));
}

/// Test malformed triangle lists are rejected.
#[test]
fn test_from_polygon_errors() {
    let points = [Vec2::ZERO, Vec2::X, Vec2::Y];
    assert!(matches!(
        FlatPolygonMesh::from_polygon(&points, &[0, 1]),
        Err(JigsawError::MalformedTriangulation { .. })
    ));
    assert!(matches!(
        FlatPolygonMesh::from_polygon(&points, &[0, 1, 7]),
        Err(JigsawError::MalformedTriangulation { .. })
    ));
}

/// Test that clockwise input keeps its winding.
#[test]
fn test_from_polygon_keeps_clockwise() {
    let points = [Vec2::ZERO, Vec2::Y, Vec2::X];
    let mesh = FlatPolygonMesh::from_polygon(&points, &[0, 1, 2]).unwrap();
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_relative_eq!(mesh.signed_area(), -0.5);
}
