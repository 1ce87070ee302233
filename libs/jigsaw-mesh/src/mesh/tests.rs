//! Tests for the solid mesh and its topology checks.

use super::*;
use crate::error::JigsawError;
use approx::assert_relative_eq;

fn tetrahedron() -> SolidMesh {
    let mut mesh = SolidMesh::new();
    for p in [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ] {
        mesh.add_vertex(p, p.truncate());
    }
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(0, 1, 3);
    mesh.add_triangle(0, 3, 2);
    mesh.add_triangle(1, 2, 3);
    mesh
}

/// Test creating empty mesh.
#[test]
fn test_mesh_new() {
    let mesh = SolidMesh::new();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.triangle_count(), 0);
    assert_eq!(mesh.signed_volume(), 0.0);
}

/// Test adding vertices keeps attribute arrays parallel.
#[test]
fn test_add_vertex() {
    let mut mesh = SolidMesh::with_capacity(2, 1);
    let idx = mesh.add_vertex(Vec3::new(1.0, 2.0, 3.0), Vec2::new(0.5, 0.5));
    assert_eq!(idx, 0);
    assert_eq!(mesh.uvs.len(), 1);
    assert_eq!(mesh.normals.len(), 1);
}

/// Test mesh translation.
#[test]
fn test_translate() {
    let mut mesh = tetrahedron();
    mesh.translate(Vec3::new(10.0, 20.0, 30.0));
    assert_eq!(mesh.positions[0], Vec3::new(10.0, 20.0, 30.0));
    let (min, max) = mesh.bounds().unwrap();
    assert_eq!(min, Vec3::new(10.0, 20.0, 30.0));
    assert_eq!(max, Vec3::new(11.0, 21.0, 31.0));
}

/// Test topology of a closed tetrahedron.
#[test]
fn test_closed_tetrahedron() {
    let mesh = tetrahedron();
    assert_eq!(mesh.euler_characteristic(), 2);
    assert!(mesh.validate_closed().is_ok());
    assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
}

/// Test that an inside-out mesh has negative volume.
#[test]
fn test_inverted_volume() {
    let mut mesh = tetrahedron();
    for triangle in mesh.indices.chunks_exact_mut(3) {
        triangle.swap(1, 2);
    }
    assert!(mesh.validate_closed().is_ok());
    assert_relative_eq!(mesh.signed_volume(), -1.0 / 6.0, epsilon = 1e-12);
}

/// Test that an open mesh is reported.
#[test]
fn test_open_mesh() {
    let mut mesh = tetrahedron();
    mesh.indices.truncate(9);
    assert!(matches!(
        mesh.validate_closed(),
        Err(JigsawError::NonManifoldEdge { count: 1, .. })
    ));
}

/// Test that a flipped triangle is reported.
#[test]
fn test_inconsistent_winding() {
    let mut mesh = tetrahedron();
    mesh.indices.swap(10, 11);
    assert!(matches!(
        mesh.validate_closed(),
        Err(JigsawError::InconsistentWinding { .. })
    ));
}

/// Test out-of-range and degenerate triangles.
#[test]
fn test_malformed_triangles() {
    let mut mesh = tetrahedron();
    mesh.add_triangle(0, 1, 9);
    assert!(matches!(
        mesh.validate_closed(),
        Err(JigsawError::IndexOutOfBounds { index: 9, .. })
    ));

    let mut mesh = tetrahedron();
    mesh.add_triangle(0, 0, 1);
    assert!(matches!(
        mesh.validate_closed(),
        Err(JigsawError::MalformedTriangulation { .. })
    ));
}

/// Test smooth normals point away from the solid.
#[test]
fn test_recalculate_normals() {
    let mut mesh = tetrahedron();
    mesh.recalculate_normals();
    let centre = Vec3::splat(0.25);
    for (position, normal) in mesh.positions.iter().zip(&mesh.normals) {
        assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-12);
        assert!(normal.dot(*position - centre) > 0.0);
    }
}

/// Test conversion to render buffers.
#[test]
fn test_to_buffers() {
    let mut mesh = tetrahedron();
    mesh.recalculate_normals();
    let buffers = mesh.to_buffers();
    assert_eq!(buffers.vertex_count(), 4);
    assert_eq!(buffers.triangle_count(), 4);
    assert_eq!(buffers.normals.len(), 12);
    assert_eq!(buffers.uvs.len(), 8);
    assert_eq!(&buffers.vertices[3..6], &[1.0, 0.0, 0.0]);
}
