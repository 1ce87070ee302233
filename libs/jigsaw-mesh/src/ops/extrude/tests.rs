use super::*;
use crate::border::BorderCache;
use crate::config::TessellationOptions;
use crate::contour::PieceContour;
use crate::core::lattice::GridSize;
use crate::tessellate::{EarcutTessellator, Tessellator};
use approx::assert_relative_eq;
use rand::{rngs::StdRng, SeedableRng};

fn square() -> FlatPolygonMesh {
    FlatPolygonMesh::new(
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}

#[test]
fn test_extrude_square() {
    let solid = extrude_solid(&square(), 0.25).unwrap();
    assert_eq!(solid.vertex_count(), 8);
    assert_eq!(solid.triangle_count(), 2 * 2 + 2 * 4);
    assert_eq!(solid.euler_characteristic(), 2);
    assert!(solid.validate_closed().is_ok());
    assert_relative_eq!(solid.signed_volume(), 0.25, epsilon = 1e-12);
}

#[test]
fn test_layers_and_order() {
    let flat = square();
    let solid = extrude_solid(&flat, 0.5).unwrap();
    for i in 0..4 {
        assert_eq!(solid.positions[i].z, 0.0);
        assert_eq!(solid.positions[i + 4].z, 0.5);
        assert_eq!(solid.positions[i + 4].truncate(), solid.positions[i].truncate());
        assert_eq!(solid.uvs[i], solid.uvs[i + 4]);
    }
    // Front triangles first, unchanged
    assert_eq!(&solid.indices[..6], &flat.indices[..]);
    // Back triangles reversed and offset
    assert_eq!(&solid.indices[6..9], &[6, 5, 4]);
}

#[test]
fn test_walls_face_outward() {
    let mut solid = extrude_solid(&square(), 1.0).unwrap();
    solid.recalculate_normals();
    let centre = Vec3::new(0.5, 0.5, 0.5);
    for (position, normal) in solid.positions.iter().zip(&solid.normals) {
        assert!(normal.dot(*position - centre) > 0.0);
    }
}

#[test]
fn test_outline_key_direction() {
    let key = OutlineEdgeKey::new(7, 3);
    assert_eq!((key.low, key.high, key.reversed), (3, 7, true));
    assert_eq!(key.directed(), (7, 3));
    assert_eq!(OutlineEdgeKey::new(3, 7).directed(), (3, 7));
}

#[test]
fn test_rejects_bad_thickness() {
    for thickness in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            extrude_solid(&square(), thickness),
            Err(JigsawError::InvalidConfig { .. })
        ));
    }
}

#[test]
fn test_rejects_empty() {
    assert!(matches!(
        extrude_solid(&FlatPolygonMesh::default(), 0.1),
        Err(JigsawError::MalformedTriangulation { .. })
    ));
}

#[test]
fn test_rejects_out_of_bounds() {
    let mut flat = square();
    flat.indices[5] = 11;
    assert!(matches!(
        outline_edges(&flat),
        Err(JigsawError::IndexOutOfBounds { triangle: 1, index: 11, vertex_count: 4 })
    ));
}

#[test]
fn test_rejects_edge_shared_three_times() {
    let flat = FlatPolygonMesh::new(
        vec![
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(0.5, 1.0, 0.0),
            Vec3::new(0.5, -1.0, 0.0),
            Vec3::new(0.5, 2.0, 0.0),
        ],
        vec![0, 1, 2, 1, 0, 3, 1, 0, 4],
    );
    assert_eq!(
        outline_edges(&flat),
        Err(JigsawError::NonManifoldEdge { a: 0, b: 1, count: 3 })
    );
}

#[test]
fn test_rejects_inconsistent_winding() {
    let mut flat = square();
    flat.indices = vec![0, 1, 2, 0, 3, 2];
    assert!(matches!(
        outline_edges(&flat),
        Err(JigsawError::InconsistentWinding { .. })
    ));
}

#[test]
fn test_rejects_two_loops() {
    let flat = FlatPolygonMesh::new(
        vec![
            Vec3::ZERO,
            Vec3::Y,
            Vec3::X,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(5.0, 1.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        ],
        vec![0, 1, 2, 3, 4, 5],
    );
    assert!(matches!(
        outline_edges(&flat),
        Err(JigsawError::OpenOutline { .. })
    ));
}

#[test]
fn test_rejects_bowtie() {
    // Two triangles touching at vertex 0 only
    let flat = FlatPolygonMesh::new(
        vec![
            Vec3::ZERO,
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
        ],
        vec![0, 1, 2, 0, 3, 4],
    );
    assert!(matches!(
        outline_edges(&flat),
        Err(JigsawError::OpenOutline { .. })
    ));
}

#[test]
fn test_extrude_tessellated_pieces() {
    let grid = GridSize::new(2, 2);
    let mut cache = BorderCache::new(grid);
    cache.populate(&mut StdRng::seed_from_u64(17)).unwrap();
    let options = TessellationOptions::default();

    for cell in grid.cells() {
        let contour = PieceContour::from_populated(cell, &cache).unwrap();
        let flat = EarcutTessellator.tessellate(&contour, &options).unwrap();
        let solid = extrude_solid(&flat, 0.1).unwrap();

        let outline = outline_edges(&flat).unwrap();
        assert_eq!(solid.vertex_count(), 2 * flat.vertex_count());
        assert_eq!(
            solid.triangle_count(),
            2 * flat.triangle_count() + 2 * outline.len()
        );
        assert_eq!(solid.euler_characteristic(), 2, "cell {cell}");
        assert!(solid.validate_closed().is_ok(), "cell {cell}");
        assert_relative_eq!(
            solid.signed_volume(),
            -flat.signed_area() * 0.1,
            epsilon = 1e-12
        );
        assert!(solid.signed_volume() > 0.0);
    }
}
