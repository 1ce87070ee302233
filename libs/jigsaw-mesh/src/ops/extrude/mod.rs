//! Extrusion of a flat triangulated polygon into a closed slab.
//!
//! ```text
//!   back layer  (z = thickness, indices + N)   ───────────
//!                                              │  walls  │
//!   front layer (z = 0, indices 0..N)          ───────────
//! ```
//!
//! The walls are stitched along the polygon's outline, i.e. the triangle
//! edges used by exactly one front triangle.

use std::collections::HashMap;

use crate::core::vec3::Vec3;
use crate::error::{JigsawError, JigsawResult};
use crate::mesh::topology::{directed_edges, validate_triangles};
use crate::mesh::SolidMesh;
use crate::tessellate::FlatPolygonMesh;

// =============================================================================
// OUTLINE DETECTION
// =============================================================================

/// Undirected triangle edge plus the direction it was first seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutlineEdgeKey {
    /// Smaller vertex index.
    pub low: u32,
    /// Larger vertex index.
    pub high: u32,
    /// Whether the edge was traversed `high → low`.
    pub reversed: bool,
}

impl OutlineEdgeKey {
    /// Key for the directed edge `from → to`.
    pub fn new(from: u32, to: u32) -> Self {
        Self {
            low: from.min(to),
            high: from.max(to),
            reversed: from > to,
        }
    }

    /// The edge in its recorded direction.
    pub fn directed(&self) -> (u32, u32) {
        if self.reversed {
            (self.high, self.low)
        } else {
            (self.low, self.high)
        }
    }
}

struct EdgeUse {
    key: OutlineEdgeKey,
    count: usize,
}

/// Outline edges of a flat triangulation, in loop order and in the
/// direction they appear in their front triangle.
///
/// # Errors
///
/// - `MalformedTriangulation` / `IndexOutOfBounds` for broken triangles
/// - `InconsistentWinding` when two triangles share a directed edge
/// - `NonManifoldEdge` when an edge is used by more than two triangles
/// - `OpenOutline` when the outline is not exactly one closed loop
///
/// # Examples
/// ```
/// use jigsaw_mesh::ops::extrude::outline_edges;
/// use jigsaw_mesh::{FlatPolygonMesh, Vec3};
///
/// let square = FlatPolygonMesh::new(
///     vec![Vec3::ZERO, Vec3::Y, Vec3::new(1.0, 1.0, 0.0), Vec3::X],
///     vec![0, 1, 2, 0, 2, 3],
/// );
/// let outline = outline_edges(&square).unwrap();
/// assert_eq!(outline, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
/// ```
pub fn outline_edges(flat: &FlatPolygonMesh) -> JigsawResult<Vec<(u32, u32)>> {
    if flat.is_empty() {
        return Err(JigsawError::MalformedTriangulation {
            message: "no triangles to extrude".to_string(),
        });
    }
    validate_triangles(&flat.indices, flat.vertex_count())?;

    let mut uses: Vec<EdgeUse> = Vec::new();
    let mut lookup: HashMap<(u32, u32), usize> = HashMap::new();
    for (_, from, to) in directed_edges(&flat.indices) {
        let key = OutlineEdgeKey::new(from, to);
        match lookup.get(&(key.low, key.high)).copied() {
            Some(slot) => {
                let seen = &mut uses[slot];
                if seen.key.reversed == key.reversed {
                    return Err(JigsawError::InconsistentWinding { from, to });
                }
                seen.count += 1;
                if seen.count > 2 {
                    return Err(JigsawError::NonManifoldEdge {
                        a: key.low,
                        b: key.high,
                        count: seen.count,
                    });
                }
            }
            None => {
                lookup.insert((key.low, key.high), uses.len());
                uses.push(EdgeUse { key, count: 1 });
            }
        }
    }

    let outline: Vec<(u32, u32)> = uses
        .iter()
        .filter(|edge| edge.count == 1)
        .map(|edge| edge.key.directed())
        .collect();
    order_single_loop(&outline)
}

/// Chains outline edges into one loop starting at the first edge.
fn order_single_loop(edges: &[(u32, u32)]) -> JigsawResult<Vec<(u32, u32)>> {
    let Some(&first) = edges.first() else {
        return Err(JigsawError::OpenOutline {
            message: "no outline edges".to_string(),
        });
    };

    let mut next: HashMap<u32, u32> = HashMap::with_capacity(edges.len());
    for &(from, to) in edges {
        if next.insert(from, to).is_some() {
            return Err(JigsawError::OpenOutline {
                message: format!("vertex {from} starts more than one outline edge"),
            });
        }
    }

    let mut ordered = Vec::with_capacity(edges.len());
    let mut current = first;
    loop {
        ordered.push(current);
        let Some(&following) = next.get(&current.1) else {
            return Err(JigsawError::OpenOutline {
                message: format!("outline stops at vertex {}", current.1),
            });
        };
        current = (current.1, following);
        if current == first {
            break;
        }
        if ordered.len() > edges.len() {
            return Err(JigsawError::OpenOutline {
                message: "outline does not return to its start".to_string(),
            });
        }
    }

    if ordered.len() != edges.len() {
        return Err(JigsawError::OpenOutline {
            message: format!(
                "outline splits into several loops: {} of {} edges reached",
                ordered.len(),
                edges.len()
            ),
        });
    }
    Ok(ordered)
}

// =============================================================================
// EXTRUSION
// =============================================================================

/// Extrudes `flat` along +z into a closed solid of the given thickness.
///
/// The result holds `2N` vertices and `2T + 2B` triangles for `N` flat
/// vertices, `T` flat triangles and `B` outline edges, ordered front, back,
/// walls. UVs are the vertices' xy coordinates on both layers.
///
/// # Errors
///
/// `InvalidConfig` for a non-positive thickness, otherwise the errors of
/// [`outline_edges`].
///
/// # Examples
/// ```
/// use jigsaw_mesh::{extrude_solid, FlatPolygonMesh, Vec3};
///
/// let triangle = FlatPolygonMesh::new(vec![Vec3::ZERO, Vec3::Y, Vec3::X], vec![0, 1, 2]);
/// let solid = extrude_solid(&triangle, 0.5).unwrap();
/// assert_eq!(solid.vertex_count(), 6);
/// assert_eq!(solid.triangle_count(), 8);
/// assert!(solid.validate_closed().is_ok());
/// ```
pub fn extrude_solid(flat: &FlatPolygonMesh, thickness: f64) -> JigsawResult<SolidMesh> {
    if thickness <= 0.0 || !thickness.is_finite() {
        return Err(JigsawError::InvalidConfig {
            message: format!("thickness must be positive and finite: {thickness}"),
        });
    }
    let outline = outline_edges(flat)?;

    let n = flat.vertex_count() as u32;
    let mut solid = SolidMesh::with_capacity(
        flat.vertex_count() * 2,
        flat.triangle_count() * 2 + outline.len() * 2,
    );

    // Vertices: front layer, then back layer
    for position in &flat.positions {
        solid.add_vertex(*position, position.truncate());
    }
    let lift = Vec3::new(0.0, 0.0, thickness);
    for position in &flat.positions {
        solid.add_vertex(*position + lift, position.truncate());
    }

    for [a, b, c] in flat.triangles() {
        solid.add_triangle(a, b, c);
    }
    for [a, b, c] in flat.triangles() {
        solid.add_triangle(c + n, b + n, a + n);
    }
    for &(a, b) in &outline {
        solid.add_triangle(b + n, a, a + n);
        solid.add_triangle(b, a, b + n);
    }

    log::trace!(
        "extruded {} triangles with {} outline edges",
        flat.triangle_count(),
        outline.len()
    );
    Ok(solid)
}

#[cfg(test)]
mod tests;
