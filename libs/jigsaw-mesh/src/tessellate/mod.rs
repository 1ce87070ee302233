//! # Tessellation
//!
//! Turns a closed [`PieceContour`] into a flat triangulated polygon.
//!
//! The [`Tessellator`] trait is the seam for plugging in an external
//! triangulation engine. [`EarcutTessellator`] is the stock implementation:
//! it flattens the contour curves adaptively and triangulates the polyline
//! with ear clipping.
//!
//! ## Orientation
//!
//! Every tessellator must emit triangles whose normals face −z, i.e. winding
//! clockwise when viewed from +z. The extruder builds the back layer at
//! `+thickness`, so this keeps the solid's normals pointing outward.

pub mod flatten;

use crate::config::TessellationOptions;
use crate::contour::PieceContour;
use crate::core::vec2::{cross_2d, Vec2};
use crate::core::vec3::{promote, Vec3};
use crate::error::{JigsawError, JigsawResult};

// =============================================================================
// FLAT POLYGON MESH
// =============================================================================

/// Triangulated polygon on the `z = 0` plane.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatPolygonMesh {
    /// Vertex positions with `z = 0`.
    pub positions: Vec<Vec3>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

impl FlatPolygonMesh {
    /// Wraps raw buffers without checking them; the extruder validates.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Builds a mesh from a polygon and triangle corner indices into it.
    ///
    /// Vertices no triangle refers to are dropped, and the triangle winding is
    /// flipped as a whole if the polygon faces +z.
    ///
    /// # Errors
    ///
    /// `MalformedTriangulation` if the index count is not a multiple of three
    /// or an index is outside the polygon.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::core::vec2::Vec2;
    /// use jigsaw_mesh::FlatPolygonMesh;
    ///
    /// let square = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y, Vec2::new(5.0, 5.0)];
    /// let mesh = FlatPolygonMesh::from_polygon(&square, &[0, 1, 2, 0, 2, 3]).unwrap();
    /// assert_eq!(mesh.vertex_count(), 4);
    /// assert!(mesh.signed_area() < 0.0);
    /// ```
    pub fn from_polygon(points: &[Vec2], triangles: &[usize]) -> JigsawResult<Self> {
        if triangles.len() % 3 != 0 {
            return Err(JigsawError::MalformedTriangulation {
                message: format!("{} indices is not a whole number of triangles", triangles.len()),
            });
        }

        let mut remap: Vec<Option<u32>> = vec![None; points.len()];
        let mut positions = Vec::new();
        let mut indices = Vec::with_capacity(triangles.len());
        for &index in triangles {
            let point = points
                .get(index)
                .ok_or_else(|| JigsawError::MalformedTriangulation {
                    message: format!("index {index} outside polygon of {} points", points.len()),
                })?;
            let slot = &mut remap[index];
            let compact = match *slot {
                Some(compact) => compact,
                None => {
                    let compact = positions.len() as u32;
                    positions.push(promote(*point));
                    *slot = Some(compact);
                    compact
                }
            };
            indices.push(compact);
        }

        let mut mesh = Self { positions, indices };
        if mesh.signed_area() > 0.0 {
            mesh.flip_winding();
        }
        Ok(mesh)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether there is nothing to extrude.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Sum of the triangles' signed areas in the xy plane; negative when
    /// the triangles face −z.
    pub fn signed_area(&self) -> f64 {
        let at = |i: u32| {
            self.positions
                .get(i as usize)
                .map_or(Vec2::ZERO, |p| p.truncate())
        };
        self.triangles()
            .map(|[a, b, c]| 0.5 * cross_2d(at(a), at(b), at(c)))
            .sum()
    }

    fn flip_winding(&mut self) {
        for triangle in self.indices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
    }
}

// =============================================================================
// TESSELLATOR
// =============================================================================

/// Triangulates piece contours.
///
/// Implementations are shared across worker threads.
pub trait Tessellator: Send + Sync {
    /// Triangulates the region enclosed by `contour`, with normals facing −z.
    ///
    /// # Errors
    ///
    /// `Tessellation` when the contour cannot be triangulated.
    fn tessellate(
        &self,
        contour: &PieceContour,
        options: &TessellationOptions,
    ) -> JigsawResult<FlatPolygonMesh>;
}

/// Adaptive flattening followed by ear-clipping triangulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarcutTessellator;

impl Tessellator for EarcutTessellator {
    fn tessellate(
        &self,
        contour: &PieceContour,
        options: &TessellationOptions,
    ) -> JigsawResult<FlatPolygonMesh> {
        let cell = contour.cell();
        let outline = flatten::flatten_contour(contour, options);
        if outline.len() < 3 {
            return Err(JigsawError::Tessellation {
                cell,
                message: format!("contour flattened to {} points", outline.len()),
            });
        }

        let coords: Vec<f64> = outline.iter().flat_map(|p| [p.x, p.y]).collect();
        let hole_indices: Vec<usize> = Vec::new();
        let triangles = earcutr::earcut(&coords, &hole_indices, 2).map_err(|err| {
            JigsawError::Tessellation {
                cell,
                message: format!("{err:?}"),
            }
        })?;
        if triangles.is_empty() {
            return Err(JigsawError::Tessellation {
                cell,
                message: "no triangles produced".to_string(),
            });
        }

        let mesh = FlatPolygonMesh::from_polygon(&outline, &triangles).map_err(|err| {
            JigsawError::Tessellation {
                cell,
                message: err.to_string(),
            }
        })?;
        log::debug!(
            "tessellated piece {}: {} outline points, {} triangles",
            cell,
            outline.len(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests;
