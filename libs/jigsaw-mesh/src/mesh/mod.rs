//! # Mesh Module
//!
//! Triangle mesh for extruded puzzle pieces.
//!
//! ## Structure
//!
//! - `SolidMesh` - positions, UVs, normals and triangle indices
//! - `MeshBuffers` - flat `f32` arrays for host renderers
//! - `topology` - closed-manifold checks and volume
//!
//! ## Example
//!
//! ```rust
//! use jigsaw_mesh::{SolidMesh, Vec3};
//! use jigsaw_mesh::core::vec2::Vec2;
//!
//! let mut mesh = SolidMesh::new();
//! let v0 = mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0));
//! let v1 = mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), Vec2::new(1.0, 0.0));
//! let v2 = mesh.add_vertex(Vec3::new(0.5, 1.0, 0.0), Vec2::new(0.5, 1.0));
//! mesh.add_triangle(v0, v1, v2);
//! ```

pub mod topology;

use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;

// =============================================================================
// SOLID MESH
// =============================================================================

/// Triangle mesh of one extruded piece.
///
/// Per-vertex attributes are stored in parallel arrays; `uvs` and `normals`
/// always have one entry per position.
///
/// ## Example
///
/// ```rust
/// use jigsaw_mesh::SolidMesh;
///
/// let mesh = SolidMesh::new();
/// assert_eq!(mesh.vertex_count(), 0);
/// assert_eq!(mesh.triangle_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolidMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Texture coordinates in `[0, 1] × [0, 1]` image space.
    pub uvs: Vec<Vec2>,
    /// Smooth vertex normals; zero until [`SolidMesh::recalculate_normals`].
    pub normals: Vec<Vec3>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

impl SolidMesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create mesh with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity),
            uvs: Vec::with_capacity(vertex_capacity),
            normals: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    // =========================================================================
    // VERTEX OPERATIONS
    // =========================================================================

    /// Add a vertex and return its index.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use jigsaw_mesh::{SolidMesh, Vec3};
    /// use jigsaw_mesh::core::vec2::Vec2;
    ///
    /// let mut mesh = SolidMesh::new();
    /// let idx = mesh.add_vertex(Vec3::new(1.0, 2.0, 3.0), Vec2::ZERO);
    /// assert_eq!(idx, 0);
    /// ```
    pub fn add_vertex(&mut self, position: Vec3, uv: Vec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.uvs.push(uv);
        self.normals.push(Vec3::ZERO);
        index
    }

    /// Add a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Get the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` when empty.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use jigsaw_mesh::{SolidMesh, Vec3};
    /// use jigsaw_mesh::core::vec2::Vec2;
    ///
    /// let mut mesh = SolidMesh::new();
    /// assert!(mesh.bounds().is_none());
    /// mesh.add_vertex(Vec3::new(-1.0, 2.0, 0.0), Vec2::ZERO);
    /// mesh.add_vertex(Vec3::new(3.0, -4.0, 0.5), Vec2::ZERO);
    /// let (min, max) = mesh.bounds().unwrap();
    /// assert_eq!(min, Vec3::new(-1.0, -4.0, 0.0));
    /// assert_eq!(max, Vec3::new(3.0, 2.0, 0.5));
    /// ```
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }

    // =========================================================================
    // TRANSFORM OPERATIONS
    // =========================================================================

    /// Apply translation to all vertices.
    pub fn translate(&mut self, offset: Vec3) {
        for position in &mut self.positions {
            *position += offset;
        }
    }

    /// Recompute smooth vertex normals from the triangles.
    ///
    /// Each vertex gets the normalized sum of its triangles' area-weighted
    /// face normals. Vertices on no triangle keep a zero normal.
    pub fn recalculate_normals(&mut self) {
        let mut accumulated = vec![Vec3::ZERO; self.positions.len()];
        for [a, b, c] in self.triangles() {
            let (Some(pa), Some(pb), Some(pc)) = (
                self.positions.get(a as usize),
                self.positions.get(b as usize),
                self.positions.get(c as usize),
            ) else {
                continue;
            };
            let weighted = (*pb - *pa).cross(*pc - *pa);
            for index in [a, b, c] {
                accumulated[index as usize] += weighted;
            }
        }
        self.normals = accumulated
            .into_iter()
            .map(Vec3::normalize_or_zero)
            .collect();
    }

    /// Flat `f32` buffers for host renderers.
    #[must_use]
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            vertices: self
                .positions
                .iter()
                .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
                .collect(),
            normals: self
                .normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect(),
            uvs: self
                .uvs
                .iter()
                .flat_map(|uv| [uv.x as f32, uv.y as f32])
                .collect(),
            indices: self.indices.clone(),
        }
    }
}

// =============================================================================
// MESH BUFFERS
// =============================================================================

/// Flat render buffers.
///
/// ## Memory Layout
///
/// - `vertices`: [x0, y0, z0, x1, y1, z1, ...] - 3 floats per vertex
/// - `normals`: [nx0, ny0, nz0, ...] - 3 floats per vertex
/// - `uvs`: [u0, v0, u1, v1, ...] - 2 floats per vertex
/// - `indices`: [i0, i1, i2, ...] - 3 indices per triangle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions.
    pub vertices: Vec<f32>,
    /// Vertex normals.
    pub normals: Vec<f32>,
    /// Texture coordinates.
    pub uvs: Vec<f32>,
    /// Triangle indices.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests;
