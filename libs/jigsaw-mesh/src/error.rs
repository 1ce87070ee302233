//! # Error Types
//!
//! Error types for jigsaw generation. All errors are explicit and carry the
//! lattice points or vertex indices needed to locate the fault.
//!
//! ## Error Policy
//!
//! - Out-of-range grid sizes are clamped upstream and never reach here
//! - Malformed triangulations fail only the piece they belong to
//! - Degenerate lattice requests are caller bugs and fail loudly

use crate::core::lattice::{CellIndex, LatticePoint};
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating jigsaw pieces.
///
/// ## Example
///
/// ```rust
/// use jigsaw_mesh::{JigsawConfig, JigsawError};
///
/// match JigsawConfig::new(2, 2, -1.0) {
///     Ok(_) => unreachable!(),
///     Err(JigsawError::InvalidConfig { message }) => assert!(message.contains("thickness")),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JigsawError {
    /// The parameter bundle cannot be used for generation.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        message: String,
    },

    /// A border was requested between a lattice point and itself.
    #[error("Degenerate border requested at {point}")]
    DegenerateEdge {
        /// The repeated lattice point.
        point: LatticePoint,
    },

    /// A border was requested between two lattice points that are not one
    /// unit step apart.
    #[error("Lattice points {begin} and {end} are not adjacent")]
    NonAdjacentLattice {
        /// First requested point.
        begin: LatticePoint,
        /// Second requested point.
        end: LatticePoint,
    },

    /// A curved border was requested for an edge on the outer rectangle,
    /// which must stay straight.
    #[error("Edge {begin} -> {end} lies on the puzzle boundary")]
    BoundaryBorder {
        /// Start of the requested edge.
        begin: LatticePoint,
        /// End of the requested edge.
        end: LatticePoint,
    },

    /// A contour was assembled from a cache that had not been populated for
    /// one of its interior edges.
    #[error("No cached border between {begin} and {end}")]
    MissingBorder {
        /// Start of the missing edge.
        begin: LatticePoint,
        /// End of the missing edge.
        end: LatticePoint,
    },

    /// The tessellation collaborator failed to triangulate a contour.
    #[error("Tessellation of piece {cell} failed: {message}")]
    Tessellation {
        /// Piece whose contour was being triangulated.
        cell: CellIndex,
        /// Error details from the tessellator.
        message: String,
    },

    /// A triangle references a vertex that does not exist.
    #[error("Triangle {triangle} references vertex {index} but only {vertex_count} exist")]
    IndexOutOfBounds {
        /// Offending triangle.
        triangle: usize,
        /// Offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// The flat mesh is malformed in a way that does not involve a specific
    /// edge (empty, index list not a multiple of three, collapsed triangle).
    #[error("Malformed triangulation: {message}")]
    MalformedTriangulation {
        /// Description of the defect.
        message: String,
    },

    /// An undirected edge is shared by more than two triangles.
    #[error("Mesh is not manifold: edge ({a}, {b}) is used by {count} triangles")]
    NonManifoldEdge {
        /// Lower vertex index.
        a: u32,
        /// Higher vertex index.
        b: u32,
        /// Number of triangles using the edge.
        count: usize,
    },

    /// Two triangles traverse the same edge in the same direction.
    #[error("Mesh has inconsistent winding on edge {from} -> {to}")]
    InconsistentWinding {
        /// Start vertex of the repeated directed edge.
        from: u32,
        /// End vertex of the repeated directed edge.
        to: u32,
    },

    /// The outline edges do not close into exactly one loop.
    #[error("Outline is not a single closed loop: {message}")]
    OpenOutline {
        /// Description of how the outline is broken.
        message: String,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for jigsaw operations.
///
/// ## Example
///
/// ```rust
/// use jigsaw_mesh::error::JigsawResult;
/// use jigsaw_mesh::SolidMesh;
///
/// fn create_mesh() -> JigsawResult<SolidMesh> {
///     // ... mesh creation logic
///     # Ok(SolidMesh::new())
/// }
/// ```
pub type JigsawResult<T> = Result<T, JigsawError>;

impl JigsawError {
    /// Whether this error comes from a malformed triangulation, which is
    /// fatal for one piece but leaves the others valid.
    pub fn is_piece_local(&self) -> bool {
        matches!(
            self,
            JigsawError::Tessellation { .. }
                | JigsawError::IndexOutOfBounds { .. }
                | JigsawError::MalformedTriangulation { .. }
                | JigsawError::NonManifoldEdge { .. }
                | JigsawError::InconsistentWinding { .. }
                | JigsawError::OpenOutline { .. }
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
