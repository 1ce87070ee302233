//! # Jigsaw Mesh
//!
//! Procedural geometry engine for 3D jigsaw puzzles. A rectangle is cut into
//! an `H × V` grid; every interior edge gets one randomly oriented
//! tab/blank curve shared by both neighbouring cells, and every cell becomes
//! a watertight extruded solid placed back into image space.
//!
//! ## Pipeline
//!
//! ```text
//! JigsawConfig
//!     │
//!     ├─ BorderCache::populate        one curve per interior edge
//!     │
//!     └─ per cell, in parallel
//!          PieceContour               straight + cached curved sides
//!          Tessellator                flat triangulated polygon
//!          extrude_solid              front, back and wall triangles
//!          PlacementLayout            pixel space, offset, UVs
//!          ↓
//!        PlacedPiece
//! ```
//!
//! ## Example
//!
//! ```rust
//! use jigsaw_mesh::{JigsawConfig, JigsawGenerator};
//!
//! let config = JigsawConfig::new(3, 3, 0.1).unwrap().with_seed(42);
//! let puzzle = JigsawGenerator::new(config).unwrap().generate().unwrap();
//!
//! assert_eq!(puzzle.pieces.len(), 9);
//! assert_eq!(puzzle.border_count, 12);
//! for piece in &puzzle.pieces {
//!     assert!(piece.mesh.validate_closed().is_ok());
//! }
//! ```

pub mod border;
pub mod config;
pub mod contour;
pub mod core;
pub mod error;
pub mod generator;
pub mod layout;
pub mod mesh;
pub mod ops;
pub mod tessellate;

pub use crate::border::{BorderCache, BorderCurve};
pub use crate::config::{ImageSize, JigsawConfig, TessellationOptions};
pub use crate::contour::PieceContour;
pub use crate::core::lattice::{CellIndex, EdgeKey, GridSize, LatticePoint};
pub use crate::core::vec2::Vec2;
pub use crate::core::vec3::Vec3;
pub use crate::error::{JigsawError, JigsawResult};
pub use crate::generator::{GeneratedPuzzle, JigsawGenerator, PieceFailure};
pub use crate::layout::{PlacedPiece, PlacementLayout};
pub use crate::mesh::{MeshBuffers, SolidMesh};
pub use crate::ops::extrude::extrude_solid;
pub use crate::tessellate::{EarcutTessellator, FlatPolygonMesh, Tessellator};
