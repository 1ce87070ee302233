//! Placement of extruded pieces in image space.
//!
//! Contour geometry lives in the normalized `[0, 1] × [0, 1]` rectangle.
//! [`PlacementLayout`] maps it to pixel space, centres each piece on its own
//! cell and computes the offset that puts the piece back into its slot of a
//! puzzle centred on the origin.
//!
//! ```text
//!   y
//!   ↑  ┌─────┬─────┐
//!   │  │(0,1)│(1,1)│      offset = cell centre − image centre
//!   │  ├─────┼──●──┤      ● = origin after reassembly
//!   │  │(0,0)│(1,0)│
//!   │  └─────┴─────┘
//!   └────────────────→ x
//! ```

use crate::config::ImageSize;
use crate::core::lattice::{CellIndex, GridSize};
use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;
use crate::mesh::SolidMesh;

// =============================================================================
// PLACEMENT LAYOUT
// =============================================================================

/// Maps normalized piece geometry to pixel space for one grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementLayout {
    grid: GridSize,
    image: ImageSize,
}

impl PlacementLayout {
    /// Layout for `grid`, using the unit square when no image is bound.
    pub fn new(grid: GridSize, image: Option<ImageSize>) -> Self {
        Self {
            grid,
            image: image.unwrap_or_default(),
        }
    }

    /// Image dimensions in use.
    pub fn image(&self) -> ImageSize {
        self.image
    }

    /// Size of one cell in pixels.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::{GridSize, ImageSize, PlacementLayout};
    /// let layout = PlacementLayout::new(GridSize::new(4, 2), Some(ImageSize::new(800.0, 600.0)));
    /// assert_eq!(layout.cell_size().x, 200.0);
    /// assert_eq!(layout.cell_size().y, 300.0);
    /// ```
    pub fn cell_size(&self) -> Vec2 {
        self.image.as_vec2() / self.grid.as_vec2()
    }

    /// Centre of `cell` in pixels, measured from the image's lower-left corner.
    pub fn cell_center(&self, cell: CellIndex) -> Vec2 {
        let index = Vec2::new(cell.x as f64, cell.y as f64);
        (index + Vec2::splat(0.5)) * self.cell_size()
    }

    /// Translation that moves a recentred piece into its grid slot, with the
    /// whole puzzle centred on the origin.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::{CellIndex, GridSize, PlacementLayout, Vec3};
    /// let layout = PlacementLayout::new(GridSize::new(2, 2), None);
    /// assert_eq!(layout.offset(CellIndex::new(0, 0)), Vec3::new(-0.25, -0.25, 0.0));
    /// assert_eq!(layout.offset(CellIndex::new(1, 0)), Vec3::new(0.25, -0.25, 0.0));
    /// ```
    pub fn offset(&self, cell: CellIndex) -> Vec3 {
        (self.cell_center(cell) - self.image.as_vec2() * 0.5).extend(0.0)
    }

    /// Sets UVs from the normalized positions, then scales positions to
    /// pixels and recentres them on the cell centre. Depth is left as is.
    pub fn remap(&self, cell: CellIndex, mesh: &mut SolidMesh) {
        let scale = self.image.as_vec2();
        for (position, uv) in mesh.positions.iter_mut().zip(mesh.uvs.iter_mut()) {
            let normalized = position.truncate();
            *uv = normalized;
            *position = (normalized * scale).extend(position.z);
        }
        mesh.translate(-self.cell_center(cell).extend(0.0));
    }

    /// Remaps `mesh` and wraps it with its placement.
    pub fn place(&self, cell: CellIndex, mut mesh: SolidMesh) -> PlacedPiece {
        self.remap(cell, &mut mesh);
        PlacedPiece {
            id: cell,
            mesh,
            offset: self.offset(cell),
        }
    }
}

// =============================================================================
// PLACED PIECE
// =============================================================================

/// One finished puzzle piece.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPiece {
    /// Grid cell the piece was cut from.
    pub id: CellIndex,
    /// Solid in local coordinates centred on the piece.
    pub mesh: SolidMesh,
    /// Local translation that reassembles the puzzle.
    pub offset: Vec3,
}

impl PlacedPiece {
    /// Display name of the piece, e.g. `"(1, 0)"`.
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    /// Vertex positions with the placement offset applied.
    pub fn assembled_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.mesh.positions.iter().map(move |p| *p + self.offset)
    }
}
