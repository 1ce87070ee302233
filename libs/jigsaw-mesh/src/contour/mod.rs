//! # Piece Contours
//!
//! Closed outline of one grid cell, assembled from straight sides on the
//! outer rectangle and cached border curves everywhere else.
//!
//! ## Winding
//!
//! ```text
//!   even cell (x+y even)        odd cell (x+y odd)
//!
//!   3 ←──── 2                   1 ────→ 2
//!   │       ↑                   ↑       │
//!   ↓       │                   │       ↓
//!   0 ────→ 1                   0 ←──── 3
//! ```
//!
//! Neighbouring cells always have opposite parity, so both owners of an
//! interior edge walk it in the same world direction and append the cached
//! curve as is.

use rand::Rng;

use crate::border::{BorderCache, BorderCurve, CubicBezier, PathSegment};
use crate::core::lattice::{CellIndex, GridSize, LatticePoint};
use crate::core::vec2::Vec2;
use crate::error::{JigsawError, JigsawResult};

// =============================================================================
// WINDING
// =============================================================================

/// Rotational order in which a cell visits its four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    /// `(x,y) → (x+1,y) → (x+1,y+1) → (x,y+1)`, used by even cells.
    CounterClockwise,
    /// `(x,y) → (x,y+1) → (x+1,y+1) → (x+1,y)`, used by odd cells.
    Clockwise,
}

impl Winding {
    /// Winding used by `cell`, alternating like a checkerboard.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::contour::Winding;
    /// use jigsaw_mesh::CellIndex;
    ///
    /// assert_eq!(Winding::for_cell(CellIndex::new(0, 0)), Winding::CounterClockwise);
    /// assert_eq!(Winding::for_cell(CellIndex::new(1, 0)), Winding::Clockwise);
    /// ```
    pub fn for_cell(cell: CellIndex) -> Self {
        if cell.is_even() {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// The cell's corners in visiting order.
    pub fn corners(self, cell: CellIndex) -> [LatticePoint; 4] {
        match self {
            Winding::CounterClockwise => [
                cell.corner(0, 0),
                cell.corner(1, 0),
                cell.corner(1, 1),
                cell.corner(0, 1),
            ],
            Winding::Clockwise => [
                cell.corner(0, 0),
                cell.corner(0, 1),
                cell.corner(1, 1),
                cell.corner(1, 0),
            ],
        }
    }

    /// The four corner-to-corner steps, closing back on the first corner.
    pub fn steps(self, cell: CellIndex) -> [(LatticePoint, LatticePoint); 4] {
        let c = self.corners(cell);
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }
}

// =============================================================================
// SIDES
// =============================================================================

/// One of the four sides of a piece contour.
#[derive(Debug, Clone, PartialEq)]
pub enum Side {
    /// A side on the outer rectangle.
    Straight {
        /// Normalized start position.
        start: Vec2,
        /// Normalized end position.
        finish: Vec2,
    },
    /// An interior side, oriented along the cell's winding.
    Border(BorderCurve),
}

impl Side {
    /// Normalized position where the side starts.
    pub fn start_point(&self) -> Vec2 {
        match self {
            Side::Straight { start, .. } => *start,
            Side::Border(curve) => curve.start_point(),
        }
    }

    /// Normalized position where the side ends.
    pub fn end_point(&self) -> Vec2 {
        match self {
            Side::Straight { finish, .. } => *finish,
            Side::Border(curve) => curve.end_point(),
        }
    }

    /// Whether this side lies on the outer rectangle.
    pub fn is_straight(&self) -> bool {
        matches!(self, Side::Straight { .. })
    }

    fn push_segments(&self, out: &mut Vec<PathSegment>) {
        match self {
            Side::Straight { start, finish } => out.push(PathSegment::straight(*start, *finish)),
            Side::Border(curve) => out.extend_from_slice(curve.segments()),
        }
    }
}

// =============================================================================
// PIECE CONTOUR
// =============================================================================

/// Closed loop of path segments outlining one piece.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceContour {
    cell: CellIndex,
    winding: Winding,
    sides: Vec<Side>,
}

impl PieceContour {
    /// Assembles the contour of `cell`, generating missing borders on demand.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `cell` is outside the cache's grid; lattice
    /// validation errors from the cache are propagated.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::{BorderCache, CellIndex, GridSize, PieceContour};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut cache = BorderCache::new(GridSize::new(2, 2));
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let contour = PieceContour::build(CellIndex::new(0, 0), &mut cache, &mut rng).unwrap();
    /// assert_eq!(contour.straight_side_count(), 2);
    /// assert_eq!(contour.curved_side_count(), 2);
    /// ```
    pub fn build<R: Rng + ?Sized>(
        cell: CellIndex,
        cache: &mut BorderCache,
        rng: &mut R,
    ) -> JigsawResult<Self> {
        let grid = cache.grid();
        Self::assemble(cell, grid, |begin, end| cache.get_or_create(begin, end, &mut *rng))
    }

    /// Assembles the contour of `cell` from a cache that already holds every
    /// interior border.
    ///
    /// # Errors
    ///
    /// `MissingBorder` when the cache was not populated for one of the
    /// cell's interior edges.
    pub fn from_populated(cell: CellIndex, cache: &BorderCache) -> JigsawResult<Self> {
        Self::assemble(cell, cache.grid(), |begin, end| cache.get(begin, end))
    }

    fn assemble<F>(cell: CellIndex, grid: GridSize, mut border: F) -> JigsawResult<Self>
    where
        F: FnMut(LatticePoint, LatticePoint) -> JigsawResult<BorderCurve>,
    {
        if !grid.contains(cell) {
            return Err(JigsawError::InvalidConfig {
                message: format!(
                    "cell {cell} outside {}x{} grid",
                    grid.horizontal, grid.vertical
                ),
            });
        }
        let winding = Winding::for_cell(cell);
        let sides = winding
            .steps(cell)
            .into_iter()
            .map(|(begin, end)| {
                if grid.is_boundary_step(begin, end) {
                    Ok(Side::Straight {
                        start: begin.normalized(grid),
                        finish: end.normalized(grid),
                    })
                } else {
                    border(begin, end).map(Side::Border)
                }
            })
            .collect::<JigsawResult<Vec<_>>>()?;

        Ok(Self {
            cell,
            winding,
            sides,
        })
    }

    /// Cell this contour outlines.
    pub fn cell(&self) -> CellIndex {
        self.cell
    }

    /// Corner visiting order.
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// The four sides in visiting order.
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// Number of sides on the outer rectangle.
    pub fn straight_side_count(&self) -> usize {
        self.sides.iter().filter(|s| s.is_straight()).count()
    }

    /// Number of interior sides.
    pub fn curved_side_count(&self) -> usize {
        self.sides.len() - self.straight_side_count()
    }

    /// Concatenated path segments. The last segment closes on the first
    /// anchor.
    pub fn segments(&self) -> Vec<PathSegment> {
        let mut out = Vec::new();
        for side in &self.sides {
            side.push_segments(&mut out);
        }
        out
    }

    /// Every segment as an explicit cubic, in order around the loop.
    pub fn cubics(&self) -> Vec<CubicBezier> {
        let segments = self.segments();
        let count = segments.len();
        segments
            .iter()
            .enumerate()
            .map(|(i, segment)| segment.to_cubic(segments[(i + 1) % count].p0))
            .collect()
    }
}
