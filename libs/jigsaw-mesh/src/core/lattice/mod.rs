//! Integer lattice of grid corners, cells and edges.
//!
//! A grid of `H × V` cells has `(H + 1) × (V + 1)` lattice points. Each cell
//! is addressed by its lower-left corner; each interior edge by an
//! [`EdgeKey`] built from its two end points.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;
use crate::error::{JigsawError, JigsawResult};
use config::constants::clamp_grid_divisions;

// =============================================================================
// LATTICE POINT
// =============================================================================

/// Integer grid-corner coordinate in `[0, H] × [0, V]`.
///
/// Ordering is lexicographic (`x`, then `y`), which is what canonicalizes
/// an [`EdgeKey`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct LatticePoint {
    /// Column of the corner.
    pub x: u32,
    /// Row of the corner.
    pub y: u32,
}

impl LatticePoint {
    /// Creates a lattice point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Position of this corner in the normalized `[0, 1] × [0, 1]` rectangle.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::{GridSize, LatticePoint};
    /// let p = LatticePoint::new(1, 3).normalized(GridSize::new(2, 4));
    /// assert_eq!((p.x, p.y), (0.5, 0.75));
    /// ```
    pub fn normalized(self, grid: GridSize) -> Vec2 {
        Vec2::new(
            self.x as f64 / grid.horizontal as f64,
            self.y as f64 / grid.vertical as f64,
        )
    }

    /// Whether `other` is exactly one unit step away along x or y.
    pub fn is_adjacent(self, other: LatticePoint) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// CELL INDEX
// =============================================================================

/// Grid cell `(x, y)` with `0 <= x < H` and `0 <= y < V`.
///
/// Doubles as the stable identifier of the piece cut from that cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CellIndex {
    /// Column of the cell.
    pub x: u32,
    /// Row of the cell.
    pub y: u32,
}

impl CellIndex {
    /// Creates a cell index.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether `x + y` is even; decides the cell's winding.
    pub fn is_even(self) -> bool {
        (self.x + self.y) % 2 == 0
    }

    /// Corner of this cell offset by `(dx, dy)`, each 0 or 1.
    pub fn corner(self, dx: u32, dy: u32) -> LatticePoint {
        LatticePoint::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// GRID SIZE
// =============================================================================

/// Number of divisions along each axis of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Number of columns (H).
    pub horizontal: u32,
    /// Number of rows (V).
    pub vertical: u32,
}

impl GridSize {
    /// Creates a grid size, clamping each axis into the supported range.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::GridSize;
    /// let grid = GridSize::new(1, 50);
    /// assert_eq!((grid.horizontal, grid.vertical), (2, 10));
    /// ```
    pub fn new(horizontal: u32, vertical: u32) -> Self {
        let clamped = Self {
            horizontal: clamp_grid_divisions(horizontal),
            vertical: clamp_grid_divisions(vertical),
        };
        if clamped.horizontal != horizontal || clamped.vertical != vertical {
            log::warn!(
                "grid {}x{} outside supported range, clamped to {}x{}",
                horizontal,
                vertical,
                clamped.horizontal,
                clamped.vertical
            );
        }
        clamped
    }

    /// Total number of cells (and therefore pieces).
    pub fn cell_count(self) -> usize {
        self.horizontal as usize * self.vertical as usize
    }

    /// Number of edges shared by two cells: `H·(V−1) + V·(H−1)`.
    pub fn interior_edge_count(self) -> usize {
        let (h, v) = (self.horizontal as usize, self.vertical as usize);
        h * v.saturating_sub(1) + v * h.saturating_sub(1)
    }

    /// All cells in generation order: x-major, then y.
    pub fn cells(self) -> impl Iterator<Item = CellIndex> {
        (0..self.horizontal)
            .flat_map(move |x| (0..self.vertical).map(move |y| CellIndex::new(x, y)))
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(self, cell: CellIndex) -> bool {
        cell.x < self.horizontal && cell.y < self.vertical
    }

    /// Whether the step `begin → end` runs along the outer rectangle.
    pub fn is_boundary_step(self, begin: LatticePoint, end: LatticePoint) -> bool {
        (begin.x == 0 && end.x == 0)
            || (begin.y == 0 && end.y == 0)
            || (begin.x == self.horizontal && end.x == self.horizontal)
            || (begin.y == self.vertical && end.y == self.vertical)
    }

    /// Divisions as a vector, for per-axis arithmetic.
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.horizontal as f64, self.vertical as f64)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(
            config::constants::DEFAULT_GRID_DIVISIONS,
            config::constants::DEFAULT_GRID_DIVISIONS,
        )
    }
}

// =============================================================================
// EDGE KEY
// =============================================================================

/// Unordered pair of adjacent lattice points identifying one grid edge.
///
/// The pair is canonicalized so `EdgeKey::new(a, b) == EdgeKey::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    low: LatticePoint,
    high: LatticePoint,
}

impl EdgeKey {
    /// Builds the key for the edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// `DegenerateEdge` if `a == b`, `NonAdjacentLattice` if the points are
    /// not exactly one unit step apart.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::{EdgeKey, LatticePoint};
    /// let a = LatticePoint::new(1, 0);
    /// let b = LatticePoint::new(1, 1);
    /// assert_eq!(EdgeKey::new(a, b).unwrap(), EdgeKey::new(b, a).unwrap());
    /// ```
    pub fn new(a: LatticePoint, b: LatticePoint) -> JigsawResult<Self> {
        if a == b {
            return Err(JigsawError::DegenerateEdge { point: a });
        }
        if !a.is_adjacent(b) {
            return Err(JigsawError::NonAdjacentLattice { begin: a, end: b });
        }
        Ok(Self {
            low: a.min(b),
            high: a.max(b),
        })
    }

    /// Lexicographically smaller end point.
    pub fn low(&self) -> LatticePoint {
        self.low
    }

    /// Lexicographically larger end point.
    pub fn high(&self) -> LatticePoint {
        self.high
    }

    /// Whether both end points share an x coordinate.
    pub fn is_vertical(&self) -> bool {
        self.low.x == self.high.x
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
