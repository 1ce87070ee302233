//! Per-run store of interior border curves.
//!
//! Every interior edge is generated exactly once and handed to both pieces
//! that share it, which is what makes neighbouring pieces interlock. Curves
//! are stored in the orientation of their first request; a request for the
//! opposite orientation receives a reversed copy of the same geometry.

use std::collections::hash_map::{Entry, HashMap};

use rand::Rng;

use super::BorderCurve;
use crate::contour::Winding;
use crate::core::lattice::{EdgeKey, GridSize, LatticePoint};
use crate::error::{JigsawError, JigsawResult};

/// Interior border curves keyed by their unordered edge.
#[derive(Debug, Clone, Default)]
pub struct BorderCache {
    grid: GridSize,
    borders: HashMap<EdgeKey, BorderCurve>,
}

impl BorderCache {
    /// Empty cache for one generation run over `grid`.
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            borders: HashMap::with_capacity(grid.interior_edge_count()),
        }
    }

    /// Grid the cached curves were generated for.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Number of distinct borders generated so far.
    pub fn len(&self) -> usize {
        self.borders.len()
    }

    /// Whether no border has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }

    /// Whether the border for `key` exists.
    pub fn contains(&self, key: &EdgeKey) -> bool {
        self.borders.contains_key(key)
    }

    /// Stored curves in their original orientation, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &BorderCurve> + '_ {
        self.borders.values()
    }

    /// The border `begin → end`, generating it on first request.
    ///
    /// The returned curve always starts at `begin`: the stored curve itself
    /// when the orientation matches, otherwise its reversal.
    ///
    /// # Errors
    ///
    /// `DegenerateEdge` / `NonAdjacentLattice` for invalid point pairs and
    /// `BoundaryBorder` for edges on the outer rectangle.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::{BorderCache, GridSize, LatticePoint};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut cache = BorderCache::new(GridSize::new(2, 2));
    /// let a = LatticePoint::new(1, 0);
    /// let b = LatticePoint::new(1, 1);
    ///
    /// let forward = cache.get_or_create(a, b, &mut rng).unwrap();
    /// let backward = cache.get_or_create(b, a, &mut rng).unwrap();
    /// assert_eq!(cache.len(), 1);
    /// assert_eq!(backward, forward.reversed());
    /// ```
    pub fn get_or_create<R: Rng + ?Sized>(
        &mut self,
        begin: LatticePoint,
        end: LatticePoint,
        rng: &mut R,
    ) -> JigsawResult<BorderCurve> {
        let key = EdgeKey::new(begin, end)?;
        if self.grid.is_boundary_step(begin, end) {
            return Err(JigsawError::BoundaryBorder { begin, end });
        }

        let curve = match self.borders.entry(key) {
            Entry::Occupied(stored) => stored.into_mut(),
            Entry::Vacant(slot) => {
                let curve = BorderCurve::generate(begin, end, self.grid, rng)?;
                log::debug!(
                    "generated border {} ({:?} tab)",
                    key,
                    curve.direction()
                );
                slot.insert(curve)
            }
        };
        curve.oriented(begin, end)
    }

    /// The already generated border `begin → end`.
    ///
    /// # Errors
    ///
    /// `MissingBorder` if the edge has not been generated, plus the point
    /// validation errors of [`EdgeKey::new`].
    pub fn get(&self, begin: LatticePoint, end: LatticePoint) -> JigsawResult<BorderCurve> {
        let key = EdgeKey::new(begin, end)?;
        self.borders
            .get(&key)
            .ok_or(JigsawError::MissingBorder { begin, end })?
            .oriented(begin, end)
    }

    /// Generates every interior border of the grid.
    ///
    /// Cells are visited in x-major order and each cell's edges in its
    /// winding order, so a given seed always yields the same borders.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> JigsawResult<()> {
        let grid = self.grid;
        for cell in grid.cells() {
            for (begin, end) in Winding::for_cell(cell).steps(cell) {
                if !grid.is_boundary_step(begin, end) {
                    self.get_or_create(begin, end, rng)?;
                }
            }
        }
        log::debug!(
            "populated {} borders for {}x{} grid",
            self.len(),
            grid.horizontal,
            grid.vertical
        );
        Ok(())
    }
}
