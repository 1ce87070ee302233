//! # Generator
//!
//! End-to-end puzzle generation.
//!
//! ## Pipeline
//!
//! 1. One single-threaded pass generates every interior border, x-major.
//! 2. Pieces fan out across threads: contour, tessellation, extrusion,
//!    placement and normals. The border cache is only read here.
//! 3. Per-piece triangulation failures are collected; the other pieces are
//!    still returned.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::border::BorderCache;
use crate::config::JigsawConfig;
use crate::contour::PieceContour;
use crate::core::lattice::{CellIndex, GridSize};
use crate::error::{JigsawError, JigsawResult};
use crate::layout::{PlacedPiece, PlacementLayout};
use crate::ops::extrude::extrude_solid;
use crate::tessellate::{EarcutTessellator, Tessellator};

// =============================================================================
// RESULTS
// =============================================================================

/// A piece that could not be built.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceFailure {
    /// Cell of the failed piece.
    pub cell: CellIndex,
    /// Why the piece failed.
    pub error: JigsawError,
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPuzzle {
    /// Grid the puzzle was cut on.
    pub grid: GridSize,
    /// Finished pieces, x-major then y.
    pub pieces: Vec<PlacedPiece>,
    /// Pieces whose triangulation could not be extruded.
    pub failures: Vec<PieceFailure>,
    /// Number of distinct interior borders generated.
    pub border_count: usize,
}

impl GeneratedPuzzle {
    /// Whether every cell produced a piece.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.pieces.len() == self.grid.cell_count()
    }

    /// The piece cut from `cell`, if it was built.
    pub fn piece(&self, cell: CellIndex) -> Option<&PlacedPiece> {
        self.pieces.iter().find(|piece| piece.id == cell)
    }
}

// =============================================================================
// GENERATOR
// =============================================================================

/// Builds all pieces of a puzzle from a [`JigsawConfig`].
///
/// # Examples
/// ```
/// use jigsaw_mesh::{JigsawConfig, JigsawGenerator};
///
/// let config = JigsawConfig::new(2, 2, 0.1).unwrap().with_seed(1);
/// let puzzle = JigsawGenerator::new(config).unwrap().generate().unwrap();
/// assert_eq!(puzzle.pieces.len(), 4);
/// assert_eq!(puzzle.border_count, 4);
/// assert!(puzzle.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct JigsawGenerator<T: Tessellator = EarcutTessellator> {
    config: JigsawConfig,
    tessellator: T,
}

impl JigsawGenerator<EarcutTessellator> {
    /// Generator using the stock earcut tessellator.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the configuration does not validate.
    pub fn new(config: JigsawConfig) -> JigsawResult<Self> {
        Self::with_tessellator(config, EarcutTessellator)
    }
}

impl<T: Tessellator> JigsawGenerator<T> {
    /// Generator using a custom tessellator.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the configuration does not validate.
    pub fn with_tessellator(config: JigsawConfig, tessellator: T) -> JigsawResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tessellator,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &JigsawConfig {
        &self.config
    }

    /// Runs the pipeline with an RNG seeded from the configuration, or from
    /// OS entropy when no seed is set.
    ///
    /// # Errors
    ///
    /// Only errors that are not local to one piece are returned; piece
    /// failures are reported in [`GeneratedPuzzle::failures`].
    pub fn generate(&self) -> JigsawResult<GeneratedPuzzle> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with_rng(&mut rng)
    }

    /// Runs the pipeline drawing tab directions from `rng`.
    ///
    /// # Errors
    ///
    /// See [`JigsawGenerator::generate`].
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> JigsawResult<GeneratedPuzzle> {
        let grid = self.config.grid();
        let mut cache = BorderCache::new(grid);
        cache.populate(rng)?;

        let layout = PlacementLayout::new(grid, self.config.image);
        let cells: Vec<CellIndex> = grid.cells().collect();
        let results: Vec<(CellIndex, JigsawResult<PlacedPiece>)> = cells
            .into_par_iter()
            .map(|cell| (cell, self.build_piece(cell, &cache, &layout)))
            .collect();

        let mut pieces = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (cell, result) in results {
            match result {
                Ok(piece) => pieces.push(piece),
                Err(error) if error.is_piece_local() => {
                    log::warn!("piece {} failed: {}", cell, error);
                    failures.push(PieceFailure { cell, error });
                }
                Err(error) => return Err(error),
            }
        }

        log::info!(
            "generated {}x{} puzzle: {} pieces, {} borders, {} failures",
            grid.horizontal,
            grid.vertical,
            pieces.len(),
            cache.len(),
            failures.len()
        );
        Ok(GeneratedPuzzle {
            grid,
            pieces,
            failures,
            border_count: cache.len(),
        })
    }

    /// Builds the piece for `cell` from a populated border cache.
    ///
    /// # Errors
    ///
    /// `MissingBorder` for an unpopulated cache, tessellation errors and
    /// the extruder's malformed-triangulation errors.
    pub fn build_piece(
        &self,
        cell: CellIndex,
        cache: &BorderCache,
        layout: &PlacementLayout,
    ) -> JigsawResult<PlacedPiece> {
        let contour = PieceContour::from_populated(cell, cache)?;
        let flat = self
            .tessellator
            .tessellate(&contour, &self.config.tessellation)?;
        let solid = extrude_solid(&flat, self.config.thickness)?;
        let mut piece = layout.place(cell, solid);
        piece.mesh.recalculate_normals();
        Ok(piece)
    }
}
