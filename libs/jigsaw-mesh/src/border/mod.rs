//! # Border Curves
//!
//! Interlocking tab/blank curves between two adjacent lattice points.
//!
//! ## Path convention
//!
//! A [`PathSegment`] stores an on-curve anchor `p0` and two control points
//! `p1`, `p2`. The segment ends at the anchor of the following segment (or at
//! the border's end point for the last one), so segment *i* evaluates as the
//! cubic `(p0ᵢ, p1ᵢ, p2ᵢ, p0ᵢ₊₁)`.
//!
//! ## Tab profile
//!
//! ```text
//!              ___
//!             /   \          <- segments 1..=3 bulge by ±h
//!   _________|     |_________
//!   begin   0.4   0.6     end
//! ```
//!
//! The first and last segments stay on the begin→end axis so the tab meets
//! the straight run-in and run-out tangentially.

pub mod cache;

use rand::Rng;

use crate::core::lattice::{EdgeKey, GridSize, LatticePoint};
use crate::core::vec2::{unit_x, unit_y, Vec2};
use crate::error::{JigsawError, JigsawResult};
use config::constants::{BORDER_SEGMENT_COUNT, EPSILON_TOLERANCE, TAB_HEIGHT_FACTOR};

pub use cache::BorderCache;

// =============================================================================
// TAB PROFILE
// =============================================================================

/// `(fraction along begin→end, multiple of the tab height)` for the three
/// points of each segment.
const TAB_PROFILE: [[(f64, f64); 3]; BORDER_SEGMENT_COUNT] = [
    [(0.0, 0.0), (0.1, 0.0), (0.3, 0.0)],
    [(0.4, 0.0), (0.4, 1.0 / 3.0), (0.3, 1.0 / 3.0)],
    [(0.3, 0.5), (0.3, 1.0), (0.7, 1.0)],
    [(0.7, 0.5), (0.7, 1.0 / 3.0), (0.6, 1.0 / 3.0)],
    [(0.6, 0.0), (0.7, 0.0), (1.0, 0.0)],
];

// =============================================================================
// PATH SEGMENTS
// =============================================================================

/// One span of a bezier path: an anchor followed by two control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    /// On-curve anchor where the span starts.
    pub p0: Vec2,
    /// First control point.
    pub p1: Vec2,
    /// Second control point.
    pub p2: Vec2,
}

impl PathSegment {
    /// Straight span from `begin`; the first control point sits on the start
    /// point so the span is the line `begin → end`.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::border::PathSegment;
    /// use jigsaw_mesh::core::vec2::Vec2;
    ///
    /// let seg = PathSegment::straight(Vec2::ZERO, Vec2::X);
    /// let mid = seg.to_cubic(Vec2::X).evaluate(0.5);
    /// assert!((mid - Vec2::new(0.5, 0.0)).length() < 1e-12);
    /// ```
    pub fn straight(begin: Vec2, end: Vec2) -> Self {
        Self {
            p0: begin,
            p1: begin,
            p2: end,
        }
    }

    /// The cubic this span describes when followed by `next_anchor`.
    pub fn to_cubic(&self, next_anchor: Vec2) -> CubicBezier {
        CubicBezier {
            p0: self.p0,
            p1: self.p1,
            p2: self.p2,
            p3: next_anchor,
        }
    }
}

/// Cubic bezier with explicit end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point.
    pub p0: Vec2,
    /// First control point.
    pub p1: Vec2,
    /// Second control point.
    pub p2: Vec2,
    /// End point.
    pub p3: Vec2,
}

impl CubicBezier {
    /// Point at parameter `t` in `[0, 1]`.
    pub fn evaluate(&self, t: f64) -> Vec2 {
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.p1 * (3.0 * u * u * t)
            + self.p2 * (3.0 * u * t * t)
            + self.p3 * (t * t * t)
    }

    /// First derivative at parameter `t`.
    pub fn derivative(&self, t: f64) -> Vec2 {
        let u = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * u * u)
            + (self.p2 - self.p1) * (6.0 * u * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// Unit tangent at `t`.
    ///
    /// Coincident control points make the derivative vanish at the ends; the
    /// chord direction stands in for it there.
    pub fn tangent(&self, t: f64) -> Vec2 {
        let d = self.derivative(t);
        if d.length() > EPSILON_TOLERANCE {
            return d.normalize();
        }
        (self.p3 - self.p0).normalize_or_zero()
    }

    /// The same curve traversed from `p3` to `p0`.
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p3,
            p1: self.p2,
            p2: self.p1,
            p3: self.p0,
        }
    }
}

// =============================================================================
// TAB DIRECTION
// =============================================================================

/// Side of the begin→end axis the tab bulges towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabDirection {
    /// Towards +x for vertical edges, +y for horizontal edges.
    Positive,
    /// Towards −x for vertical edges, −y for horizontal edges.
    Negative,
}

impl TabDirection {
    /// Draws a direction with a fair coin flip.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            TabDirection::Positive
        } else {
            TabDirection::Negative
        }
    }

    /// `1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            TabDirection::Positive => 1.0,
            TabDirection::Negative => -1.0,
        }
    }
}

// =============================================================================
// BORDER CURVE
// =============================================================================

/// Tab height relative to the edge length.
///
/// The bulge is always [`TAB_HEIGHT_FACTOR`] of the cell extent in the bulge
/// direction: a vertical edge of length `1/V` bulges by `TAB_HEIGHT_FACTOR / H`.
///
/// # Examples
/// ```
/// use jigsaw_mesh::border::height_ratio;
/// use jigsaw_mesh::GridSize;
///
/// // Square grids use a quarter of the edge length
/// assert_eq!(height_ratio(true, GridSize::new(4, 4)), 0.25);
/// ```
pub fn height_ratio(vertical: bool, grid: GridSize) -> f64 {
    let (along, perpendicular) = if vertical {
        (grid.vertical as f64, grid.horizontal as f64)
    } else {
        (grid.horizontal as f64, grid.vertical as f64)
    };
    TAB_HEIGHT_FACTOR * along / perpendicular
}

/// Wavy curve shared by the two cells on either side of an interior edge.
///
/// Positions are in the normalized `[0, 1] × [0, 1]` puzzle rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderCurve {
    key: EdgeKey,
    begin: LatticePoint,
    end: LatticePoint,
    finish: Vec2,
    direction: TabDirection,
    segments: Vec<PathSegment>,
}

impl BorderCurve {
    /// Generates the border `begin → end`, flipping a coin for the tab side.
    ///
    /// # Errors
    ///
    /// `DegenerateEdge` / `NonAdjacentLattice` when the points do not form a
    /// grid edge.
    pub fn generate<R: Rng + ?Sized>(
        begin: LatticePoint,
        end: LatticePoint,
        grid: GridSize,
        rng: &mut R,
    ) -> JigsawResult<Self> {
        Self::with_direction(begin, end, grid, TabDirection::random(rng))
    }

    /// Builds the border `begin → end` with a fixed tab side.
    ///
    /// # Examples
    /// ```
    /// use jigsaw_mesh::border::{BorderCurve, TabDirection};
    /// use jigsaw_mesh::{GridSize, LatticePoint};
    ///
    /// let curve = BorderCurve::with_direction(
    ///     LatticePoint::new(1, 0),
    ///     LatticePoint::new(1, 1),
    ///     GridSize::new(2, 2),
    ///     TabDirection::Positive,
    /// )
    /// .unwrap();
    /// assert_eq!(curve.segments().len(), 5);
    /// // Vertical edge: the tab bulges along +x
    /// assert!(curve.evaluate(0.5).x > 0.5);
    /// ```
    pub fn with_direction(
        begin: LatticePoint,
        end: LatticePoint,
        grid: GridSize,
        direction: TabDirection,
    ) -> JigsawResult<Self> {
        let key = EdgeKey::new(begin, end)?;
        let start = begin.normalized(grid);
        let finish = end.normalized(grid);
        let vertical = key.is_vertical();
        let axis = if vertical { unit_x() } else { unit_y() } * direction.sign();
        let height = start.distance(finish) * height_ratio(vertical, grid);

        let at = |(fraction, multiple): (f64, f64)| {
            start.lerp(finish, fraction) + axis * (height * multiple)
        };
        let segments = TAB_PROFILE
            .iter()
            .map(|points| PathSegment {
                p0: at(points[0]),
                p1: at(points[1]),
                p2: at(points[2]),
            })
            .collect();

        Ok(Self {
            key,
            begin,
            end,
            finish,
            direction,
            segments,
        })
    }

    /// Cache key of the edge this curve spans.
    pub fn key(&self) -> EdgeKey {
        self.key
    }

    /// Lattice point the curve starts at.
    pub fn begin(&self) -> LatticePoint {
        self.begin
    }

    /// Lattice point the curve ends at.
    pub fn end(&self) -> LatticePoint {
        self.end
    }

    /// Normalized start position.
    pub fn start_point(&self) -> Vec2 {
        self.segments.first().map_or(self.finish, |s| s.p0)
    }

    /// Normalized end position.
    pub fn end_point(&self) -> Vec2 {
        self.finish
    }

    /// Tab side relative to the canonical axis.
    pub fn direction(&self) -> TabDirection {
        self.direction
    }

    /// Path segments in traversal order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Each segment expanded into its explicit cubic.
    pub fn cubics(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        self.segments.iter().enumerate().map(move |(i, segment)| {
            let next = self.segments.get(i + 1).map_or(self.finish, |s| s.p0);
            segment.to_cubic(next)
        })
    }

    /// Point at parameter `t` in `[0, 1]` over the whole curve, with each
    /// segment taking an equal share of the parameter range.
    pub fn evaluate(&self, t: f64) -> Vec2 {
        let count = self.segments.len();
        if count == 0 {
            return self.finish;
        }
        let scaled = t.clamp(0.0, 1.0) * count as f64;
        let index = (scaled.floor() as usize).min(count - 1);
        let local = scaled - index as f64;
        let next = self.segments.get(index + 1).map_or(self.finish, |s| s.p0);
        self.segments[index].to_cubic(next).evaluate(local)
    }

    /// The same geometric curve walked `end → begin`.
    ///
    /// `reversed().evaluate(1 - t) == evaluate(t)` for every `t`.
    pub fn reversed(&self) -> Self {
        let count = self.segments.len();
        let anchor = |i: usize| self.segments.get(i).map_or(self.finish, |s| s.p0);
        let segments = (0..count)
            .map(|j| {
                let source = &self.segments[count - 1 - j];
                PathSegment {
                    p0: anchor(count - j),
                    p1: source.p2,
                    p2: source.p1,
                }
            })
            .collect();

        Self {
            key: self.key,
            begin: self.end,
            end: self.begin,
            finish: self.start_point(),
            direction: self.direction,
            segments,
        }
    }

    /// This curve oriented to run `begin → end`.
    ///
    /// # Errors
    ///
    /// `NonAdjacentLattice` if `begin → end` is not this curve's edge.
    pub fn oriented(&self, begin: LatticePoint, end: LatticePoint) -> JigsawResult<Self> {
        if self.begin == begin && self.end == end {
            Ok(self.clone())
        } else if self.begin == end && self.end == begin {
            Ok(self.reversed())
        } else {
            Err(JigsawError::NonAdjacentLattice { begin, end })
        }
    }
}
