//! # Configuration Constants
//!
//! Centralized constants for the jigsaw piece generator. Grid limits, piece
//! proportions, tessellation defaults and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Grid**: Supported division counts and their clamping
//! - **Piece Shape**: Tab proportions and extrusion depth
//! - **Tessellation**: Defaults forwarded to the curve flattener

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Numerical tolerance used by the geometry engine.
///
/// Slightly looser than [`EPSILON`]; it decides when two flattened contour
/// points are the same vertex and when a tangent is too short to measure.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Smallest supported number of divisions along either grid axis.
///
/// # Examples
/// ```
/// use config::constants::MIN_GRID_DIVISIONS;
/// assert_eq!(MIN_GRID_DIVISIONS, 2);
/// ```
pub const MIN_GRID_DIVISIONS: u32 = 2;

/// Largest supported number of divisions along either grid axis.
///
/// # Examples
/// ```
/// use config::constants::{MAX_GRID_DIVISIONS, MIN_GRID_DIVISIONS};
/// assert!(MAX_GRID_DIVISIONS > MIN_GRID_DIVISIONS);
/// ```
pub const MAX_GRID_DIVISIONS: u32 = 10;

/// Division count used when none is configured.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_GRID_DIVISIONS;
/// let horizontal: Option<u32> = None;
/// assert_eq!(horizontal.unwrap_or(DEFAULT_GRID_DIVISIONS), 2);
/// ```
pub const DEFAULT_GRID_DIVISIONS: u32 = 2;

// =============================================================================
// PIECE SHAPE CONSTANTS
// =============================================================================

/// Default extrusion depth of a piece, in the same units as the source image.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_THICKNESS;
/// assert!(DEFAULT_THICKNESS > 0.0);
/// ```
pub const DEFAULT_THICKNESS: f64 = 0.1;

/// Tab height as a fraction of the cell extent in the bulge direction.
///
/// A tab on a vertical edge bulges horizontally by a quarter of the cell
/// width, so tabs on opposite sides of one cell can never meet.
///
/// # Examples
/// ```
/// use config::constants::TAB_HEIGHT_FACTOR;
/// assert!(TAB_HEIGHT_FACTOR * 2.0 < 1.0);
/// ```
pub const TAB_HEIGHT_FACTOR: f64 = 0.25;

/// Number of path segments that make up one interlocking border.
pub const BORDER_SEGMENT_COUNT: usize = 5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default maximum distance between two consecutive flattened points.
///
/// The stock value is large enough to never constrain a unit-square contour;
/// the deviation limits decide the resolution instead.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_STEP_DISTANCE;
/// assert!(DEFAULT_STEP_DISTANCE > 1.0);
/// ```
pub const DEFAULT_STEP_DISTANCE: f64 = 100.0;

/// Default maximum distance between a curve and its flattened chord.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_CORD_DEVIATION;
/// assert!(DEFAULT_MAX_CORD_DEVIATION > 0.0);
/// ```
pub const DEFAULT_MAX_CORD_DEVIATION: f64 = 0.05;

/// Default maximum angle, in radians, between the tangents at both ends of a
/// flattened chord.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_TAN_ANGLE_DEVIATION;
/// assert!(DEFAULT_MAX_TAN_ANGLE_DEVIATION < std::f64::consts::FRAC_PI_2);
/// ```
pub const DEFAULT_MAX_TAN_ANGLE_DEVIATION: f64 = 0.05;

/// Default parameter step used to sample a curve span when measuring its
/// chord deviation.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SAMPLING_STEP_SIZE;
/// let samples = (1.0 / DEFAULT_SAMPLING_STEP_SIZE).round() as u32;
/// assert_eq!(samples, 10);
/// ```
pub const DEFAULT_SAMPLING_STEP_SIZE: f64 = 0.1;

/// Smallest accepted sampling step.
///
/// Caps the deviation check at `1 / MIN_SAMPLING_STEP_SIZE` curve
/// evaluations per subdivided span.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_SAMPLING_STEP_SIZE, MIN_SAMPLING_STEP_SIZE};
/// assert!(MIN_SAMPLING_STEP_SIZE < DEFAULT_SAMPLING_STEP_SIZE);
/// assert_eq!((1.0 / MIN_SAMPLING_STEP_SIZE).round() as u32, 1000);
/// ```
pub const MIN_SAMPLING_STEP_SIZE: f64 = 1.0e-3;

/// Maximum recursion depth when subdividing one path segment.
///
/// Bounds the output to `2^depth` chords per segment regardless of the
/// tolerances requested.
///
/// # Examples
/// ```
/// use config::constants::MAX_SUBDIVISION_DEPTH;
/// assert!(2u64.pow(MAX_SUBDIVISION_DEPTH) <= 1 << 16);
/// ```
pub const MAX_SUBDIVISION_DEPTH: u32 = 12;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into the geometry engine.
    pub tolerance: f64,
    /// Recursion limit for curve subdivision.
    pub max_subdivision_depth: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and subdivision depth.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 8).expect("valid config");
    /// assert_eq!(cfg.max_subdivision_depth, 8);
    /// ```
    pub fn new(tolerance: f64, max_subdivision_depth: u32) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 || !tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_subdivision_depth == 0 || max_subdivision_depth > MAX_SUBDIVISION_DEPTH {
            return Err(ConfigError::InvalidSubdivisionDepth(max_subdivision_depth));
        }
        Ok(Self {
            tolerance,
            max_subdivision_depth,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_subdivision_depth: MAX_SUBDIVISION_DEPTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the subdivision depth is zero or above the hard limit.
    InvalidSubdivisionDepth(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSubdivisionDepth(value) => {
                write!(
                    f,
                    "max_subdivision_depth must be in 1..={MAX_SUBDIVISION_DEPTH}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a requested division count into
/// `MIN_GRID_DIVISIONS..=MAX_GRID_DIVISIONS`.
///
/// Out-of-range grid sizes are an authoring mistake, not a failure: the
/// nearest supported size is used instead.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_grid_divisions, MIN_GRID_DIVISIONS};
///
/// assert_eq!(clamp_grid_divisions(0), MIN_GRID_DIVISIONS);
/// assert_eq!(clamp_grid_divisions(5), 5);
/// ```
#[inline]
pub fn clamp_grid_divisions(requested: u32) -> u32 {
    requested.clamp(MIN_GRID_DIVISIONS, MAX_GRID_DIVISIONS)
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
