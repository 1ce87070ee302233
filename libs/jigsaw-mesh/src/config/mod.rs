//! Generation parameters, layered over the shared `config` crate.
//!
//! [`JigsawConfig`] is the single parameter bundle a host hands to the
//! generator. Grid sizes are clamped, everything else is validated.

use serde::{Deserialize, Serialize};

use crate::core::lattice::GridSize;
use crate::core::vec2::Vec2;
use crate::error::{JigsawError, JigsawResult};
use config::constants::{
    GlobalConfig, DEFAULT_GRID_DIVISIONS, DEFAULT_MAX_CORD_DEVIATION,
    DEFAULT_MAX_TAN_ANGLE_DEVIATION, DEFAULT_SAMPLING_STEP_SIZE, DEFAULT_STEP_DISTANCE,
    DEFAULT_THICKNESS, EPSILON_TOLERANCE, MAX_SUBDIVISION_DEPTH, MIN_SAMPLING_STEP_SIZE,
};

// =============================================================================
// TESSELLATION OPTIONS
// =============================================================================

/// Tolerances for turning contour curves into polylines.
///
/// # Examples
/// ```
/// use jigsaw_mesh::TessellationOptions;
/// let options = TessellationOptions::default();
/// assert!(options.validate().is_ok());
/// assert_eq!(options.step_distance, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationOptions {
    /// Maximum length of one flattened chord.
    pub step_distance: f64,
    /// Maximum distance between the curve and its chord.
    pub max_cord_deviation: f64,
    /// Maximum angle in radians between the tangents at a chord's ends.
    pub max_tan_angle_deviation: f64,
    /// Parameter step used to sample deviation along a curve span, in
    /// `MIN_SAMPLING_STEP_SIZE..=1`.
    pub sampling_step_size: f64,
    /// Distance below which two flattened points are merged.
    pub tolerance: f64,
    /// Recursion limit when subdividing one curve segment.
    pub max_subdivision_depth: u32,
}

impl TessellationOptions {
    /// Checks every tolerance.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> JigsawResult<()> {
        GlobalConfig::new(self.tolerance, self.max_subdivision_depth).map_err(|err| {
            JigsawError::InvalidConfig {
                message: err.to_string(),
            }
        })?;

        let positive = [
            ("step_distance", self.step_distance),
            ("max_cord_deviation", self.max_cord_deviation),
            ("max_tan_angle_deviation", self.max_tan_angle_deviation),
            ("sampling_step_size", self.sampling_step_size),
        ];
        for (name, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(JigsawError::InvalidConfig {
                    message: format!("{name} must be positive and finite: {value}"),
                });
            }
        }
        if !(MIN_SAMPLING_STEP_SIZE..=1.0).contains(&self.sampling_step_size) {
            return Err(JigsawError::InvalidConfig {
                message: format!(
                    "sampling_step_size must be in {MIN_SAMPLING_STEP_SIZE}..=1: {}",
                    self.sampling_step_size
                ),
            });
        }
        Ok(())
    }
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            step_distance: DEFAULT_STEP_DISTANCE,
            max_cord_deviation: DEFAULT_MAX_CORD_DEVIATION,
            max_tan_angle_deviation: DEFAULT_MAX_TAN_ANGLE_DEVIATION,
            sampling_step_size: DEFAULT_SAMPLING_STEP_SIZE,
            tolerance: EPSILON_TOLERANCE,
            max_subdivision_depth: MAX_SUBDIVISION_DEPTH,
        }
    }
}

// =============================================================================
// IMAGE SIZE
// =============================================================================

/// Pixel dimensions of the source image the puzzle is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ImageSize {
    /// Creates an image size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The 1×1 stand-in used when no image is bound.
    pub fn unit() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Dimensions as a vector.
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn validate(&self) -> JigsawResult<()> {
        if self.width <= 0.0
            || self.height <= 0.0
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(JigsawError::InvalidConfig {
                message: format!(
                    "image size must be positive and finite: {}x{}",
                    self.width, self.height
                ),
            });
        }
        Ok(())
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::unit()
    }
}

// =============================================================================
// JIGSAW CONFIG
// =============================================================================

/// Everything needed to generate one puzzle.
///
/// # Examples
/// ```
/// use jigsaw_mesh::{ImageSize, JigsawConfig};
///
/// let config = JigsawConfig::new(3, 4, 0.2)
///     .unwrap()
///     .with_image(ImageSize::new(640.0, 480.0))
///     .with_seed(7);
/// assert_eq!(config.grid().cell_count(), 12);
/// assert_eq!(config.image_size().width, 640.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JigsawConfig {
    /// Number of columns, clamped into the supported range.
    pub horizontal: u32,
    /// Number of rows, clamped into the supported range.
    pub vertical: u32,
    /// Extrusion depth of every piece.
    pub thickness: f64,
    /// Curve flattening tolerances.
    pub tessellation: TessellationOptions,
    /// Source image dimensions; `None` keeps pieces in the unit square.
    pub image: Option<ImageSize>,
    /// Seed for the tab coin flips; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl JigsawConfig {
    /// Builds a configuration with default tessellation and no image.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `thickness` is not a positive finite number. Grid
    /// sizes out of range are clamped instead.
    pub fn new(horizontal: u32, vertical: u32, thickness: f64) -> JigsawResult<Self> {
        let grid = GridSize::new(horizontal, vertical);
        let config = Self {
            horizontal: grid.horizontal,
            vertical: grid.vertical,
            thickness,
            ..Self::default()
        };
        config.validate_thickness()?;
        Ok(config)
    }

    /// Binds a source image.
    #[must_use]
    pub fn with_image(mut self, image: ImageSize) -> Self {
        self.image = Some(image);
        self
    }

    /// Fixes the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the tessellation tolerances.
    #[must_use]
    pub fn with_tessellation(mut self, tessellation: TessellationOptions) -> Self {
        self.tessellation = tessellation;
        self
    }

    /// Clamped grid dimensions.
    pub fn grid(&self) -> GridSize {
        GridSize::new(self.horizontal, self.vertical)
    }

    /// Bound image size, or the unit square.
    pub fn image_size(&self) -> ImageSize {
        self.image.unwrap_or_default()
    }

    /// Checks thickness, tessellation tolerances and image size.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` describing the first invalid value.
    pub fn validate(&self) -> JigsawResult<()> {
        self.validate_thickness()?;
        self.tessellation.validate()?;
        if let Some(image) = &self.image {
            image.validate()?;
        }
        Ok(())
    }

    fn validate_thickness(&self) -> JigsawResult<()> {
        if self.thickness <= 0.0 || !self.thickness.is_finite() {
            return Err(JigsawError::InvalidConfig {
                message: format!("thickness must be positive and finite: {}", self.thickness),
            });
        }
        Ok(())
    }
}

impl Default for JigsawConfig {
    fn default() -> Self {
        Self {
            horizontal: DEFAULT_GRID_DIVISIONS,
            vertical: DEFAULT_GRID_DIVISIONS,
            thickness: DEFAULT_THICKNESS,
            tessellation: TessellationOptions::default(),
            image: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests;
