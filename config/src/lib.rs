//! # Config Crate
//!
//! Centralized configuration constants for the jigsaw piece generator.
//! All magic numbers and tunable parameters are defined here so the geometry
//! engine, its tests and any host adapter agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_grid_divisions, EPSILON, MAX_GRID_DIVISIONS};
//!
//! // Grid sizes outside the supported range are clamped, not rejected
//! assert_eq!(clamp_grid_divisions(42), MAX_GRID_DIVISIONS);
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001;
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Authoring Defaults**: Defaults reproduce the stock 2×2 puzzle
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
