//! Core data structures and types for the jigsaw engine.
//!
//! Includes vector aliases (`Vec2`, `Vec3`) and the integer lattice that
//! identifies grid corners, cells and interior edges.

pub mod lattice;
pub mod vec2;
pub mod vec3;
