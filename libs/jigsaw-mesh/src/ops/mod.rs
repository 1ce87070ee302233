//! Operations that turn flat triangulations into solids.

pub mod extrude;
