//! Spatial data structures and grid traversal
//!
//! This module contains:
//! - Coordinates and compass directions
//! - Lazily valued cells and the grids that own them
//! - Reorientation and partitioning used by grid reduction and splitting
//! - Connected-region discovery

/// Lazily valued cells and ray iteration
pub mod cell;
/// Integer positions and distance metrics
pub mod coordinates;
/// Eight-way and four-way compass directions
pub mod direction;
/// Grid construction, lookup and transformation
pub mod grid;
/// Direction-to-transform table used by grid reduction
pub mod orientation;
/// Part layout used by grid splitting
pub mod partition;
/// Flood-fill region discovery
pub mod region;

pub use cell::{Cell, Ray, ValueConstructor, constant, constructor};
pub use coordinates::Coordinates;
pub use direction::{CardinalDirection, Direction, Turn};
pub use grid::Grid;
