//! Immutable two-dimensional grids with lazily memoized, neighbour-aware cells
//!
//! A [`Grid`] is built once from rows of value constructors (or plain values)
//! and never changes shape. Each [`Cell`] computes its value on first access,
//! exactly once, and may consult its neighbours while doing so. Traversal
//! helpers walk rays, fold in every direction, reduce along rows or columns,
//! split into quadrants and flood-fill regions.

#![forbid(unsafe_code)]

/// Input parsing, configuration and error handling
pub mod io;
/// Integer and bit-string helpers used alongside grids
pub mod math;
/// Coordinates, directions, cells and grids
pub mod spatial;
/// Cyclic sequences and memoization
pub mod support;

pub use io::configuration::Evaluation;
pub use io::error::{GridError, Result};
pub use spatial::{
    CardinalDirection, Cell, Coordinates, Direction, Grid, Turn, ValueConstructor, constant,
    constructor,
};
pub use support::{Cyclic, Memoized, memoize};
