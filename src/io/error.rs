//! Error types for grid construction, point updates and input parsing

use std::fmt;

use crate::spatial::{Coordinates, Direction};

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Coordinates do not address a cell of the grid
    CoordinatesOutOfBounds {
        /// The requested coordinates
        coordinates: Coordinates,
        /// Grid dimensions (height, width)
        dimensions: (usize, usize),
    },

    /// Input rows do not all share the length of the first row
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Sparse input contained a key left of or above the origin
    NegativeCoordinates {
        /// The rejected key
        coordinates: Coordinates,
    },

    /// Partition scheme does not fit the grid
    InvalidPartition {
        /// Requested number of parts
        parts: usize,
        /// Grid dimensions (height, width)
        dimensions: (usize, usize),
        /// Why the partition was rejected
        reason: String,
    },

    /// Operation requires at least one cell
    EmptyGrid {
        /// Name of the operation that was attempted
        operation: &'static str,
    },

    /// Two cells from different grid instances were combined
    ForeignCell {
        /// Name of the operation that was attempted
        operation: &'static str,
    },

    /// A diagonal direction was used where only N, E, S or W is meaningful
    NotCardinal {
        /// The rejected direction
        direction: Direction,
    },

    /// Text input could not be interpreted
    InvalidInput {
        /// The offending input
        input: String,
        /// Description of what was expected
        reason: String,
    },

    /// Numeric result does not fit the target type
    Overflow {
        /// Name of the computation that overflowed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Backing matrix rejected the requested shape
    Shape {
        /// Underlying shape error
        source: ndarray::ShapeError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordinatesOutOfBounds {
                coordinates,
                dimensions,
            } => {
                write!(
                    f,
                    "Coordinates {coordinates} do not exist in this grid (size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} cells but the first row has {expected}"
                )
            }
            Self::NegativeCoordinates { coordinates } => {
                write!(f, "Coordinates {coordinates} lie outside the positive quadrant")
            }
            Self::InvalidPartition {
                parts,
                dimensions,
                reason,
            } => {
                write!(
                    f,
                    "Cannot split a {}x{} grid into {parts} parts: {reason}",
                    dimensions.0, dimensions.1
                )
            }
            Self::EmptyGrid { operation } => {
                write!(f, "Cannot {operation} an empty grid")
            }
            Self::ForeignCell { operation } => {
                write!(f, "Cells passed to {operation} belong to different grids")
            }
            Self::NotCardinal { direction } => {
                write!(f, "{direction:?} is not one of north, east, south or west")
            }
            Self::InvalidInput { input, reason } => {
                write!(f, "Invalid input '{input}': {reason}")
            }
            Self::Overflow { operation, reason } => {
                write!(f, "Overflow in {operation}: {reason}")
            }
            Self::Shape { source } => {
                write!(f, "Invalid grid shape: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape { source } => Some(source),
            _ => None,
        }
    }
}

impl From<ndarray::ShapeError> for GridError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Shape { source: err }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid input error
pub fn invalid_input(input: &impl ToString, reason: &impl ToString) -> GridError {
    GridError::InvalidInput {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an overflow error
pub fn overflow(operation: &'static str, reason: &impl ToString) -> GridError {
    GridError::Overflow {
        operation,
        reason: reason.to_string(),
    }
}
