//! Reorientation of a matrix so that lines in a scan direction become rows

use ndarray::{ArrayView2, Axis};

use crate::spatial::direction::CardinalDirection;

/// Geometric transform applied before reducing a matrix row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    /// Swap rows and columns
    pub transpose: bool,
    /// Reverse each row after the optional transpose
    pub reverse_rows: bool,
}

impl Orientation {
    /// Transform that turns lines scanned in `direction` into rows
    ///
    /// | direction | transform                      |
    /// |-----------|--------------------------------|
    /// | North     | transpose                      |
    /// | East      | reverse each row               |
    /// | South     | transpose, then reverse rows   |
    /// | West      | identity                       |
    pub const fn for_direction(direction: CardinalDirection) -> Self {
        match direction {
            CardinalDirection::North => Self {
                transpose: true,
                reverse_rows: false,
            },
            CardinalDirection::East => Self {
                transpose: false,
                reverse_rows: true,
            },
            CardinalDirection::South => Self {
                transpose: true,
                reverse_rows: true,
            },
            CardinalDirection::West => Self {
                transpose: false,
                reverse_rows: false,
            },
        }
    }

    /// Apply the transform to a view without copying elements
    pub fn apply<'a, A>(self, view: ArrayView2<'a, A>) -> ArrayView2<'a, A> {
        let mut view = if self.transpose {
            view.reversed_axes()
        } else {
            view
        };

        if self.reverse_rows {
            view.invert_axis(Axis(1));
        }
        view
    }
}
