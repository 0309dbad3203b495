//! Integer positions on a two-dimensional grid
//!
//! Coordinates carry no bounds; whether a position exists is only meaningful
//! relative to a particular [`Grid`](crate::spatial::Grid).

use std::fmt;

use crate::spatial::direction::Direction;

/// A column/row position, `x` being the column and `y` the row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Coordinates {
    /// The top-left corner of every grid
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create coordinates from a column and a row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Distance to another position
    ///
    /// Manhattan distance (`|dx| + |dy|`) when `diagonal` is false, Chebyshev
    /// distance (`max(|dx|, |dy|)`) when diagonal moves count as one step.
    ///
    /// Widened to `u64` so opposite corners of the `i32` plane still fit.
    pub const fn distance_to(self, other: Self, diagonal: bool) -> u64 {
        let dx = self.x.abs_diff(other.x) as u64;
        let dy = self.y.abs_diff(other.y) as u64;
        if diagonal {
            if dx > dy { dx } else { dy }
        } else {
            dx + dy
        }
    }

    /// Manhattan distance to another position
    pub const fn manhattan_distance(self, other: Self) -> u64 {
        self.distance_to(other, false)
    }

    /// Chebyshev distance to another position
    pub const fn chebyshev_distance(self, other: Self) -> u64 {
        self.distance_to(other, true)
    }

    /// Position `amount` steps away in `direction`
    #[must_use]
    pub const fn in_direction(self, direction: Direction, amount: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx * amount, self.y + dy * amount)
    }

    /// Position one step away in `direction`
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        self.in_direction(direction, 1)
    }

    /// Direction in which `other` lies as seen from here
    ///
    /// Only axis-aligned and exact diagonal displacements classify; any skew
    /// offset, and `other == self`, yields `None`.
    pub const fn direction_to(self, other: Self) -> Option<Direction> {
        let (dx, dy) = self.displacement(other);
        if dx == 0 || dy == 0 || dx.unsigned_abs() == dy.unsigned_abs() {
            Direction::from_signs(dx.signum() as i32, dy.signum() as i32)
        } else {
            None
        }
    }

    /// Unit steps leading from here to `other`
    ///
    /// All horizontal steps come first, then all vertical steps. No diagonal
    /// steps are produced.
    pub fn path_to(self, other: Self) -> Vec<Direction> {
        let (dx, dy) = self.displacement(other);
        let horizontal = if dx > 0 {
            Direction::East
        } else {
            Direction::West
        };
        let vertical = if dy > 0 {
            Direction::South
        } else {
            Direction::North
        };

        std::iter::repeat_n(horizontal, dx.unsigned_abs() as usize)
            .chain(std::iter::repeat_n(vertical, dy.unsigned_abs() as usize))
            .collect()
    }

    /// Follow `steps` in order, one unit each
    #[must_use]
    pub fn walk<I>(self, steps: I) -> Self
    where
        I: IntoIterator<Item = Direction>,
    {
        steps
            .into_iter()
            .fold(self, |position, direction| position.step(direction))
    }

    /// Positions around this one paired with the direction leading to them
    pub fn neighbours(self, diagonal: bool) -> impl Iterator<Item = (Direction, Self)> {
        Direction::neighbourhood(diagonal)
            .iter()
            .map(move |&direction| (direction, self.step(direction)))
    }

    // i64 holds any difference of two i32 values
    const fn displacement(self, other: Self) -> (i64, i64) {
        (
            other.x as i64 - self.x as i64,
            other.y as i64 - self.y as i64,
        )
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
