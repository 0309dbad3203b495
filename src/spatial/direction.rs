//! Compass directions on a screen-oriented grid
//!
//! North points towards row 0, so moving north decreases `y` and moving south
//! increases it. The eight-way [`Direction`] covers diagonals; the four-way
//! [`CardinalDirection`] maps onto it and supports turning.

use crate::io::error::{GridError, Result, invalid_input};

/// One of the eight compass headings
///
/// Variants are declared clockwise starting at north, which is also their
/// ordering when used as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0
    North,
    /// Up and right
    NorthEast,
    /// Towards higher columns
    East,
    /// Down and right
    SouthEast,
    /// Towards higher rows
    South,
    /// Down and left
    SouthWest,
    /// Towards column 0
    West,
    /// Up and left
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The four axis-aligned directions, clockwise from north
    pub const CARDINAL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Directions considered adjacent, with or without diagonals
    pub const fn neighbourhood(diagonal: bool) -> &'static [Self] {
        if diagonal { &Self::ALL } else { &Self::CARDINAL }
    }

    /// Unit vector `(dx, dy)` of this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Direction whose unit vector has the same signs as `(dx, dy)`
    ///
    /// Returns `None` for the zero vector.
    pub const fn from_signs(dx: i32, dy: i32) -> Option<Self> {
        match (dx.signum(), dy.signum()) {
            (0, -1) => Some(Self::North),
            (1, -1) => Some(Self::NorthEast),
            (1, 0) => Some(Self::East),
            (1, 1) => Some(Self::SouthEast),
            (0, 1) => Some(Self::South),
            (-1, 1) => Some(Self::SouthWest),
            (-1, 0) => Some(Self::West),
            (-1, -1) => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// The direction pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Check whether this direction moves along both axes
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::SouthEast | Self::SouthWest | Self::NorthWest
        )
    }

    /// The four-way counterpart, if this direction is axis-aligned
    pub const fn cardinal(self) -> Option<CardinalDirection> {
        match self {
            Self::North => Some(CardinalDirection::North),
            Self::East => Some(CardinalDirection::East),
            Self::South => Some(CardinalDirection::South),
            Self::West => Some(CardinalDirection::West),
            _ => None,
        }
    }
}

/// Which way to rotate a [`CardinalDirection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise quarter turn
    Left,
    /// Clockwise quarter turn
    Right,
}

/// One of the four axis-aligned headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardinalDirection {
    /// Towards row 0
    North,
    /// Towards higher columns
    East,
    /// Towards higher rows
    South,
    /// Towards column 0
    West,
}

impl CardinalDirection {
    /// All four directions in turning order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The eight-way direction with the same heading
    pub const fn expanded(self) -> Direction {
        match self {
            Self::North => Direction::North,
            Self::East => Direction::East,
            Self::South => Direction::South,
            Self::West => Direction::West,
        }
    }

    /// Rotate a quarter turn over the cycle N → E → S → W → N
    #[must_use]
    pub const fn turn(self, turn: Turn) -> Self {
        match (self, turn) {
            (Self::North, Turn::Right) | (Self::South, Turn::Left) => Self::East,
            (Self::East, Turn::Right) | (Self::West, Turn::Left) => Self::South,
            (Self::South, Turn::Right) | (Self::North, Turn::Left) => Self::West,
            (Self::West, Turn::Right) | (Self::East, Turn::Left) => Self::North,
        }
    }

    /// The direction pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Parse one of the arrow glyphs `^`, `>`, `v`, `<`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for any other character
    pub fn from_arrow(arrow: char) -> Result<Self> {
        match arrow {
            '^' => Ok(Self::North),
            '>' => Ok(Self::East),
            'v' | 'V' => Ok(Self::South),
            '<' => Ok(Self::West),
            other => Err(invalid_input(&other, &"expected one of ^ > v <")),
        }
    }
}

impl From<CardinalDirection> for Direction {
    fn from(direction: CardinalDirection) -> Self {
        direction.expanded()
    }
}

impl TryFrom<Direction> for CardinalDirection {
    type Error = GridError;

    fn try_from(direction: Direction) -> Result<Self> {
        direction
            .cardinal()
            .ok_or(GridError::NotCardinal { direction })
    }
}
