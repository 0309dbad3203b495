//! Lazily valued cells and the handles used to navigate between them
//!
//! A grid stores one [`Content`] per position. A [`Cell`] is a borrowed handle
//! pairing that content with its coordinates and the owning grid, so neighbour
//! lookups never need an owning back-reference.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::io::error::{GridError, Result};
use crate::spatial::coordinates::Coordinates;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// Function computing a cell's value from the cell itself
///
/// The constructor receives the cell being evaluated, so it may read the
/// values of neighbouring cells. It must not read its own value.
pub type ValueConstructor<T> = Arc<dyn Fn(&Cell<'_, T>) -> T + Send + Sync>;

/// Wrap a closure as a [`ValueConstructor`]
pub fn constructor<T, F>(function: F) -> ValueConstructor<T>
where
    F: Fn(&Cell<'_, T>) -> T + Send + Sync + 'static,
{
    Arc::new(function)
}

/// Constructor that ignores the cell and yields a clone of `value`
pub fn constant<T>(value: T) -> ValueConstructor<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(move |_: &Cell<'_, T>| value.clone())
}

/// Stored value of one grid position
pub(crate) enum Content<T> {
    /// Value known at construction
    Resolved(T),
    /// Value computed at most once, on first access
    Deferred {
        value: OnceLock<T>,
        constructor: ValueConstructor<T>,
    },
}

impl<T> Content<T> {
    pub(crate) const fn deferred(constructor: ValueConstructor<T>) -> Self {
        Self::Deferred {
            value: OnceLock::new(),
            constructor,
        }
    }

    fn resolve<'g>(&'g self, cell: &Cell<'g, T>) -> &'g T {
        match self {
            Self::Resolved(value) => value,
            // OnceLock blocks concurrent readers until the single
            // initialisation finishes
            Self::Deferred { value, constructor } => value.get_or_init(|| constructor(cell)),
        }
    }

    fn peek(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Deferred { value, .. } => value.get(),
        }
    }
}

/// Handle to one position of a [`Grid`]
///
/// Cells are cheap to copy. Two cells are equal only if they address the same
/// coordinates of the same grid instance.
pub struct Cell<'g, T> {
    grid: &'g Grid<T>,
    content: &'g Content<T>,
    coordinates: Coordinates,
}

impl<'g, T> Cell<'g, T> {
    pub(crate) const fn new(
        grid: &'g Grid<T>,
        content: &'g Content<T>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            grid,
            content,
            coordinates,
        }
    }

    /// Position of this cell
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Grid this cell belongs to
    pub const fn grid(&self) -> &'g Grid<T> {
        self.grid
    }

    /// Value of this cell, computing it on first access
    ///
    /// The constructor runs at most once even when several threads ask at
    /// the same time; later calls return the cached value.
    pub fn value(&self) -> &'g T {
        self.content.resolve(self)
    }

    /// Check whether the value has already been computed
    pub fn is_resolved(&self) -> bool {
        self.content.peek().is_some()
    }

    /// Neighbouring cells keyed by direction
    ///
    /// Holds four entries, or eight when `diagonal` is set. Positions off the
    /// grid map to `None`.
    pub fn adjacent(&self, diagonal: bool) -> BTreeMap<Direction, Option<Self>> {
        self.grid.adjacent(self.coordinates, diagonal)
    }

    /// The cell one step away in `direction`, if it exists
    pub fn neighbour(&self, direction: Direction) -> Option<Self> {
        self.grid.neighbour(self.coordinates, direction)
    }

    /// Cells from the immediate neighbour in `direction` up to the grid edge
    pub const fn ray(&self, direction: Direction) -> Ray<'g, T> {
        Ray {
            grid: self.grid,
            position: self.coordinates,
            direction,
        }
    }

    /// Apply `function` to every cell of the ray in `direction`
    pub fn map_in_direction<R, F>(&self, direction: Direction, function: F) -> Vec<R>
    where
        F: FnMut(Self) -> R,
    {
        self.ray(direction).map(function).collect()
    }

    /// Left-fold the ray in `direction`, starting from `initial`
    ///
    /// Returns `initial` untouched when there is no neighbour in `direction`.
    pub fn fold_in_direction<R, F>(&self, direction: Direction, initial: R, function: F) -> R
    where
        F: FnMut(R, Self) -> R,
    {
        self.ray(direction).fold(initial, function)
    }

    /// Fold the ray of each of the eight directions with a fresh accumulator
    pub fn fold_in_every_direction<R, F>(&self, initial: &R, mut function: F) -> BTreeMap<Direction, R>
    where
        R: Clone,
        F: FnMut(R, Self) -> R,
    {
        Direction::ALL
            .iter()
            .map(|&direction| {
                let folded = self.fold_in_direction(direction, initial.clone(), &mut function);
                (direction, folded)
            })
            .collect()
    }

    /// Distance to another cell of the same grid
    ///
    /// # Errors
    ///
    /// Returns `ForeignCell` if `other` belongs to a different grid
    pub fn distance_to(&self, other: &Self, diagonal: bool) -> Result<u64> {
        if std::ptr::eq(self.grid, other.grid) {
            Ok(self.coordinates.distance_to(other.coordinates, diagonal))
        } else {
            Err(GridError::ForeignCell {
                operation: "distance_to",
            })
        }
    }
}

impl<T> Clone for Cell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

impl<T> PartialEq for Cell<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.grid, other.grid) && self.coordinates == other.coordinates
    }
}

impl<T> Eq for Cell<'_, T> {}

impl<T> Hash for Cell<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.grid, state);
        self.coordinates.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug output must not trigger evaluation
        f.debug_struct("Cell")
            .field("coordinates", &self.coordinates)
            .field("value", &self.content.peek())
            .finish()
    }
}

/// Iterator walking from a cell towards the grid edge
///
/// The starting cell itself is never yielded.
pub struct Ray<'g, T> {
    grid: &'g Grid<T>,
    position: Coordinates,
    direction: Direction,
}

impl<'g, T> Iterator for Ray<'g, T> {
    type Item = Cell<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.grid.neighbour(self.position, self.direction)?;
        self.position = cell.coordinates();
        Some(cell)
    }
}

impl<T> std::iter::FusedIterator for Ray<'_, T> {}
