//! Immutable rectangular grids of lazily valued cells
//!
//! A grid owns one content slot per position, stored row-major in an
//! `ndarray` matrix indexed `(row, column)`, so `Coordinates { x, y }` lives
//! at `(y, x)`. Every operation that looks like a mutation builds a new grid
//! and leaves the original, and every cell borrowed from it, untouched.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use ndarray::{Array2, Axis, Slice, Zip};

use crate::io::configuration::Evaluation;
use crate::io::error::{GridError, Result};
use crate::spatial::cell::{Cell, Content, ValueConstructor};
use crate::spatial::coordinates::Coordinates;
use crate::spatial::direction::{CardinalDirection, Direction};
use crate::spatial::orientation::Orientation;
use crate::spatial::partition::partition;

/// Rectangular, fixed-shape container of [`Cell`]s
pub struct Grid<T> {
    contents: Array2<Content<T>>,
    evaluation: Evaluation,
}

impl<T> Grid<T> {
    /// Build a grid from rows of value constructors
    ///
    /// All cells are allocated before any constructor runs, so constructors
    /// may look at neighbouring cells. With [`Evaluation::Eager`] every cell
    /// is then forced in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `RaggedRow` if a row differs in length from the first row
    pub fn new(rows: Vec<Vec<ValueConstructor<T>>>, evaluation: Evaluation) -> Result<Self> {
        Self::from_rows(rows, Content::deferred, evaluation)
    }

    /// Build a lazy grid from rows of already known values
    ///
    /// # Errors
    ///
    /// Returns `RaggedRow` if a row differs in length from the first row
    pub fn from_matrix(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows, Content::Resolved, Evaluation::Lazy)
    }

    /// Build a grid from a sparse mapping and a default constructor
    ///
    /// The grid spans `[0, max x] × [0, max y]` over the given keys; every
    /// position without an entry uses `default`. An empty mapping gives an
    /// empty grid.
    ///
    /// # Errors
    ///
    /// Returns `NegativeCoordinates` if any key has a negative component
    pub fn from_sparse(
        mut values: HashMap<Coordinates, ValueConstructor<T>>,
        default: &ValueConstructor<T>,
        evaluation: Evaluation,
    ) -> Result<Self> {
        if let Some(&coordinates) = values.keys().find(|c| c.x < 0 || c.y < 0) {
            return Err(GridError::NegativeCoordinates { coordinates });
        }

        let (height, width) = values.keys().fold((0, 0), |(height, width), c| {
            (height.max(c.y as usize + 1), width.max(c.x as usize + 1))
        });

        let contents = Array2::from_shape_fn((height, width), |(row, col)| {
            let key = Coordinates::new(col as i32, row as i32);
            let constructor = values.remove(&key).unwrap_or_else(|| default.clone());
            Content::deferred(constructor)
        });

        Ok(Self::from_contents(contents, evaluation))
    }

    fn from_rows<V>(
        rows: Vec<Vec<V>>,
        wrap: impl Fn(V) -> Content<T>,
        evaluation: Evaluation,
    ) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != width)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        let flat = rows.into_iter().flatten().map(wrap).collect();
        let contents = Array2::from_shape_vec((height, width), flat)?;
        Ok(Self::from_contents(contents, evaluation))
    }

    pub(crate) fn from_contents(contents: Array2<Content<T>>, evaluation: Evaluation) -> Self {
        let grid = Self {
            contents,
            evaluation,
        };

        if evaluation.is_eager() {
            for cell in grid.cells() {
                cell.value();
            }
        }

        grid
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.contents.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.contents.ncols()
    }

    /// Grid dimensions (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        self.contents.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Check whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Evaluation mode this grid was built with
    pub const fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Cell at `coordinates`, if it exists
    pub fn get(&self, coordinates: Coordinates) -> Option<Cell<'_, T>> {
        let row = usize::try_from(coordinates.y).ok()?;
        let col = usize::try_from(coordinates.x).ok()?;
        self.contents
            .get((row, col))
            .map(|content| Cell::new(self, content, coordinates))
    }

    /// Check whether `coordinates` address a cell of this grid
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        self.get(coordinates).is_some()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_, T>> {
        self.contents
            .indexed_iter()
            .map(move |((row, col), content)| {
                Cell::new(self, content, Coordinates::new(col as i32, row as i32))
            })
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Vec<Cell<'_, T>> {
        (0..self.width())
            .filter_map(|x| self.get(Coordinates::new(x as i32, y as i32)))
            .collect()
    }

    /// Cells of column `x`, top to bottom
    pub fn column(&self, x: usize) -> Vec<Cell<'_, T>> {
        (0..self.height())
            .filter_map(|y| self.get(Coordinates::new(x as i32, y as i32)))
            .collect()
    }

    /// Neighbours of `coordinates` keyed by direction
    ///
    /// Holds four entries, or eight when `diagonal` is set. Positions off the
    /// grid map to `None`.
    pub fn adjacent(
        &self,
        coordinates: Coordinates,
        diagonal: bool,
    ) -> BTreeMap<Direction, Option<Cell<'_, T>>> {
        coordinates
            .neighbours(diagonal)
            .map(|(direction, position)| (direction, self.get(position)))
            .collect()
    }

    /// The cell one step from `coordinates` in `direction`, if it exists
    pub fn neighbour(&self, coordinates: Coordinates, direction: Direction) -> Option<Cell<'_, T>> {
        self.get(coordinates.step(direction))
    }

    /// Cells satisfying `predicate`, in row-major order
    ///
    /// The predicate may read cell values, forcing their evaluation.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<Cell<'_, T>>
    where
        P: FnMut(&Cell<'_, T>) -> bool,
    {
        self.cells().filter(|cell| predicate(cell)).collect()
    }

    /// First cell in row-major order satisfying `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<Cell<'_, T>>
    where
        P: FnMut(&Cell<'_, T>) -> bool,
    {
        self.cells().find(|cell| predicate(cell))
    }

    /// Count the cells satisfying `predicate`
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Cell<'_, T>) -> bool,
    {
        self.cells().filter(|cell| predicate(cell)).count()
    }

    /// Matrix of cell handles with the same shape as the grid
    pub fn cell_matrix(&self) -> Array2<Cell<'_, T>> {
        Zip::indexed(&self.contents).map_collect(|(row, col), content| {
            Cell::new(self, content, Coordinates::new(col as i32, row as i32))
        })
    }

    /// New grid holding `function` applied to every cell
    ///
    /// The function runs once per cell, in row-major order, while the new
    /// grid is built. The shape and evaluation mode are preserved.
    pub fn map<R, F>(&self, mut function: F) -> Grid<R>
    where
        F: FnMut(Cell<'_, T>) -> R,
    {
        let contents = self
            .cell_matrix()
            .map(|&cell| Content::Resolved(function(cell)));
        Grid::from_contents(contents, self.evaluation)
    }

    /// Reduce the grid along lines scanned in `direction`
    ///
    /// The grid is reoriented so that each line becomes a row: north
    /// transposes, east reverses each row, south transposes then reverses,
    /// west keeps the original rows. `outer` folds each row into an `R1`,
    /// then `inner` combines those results.
    pub fn reduce<R1, R2, O, I>(&self, direction: CardinalDirection, mut outer: O, inner: I) -> R2
    where
        O: FnMut(&[Cell<'_, T>]) -> R1,
        I: FnOnce(Vec<R1>) -> R2,
    {
        let cells = self.cell_matrix();
        let oriented = Orientation::for_direction(direction).apply(cells.view());
        let reduced: Vec<R1> = oriented
            .rows()
            .into_iter()
            .map(|line| outer(&line.to_vec()))
            .collect();
        inner(reduced)
    }
}

impl<T: Clone> Grid<T> {
    /// New grid with the cell at `coordinates` built by `constructor`
    ///
    /// Every other cell is forced and carried over as a resolved value, so
    /// no constructor other than the new one runs again.
    ///
    /// # Errors
    ///
    /// Returns `CoordinatesOutOfBounds` if `coordinates` is not in the grid
    pub fn replace_cell(
        &self,
        coordinates: Coordinates,
        constructor: &ValueConstructor<T>,
    ) -> Result<Self> {
        if !self.contains(coordinates) {
            return Err(GridError::CoordinatesOutOfBounds {
                coordinates,
                dimensions: self.dimensions(),
            });
        }

        let contents = self.cell_matrix().map(|cell| {
            if cell.coordinates() == coordinates {
                Content::deferred(constructor.clone())
            } else {
                Content::Resolved(cell.value().clone())
            }
        });
        Ok(Self::from_contents(contents, self.evaluation))
    }

    /// New grid with the cell at `coordinates` holding `value`
    ///
    /// # Errors
    ///
    /// Returns `CoordinatesOutOfBounds` if `coordinates` is not in the grid
    pub fn replace_value(&self, coordinates: Coordinates, value: T) -> Result<Self> {
        if !self.contains(coordinates) {
            return Err(GridError::CoordinatesOutOfBounds {
                coordinates,
                dimensions: self.dimensions(),
            });
        }

        let mut replacement = Some(value);
        let contents = self.cell_matrix().map(|cell| {
            match replacement.take_if(|_| cell.coordinates() == coordinates) {
                Some(value) => Content::Resolved(value),
                None => Content::Resolved(cell.value().clone()),
            }
        });
        Ok(Self::from_contents(contents, self.evaluation))
    }

    /// Split into `parts` equally sized sub-grids
    ///
    /// Parts are ordered left to right, then top to bottom. On an odd
    /// dimension the middle row or column is dropped from every part. Values
    /// are copied, forcing evaluation of every included cell.
    ///
    /// # Errors
    ///
    /// Returns `EmptyGrid` for an empty grid and `InvalidPartition` when
    /// `parts` is zero, odd, or does not fit the grid
    pub fn split(&self, parts: usize) -> Result<Vec<Self>> {
        let (height, width) = self.dimensions();
        let layout = partition(height, width, parts)?;
        let cells = self.cell_matrix();

        Ok(layout
            .into_iter()
            .map(|part| {
                let contents = cells
                    .slice_axis(Axis(0), Slice::from(part.rows))
                    .slice_axis(Axis(1), Slice::from(part.cols))
                    .map(|cell| Content::Resolved(cell.value().clone()));
                Self::from_contents(contents, self.evaluation)
            })
            .collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("height", &self.height())
            .field("width", &self.width())
            .field("evaluation", &self.evaluation)
            .finish_non_exhaustive()
    }
}

/// Renders one line per row, forcing every cell
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.cell_matrix().rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in line {
                write!(f, "{}", cell.value())?;
            }
        }
        Ok(())
    }
}
