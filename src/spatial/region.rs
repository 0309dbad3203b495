//! Connected-region discovery over grid cells
//!
//! Regions are grown breadth-first from a starting cell. An edge between two
//! adjacent cells is traversed only when the caller's `connected` predicate
//! accepts it, which lets the same routine serve "same plant type" plots,
//! "height increases by one" trails and similar flood fills.

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::spatial::cell::Cell;
use crate::spatial::coordinates::Coordinates;
use crate::spatial::grid::Grid;

/// Visited-position set sized to one grid
struct Visited {
    bits: BitVec,
    width: usize,
}

impl Visited {
    fn new<T>(grid: &Grid<T>) -> Self {
        Self {
            bits: bitvec![0; grid.len()],
            width: grid.width(),
        }
    }

    fn index(&self, coordinates: Coordinates) -> Option<usize> {
        let x = usize::try_from(coordinates.x).ok()?;
        let y = usize::try_from(coordinates.y).ok()?;
        Some(y * self.width + x)
    }

    fn mark(&mut self, coordinates: Coordinates) {
        if let Some(mut bit) = self
            .index(coordinates)
            .and_then(|index| self.bits.get_mut(index))
        {
            bit.set(true);
        }
    }

    fn is_marked(&self, coordinates: Coordinates) -> bool {
        self.index(coordinates)
            .and_then(|index| self.bits.get(index))
            .is_some_and(|bit| *bit)
    }
}

impl<T> Grid<T> {
    /// Cells reachable from `start` through connected neighbours
    ///
    /// `connected(from, to)` decides whether the walk may step from one
    /// adjacent cell to the next. The start cell comes first, followed by the
    /// rest in breadth-first order. Returns an empty list when `start` is off
    /// the grid.
    pub fn region<'g, F>(
        &'g self,
        start: Coordinates,
        diagonal: bool,
        mut connected: F,
    ) -> Vec<Cell<'g, T>>
    where
        F: FnMut(&Cell<'g, T>, &Cell<'g, T>) -> bool,
    {
        let mut visited = Visited::new(self);
        self.grow(start, diagonal, &mut connected, &mut visited)
    }

    /// Partition every cell into connected regions
    ///
    /// Regions are listed in the row-major order of their first cell.
    pub fn regions<'g, F>(&'g self, diagonal: bool, mut connected: F) -> Vec<Vec<Cell<'g, T>>>
    where
        F: FnMut(&Cell<'g, T>, &Cell<'g, T>) -> bool,
    {
        let mut visited = Visited::new(self);
        let mut regions = Vec::new();

        for cell in self.cells() {
            if !visited.is_marked(cell.coordinates()) {
                regions.push(self.grow(cell.coordinates(), diagonal, &mut connected, &mut visited));
            }
        }

        regions
    }

    fn grow<'g, F>(
        &'g self,
        start: Coordinates,
        diagonal: bool,
        connected: &mut F,
        visited: &mut Visited,
    ) -> Vec<Cell<'g, T>>
    where
        F: FnMut(&Cell<'g, T>, &Cell<'g, T>) -> bool,
    {
        let Some(origin) = self.get(start) else {
            return Vec::new();
        };
        visited.mark(start);

        let mut region = Vec::new();
        let mut frontier = VecDeque::from([origin]);
        while let Some(current) = frontier.pop_front() {
            for (_, position) in current.coordinates().neighbours(diagonal) {
                if let Some(next) = self.get(position)
                    && !visited.is_marked(position)
                    && connected(&current, &next)
                {
                    visited.mark(position);
                    frontier.push_back(next);
                }
            }
            region.push(current);
        }

        region
    }
}
