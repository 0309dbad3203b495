//! Partition arithmetic for splitting a grid into equal sub-grids
//!
//! Parts are laid out [`PARTS_PER_BAND`] to a horizontal band, with
//! `parts / 2` bands. Each part is `width / (parts / 2)` columns wide and
//! `height / (parts / 2)` rows tall. When a dimension is odd, one row or
//! column is skipped after each part along it, so the middle line of an odd
//! grid split in four belongs to no part.

use std::ops::Range;

use crate::io::configuration::PARTS_PER_BAND;
use crate::io::error::{GridError, Result};

/// Rows and columns covered by one part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Row index range
    pub rows: Range<usize>,
    /// Column index range
    pub cols: Range<usize>,
}

/// Compute the parts of a `height` × `width` grid
///
/// # Errors
///
/// Returns `EmptyGrid` for a grid without cells, and `InvalidPartition` when
/// `parts` is zero or odd, when a part would be empty, or when a part would
/// extend past the grid
pub fn partition(height: usize, width: usize, parts: usize) -> Result<Vec<Part>> {
    let rejected = |reason: &str| GridError::InvalidPartition {
        parts,
        dimensions: (height, width),
        reason: reason.to_string(),
    };

    if height == 0 || width == 0 {
        return Err(GridError::EmptyGrid { operation: "split" });
    }
    if parts == 0 || parts % PARTS_PER_BAND != 0 {
        return Err(rejected("the number of parts must be a positive even number"));
    }

    let bands = parts / PARTS_PER_BAND;
    if bands > width || bands > height {
        return Err(rejected("parts would have no rows or columns"));
    }
    let part_width = width / bands;
    let part_height = height / bands;
    let column_gap = width % 2;
    let row_gap = height % 2;

    let mut layout = Vec::with_capacity(parts);
    let mut start_x = 0;
    let mut start_y = 0;
    for index in 0..parts {
        let part = Part {
            rows: start_y..start_y + part_height,
            cols: start_x..start_x + part_width,
        };
        if part.rows.end > height || part.cols.end > width {
            return Err(rejected("parts do not fit inside the grid"));
        }
        layout.push(part);

        if (index + 1) % PARTS_PER_BAND == 0 {
            start_x = 0;
            start_y += part_height + row_gap;
        } else {
            start_x += part_width + column_gap;
        }
    }

    Ok(layout)
}
