//! Grid: the drawing surface capability widgets paint into.
//!
//! Widgets never assume how a host stores its cells. They only read and
//! write single cells through [`Grid`], so a dense screen buffer and a sparse
//! map are interchangeable.

use super::cell::StyledCell;
use crate::layout::Point;
use std::collections::HashMap;

/// A host-owned surface of styled cells addressed by [`Point`].
pub trait Grid {
    /// Read the cell at `point`.
    ///
    /// Points the grid does not cover read as [`StyledCell::EMPTY`].
    fn get(&self, point: Point) -> StyledCell;

    /// Write the cell at `point`.
    ///
    /// Writes to points the grid does not cover are ignored.
    fn set(&mut self, point: Point, cell: StyledCell);
}

/// A grid that stores only the cells that were written.
///
/// Unbounded: every point is addressable. Useful for hosts that composite
/// sparse overlays, and for observing exactly which points a widget touched.
#[derive(Debug, Clone, Default)]
pub struct SparseGrid {
    cells: HashMap<Point, StyledCell>,
}

impl SparseGrid {
    /// Create an empty sparse grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points that have been written.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether `point` has been written.
    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains_key(&point)
    }

    /// Iterate over the written points and their cells.
    pub fn iter(&self) -> impl Iterator<Item = (Point, StyledCell)> + '_ {
        self.cells.iter().map(|(point, cell)| (*point, *cell))
    }
}

impl Grid for SparseGrid {
    fn get(&self, point: Point) -> StyledCell {
        self.cells.get(&point).copied().unwrap_or(StyledCell::EMPTY)
    }

    fn set(&mut self, point: Point, cell: StyledCell) {
        self.cells.insert(point, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Style;

    #[test]
    fn test_sparse_grid_records_writes() {
        let mut grid = SparseGrid::new();
        assert!(grid.is_empty());

        grid.set(Point::new(4, 2), StyledCell::new('x', Style::DEFAULT));
        assert_eq!(grid.len(), 1);
        assert!(grid.contains(Point::new(4, 2)));
        assert_eq!(grid.get(Point::new(4, 2)).ch(), 'x');
    }

    #[test]
    fn test_sparse_grid_unwritten_reads_empty() {
        let grid = SparseGrid::new();
        assert_eq!(grid.get(Point::new(100, 100)), StyledCell::EMPTY);
        assert!(!grid.contains(Point::new(100, 100)));
    }
}
