//! Fixed-size 2D container of optionally-occupied tree cells.
//!
//! Stores one `Option<Cell>` per position as a flat `Vec` in row-major
//! order (y * width + x). The grid never wraps and never resizes; an empty
//! position stays empty for the simulation's lifetime.

use crate::cell::Cell;
use crate::params::Adjacency;

/// Grid position as `(x, y)` integer coordinates.
pub type GridPos = (usize, usize);

/// 2D addressable space of tree cells with bounded neighbor lookup.
#[derive(Debug, Clone)]
pub struct TreeGrid {
    /// Cell slots in row-major order (y * width + x)
    cells: Vec<Option<Cell>>,
    width: usize,
    height: usize,
    adjacency: Adjacency,
}

impl TreeGrid {
    /// Create an empty grid. Positions are unoccupied until `place` is
    /// called during initialization.
    #[must_use]
    pub fn new(width: usize, height: usize, adjacency: Adjacency) -> Self {
        TreeGrid {
            cells: vec![None; width * height],
            width,
            height,
            adjacency,
        }
    }

    /// Grid width in cells
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Neighborhood shape used by `neighbors`
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        y * self.width + x
    }

    /// Get the cell at a position, or `None` for an empty position.
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds. The grid is non-toroidal;
    /// coordinates are never clamped or wrapped.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        let idx = self.index(x, y);
        self.cells[idx].as_ref()
    }

    /// Get a mutable cell at a position, or `None` for an empty position.
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        let idx = self.index(x, y);
        self.cells[idx].as_mut()
    }

    /// Place a cell at a position during initialization.
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds.
    pub fn place(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = Some(cell);
    }

    /// Positions of occupied neighbors of `(x, y)`, in the fixed offset
    /// order of the configured adjacency. Out-of-bounds and empty positions
    /// are skipped, so the result holds 0 to 4 entries (0 to 8 for Moore).
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` itself is out of bounds.
    #[must_use]
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<GridPos> {
        let _ = self.index(x, y);
        let mut found = Vec::with_capacity(self.adjacency.offsets().len());
        for &(dx, dy) in self.adjacency.offsets() {
            let Some(nx) = x.checked_add_signed(dx) else {
                continue;
            };
            let Some(ny) = y.checked_add_signed(dy) else {
                continue;
            };
            if nx >= self.width || ny >= self.height {
                continue;
            }
            if self.cells[ny * self.width + nx].is_some() {
                found.push((nx, ny));
            }
        }
        found
    }

    /// Iterate all occupied positions with their cells, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (GridPos, &Cell)> {
        self.cells.iter().enumerate().filter_map(move |(idx, slot)| {
            slot.as_ref()
                .map(|cell| ((idx % self.width, idx / self.width), cell))
        })
    }

    /// Number of occupied positions.
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }
}
