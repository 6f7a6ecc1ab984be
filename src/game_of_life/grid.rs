//! Grid representation and neighbor evaluation for Game of Life

use crate::error::{LifeError, LifeResult};
use itertools::iproduct;
use rand::Rng;
use std::fmt;

/// Position of a single cell inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A fixed-size Game of Life grid. Cells outside the grid do not exist;
/// there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    pub(crate) cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Create a grid where each cell is alive with probability one half
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> LifeResult<Self> {
        check_dimensions(rows, cols)?;
        let cells = (0..rows * cols).map(|_| rng.gen_bool(0.5)).collect();
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> LifeResult<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        check_dimensions(rows, cols)?;

        for (row, line) in cells.iter().enumerate() {
            if line.len() != cols {
                return Err(LifeError::RaggedRows {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
        }

        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Build from an already validated row-major buffer
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && cells.len() == rows * cols);
        Self { rows, cols, cells }
    }

    /// An all-dead grid with the same dimensions as `self`
    pub(crate) fn blank_like(&self) -> Self {
        Self::from_parts(self.rows, self.cols, vec![false; self.cells.len()])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Whether the position lies inside the grid
    pub fn contains(&self, cell: impl Into<Cell>) -> bool {
        let cell = cell.into();
        cell.row < self.rows && cell.col < self.cols
    }

    /// Get cell value at coordinates. Out of bounds cells read as dead.
    pub fn get(&self, cell: impl Into<Cell>) -> bool {
        let cell = cell.into();
        self.contains(cell) && self.cells[self.index(cell)]
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, cell: impl Into<Cell>, value: bool) -> LifeResult<()> {
        let cell = self.checked(cell.into())?;
        let idx = self.index(cell);
        self.cells[idx] = value;
        Ok(())
    }

    /// Flip a cell and return its new value
    pub fn toggle(&mut self, cell: impl Into<Cell>) -> LifeResult<bool> {
        let cell = self.checked(cell.into())?;
        let idx = self.index(cell);
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    fn checked(&self, cell: Cell) -> LifeResult<Cell> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(LifeError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// In-bounds positions of the Moore neighborhood of `cell`.
    ///
    /// Border cells yield fewer than eight positions: offsets that leave
    /// the grid are skipped rather than wrapped to the opposite edge.
    pub fn neighbours(&self, cell: impl Into<Cell>) -> impl Iterator<Item = Cell> + '_ {
        let cell = cell.into();
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let row = cell.row.checked_add_signed(dr)?;
                let col = cell.col.checked_add_signed(dc)?;
                (row < self.rows && col < self.cols).then_some(Cell::new(row, col))
            })
    }

    /// Count living neighbors for a cell, in `0..=8`
    pub fn count_neighbors(&self, cell: impl Into<Cell>) -> u8 {
        self.neighbours(cell)
            .filter(|&n| self.cells[self.index(n)])
            .count() as u8
    }

    /// Iterate over the rows of the grid, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| Cell::new(idx / self.cols, idx % self.cols))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

/// Allocate a `rows` x `cols` grid, randomized from `rng` or all dead
pub fn create_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    randomize: bool,
    rng: &mut R,
) -> LifeResult<Grid> {
    if randomize {
        Grid::random(rows, cols, rng)
    } else {
        Grid::new(rows, cols)
    }
}

fn check_dimensions(rows: usize, cols: usize) -> LifeResult<()> {
    if rows == 0 || cols == 0 {
        return Err(LifeError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                let symbol = if cell { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
