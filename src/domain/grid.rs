use rand::Rng;

use super::{Cell, LifeError, Result, neighborhood};

/// Grid is a fixed-size board of cells stored row-major.
/// Updates are functional: stepping and toggling return a new grid and
/// leave the receiver untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid whose only live cells are the listed coordinates
    pub fn from_live_cells<I>(rows: usize, cols: usize, live: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(rows, cols);
        for (row, col) in live {
            let idx = grid.checked_index(row as isize, col as isize)?;
            grid.cells[idx] = Cell::Alive;
        }
        Ok(grid)
    }

    /// Fill a grid where each cell is independently alive with probability `density`.
    /// Density is clamped to `[0, 1]`; NaN is treated as 0.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let cells = (0..rows * cols)
            .map(|_| Cell::from(rng.random_bool(density)))
            .collect();

        Self { rows, cols, cells }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Validate a signed coordinate and return its index
    fn checked_index(&self, row: isize, col: isize) -> Result<usize> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < self.rows && c < self.cols => Ok(self.get_index(r, c)),
            _ => Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.get_index(row, col)])
    }

    /// Whether the cell at position is alive; out-of-bounds reads as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Whether a signed coordinate lies on the board
    pub fn contains(&self, row: isize, col: isize) -> bool {
        self.checked_index(row, col).is_ok()
    }

    /// Return a copy with the cell at (row, col) flipped.
    /// Fails with `OutOfBounds` instead of clamping.
    pub fn toggled(&self, row: isize, col: isize) -> Result<Self> {
        let idx = self.checked_index(row, col)?;
        let mut next = self.clone();
        next.cells[idx] = next.cells[idx].toggle();
        Ok(next)
    }

    /// Count live neighbors; edges are hard boundaries
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        neighborhood::neighbors(row, col, self.rows, self.cols)
            .filter(|&(r, c)| self.cells[self.get_index(r, c)].is_alive())
            .count() as u8
    }

    /// Compute the next generation into a fresh grid.
    /// Neighbor counts always read from `self`, never from the output.
    pub fn evolve(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(row, col, current)| current.evolve(self.count_live_neighbors(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Coordinates of live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }
}
