//! Simulation engine: grid factories, the generation step and cell editing.
//!
//! The free functions are pure and work on grid values. [`SimulationEngine`]
//! holds the current grid for a session and replaces it on every operation.

use log::{debug, trace};
use rand::Rng;

use super::{Grid, Result};
use crate::config::{COLS, ROWS, SimulationConfig};

/// Empty board with the default dimensions
pub fn create_empty_grid() -> Grid {
    Grid::new(ROWS, COLS)
}

/// Random board with the default dimensions
pub fn seed_random(density: f64) -> Grid {
    Grid::random(ROWS, COLS, density, &mut rand::rng())
}

/// Next generation of `grid`; the input is left as it was
pub fn step(grid: &Grid) -> Grid {
    grid.evolve()
}

/// Copy of `grid` with one cell flipped
pub fn toggle_cell(grid: &Grid, row: isize, col: isize) -> Result<Grid> {
    grid.toggled(row, col)
}

/// Owns the current grid and the generation counter
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    config: SimulationConfig,
    grid: Grid,
    generation: u64,
}

impl SimulationEngine {
    /// Create an engine with an empty board
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            grid: Grid::new(config.rows, config.cols),
            config,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current board
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Steps taken since the last seed or clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Empty board sized for this engine. Does not touch the current grid.
    pub fn create_empty_grid(&self) -> Grid {
        Grid::new(self.config.rows, self.config.cols)
    }

    /// Replace the board with a random one using the thread RNG
    pub fn seed_random(&mut self, density: f64) -> &Grid {
        self.seed_random_with(&mut rand::rng(), density)
    }

    /// Replace the board with a random one drawn from `rng`
    pub fn seed_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> &Grid {
        self.grid = Grid::random(self.config.rows, self.config.cols, density, rng);
        self.generation = 0;
        debug!(
            "Seeded {}x{} grid at density {:.2}: {} live",
            self.config.rows,
            self.config.cols,
            density,
            self.grid.population()
        );
        &self.grid
    }

    /// Seed with the configured default density
    pub fn seed_default(&mut self) -> &Grid {
        self.seed_random(self.config.density)
    }

    /// Flip one cell. On error the current board is kept.
    pub fn toggle_cell(&mut self, row: isize, col: isize) -> Result<&Grid> {
        self.grid = toggle_cell(&self.grid, row, col)?;
        Ok(&self.grid)
    }

    /// Advance one generation
    pub fn step(&mut self) -> &Grid {
        self.grid = step(&self.grid);
        self.generation += 1;
        trace!("Generation {}: {} live", self.generation, self.grid.population());
        &self.grid
    }

    /// Replace the board with an empty one
    pub fn clear(&mut self) -> &Grid {
        self.grid = self.create_empty_grid();
        self.generation = 0;
        debug!("Cleared grid");
        &self.grid
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DENSITY;
    use crate::domain::{Cell, LifeError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with(live: &[(usize, usize)]) -> Grid {
        Grid::from_live_cells(ROWS, COLS, live.iter().copied()).unwrap()
    }

    fn live(grid: &Grid) -> Vec<(usize, usize)> {
        grid.live_cells().collect()
    }

    #[test]
    fn test_create_empty_grid_is_all_dead() {
        let grid = create_empty_grid();
        assert_eq!(grid.dimensions(), (ROWS, COLS));
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::Dead));
    }

    #[test]
    fn test_step_preserves_dimensions() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..5 {
            let grid = Grid::random(ROWS, COLS, 0.4, &mut rng);
            assert_eq!(step(&grid).dimensions(), (ROWS, COLS));
        }
    }

    #[test]
    fn test_blinker_reproduction() {
        let grid = grid_with(&[(1, 0), (1, 1), (1, 2)]);
        let next = step(&grid);
        // (0,1) and (2,1) each see three live neighbors; (1,1) sees two and survives
        assert_eq!(live(&next), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(live(&step(&next)), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_isolated_cells_die() {
        let lonely = grid_with(&[(10, 10)]);
        assert_eq!(step(&lonely).population(), 0);

        let pair = grid_with(&[(10, 10), (10, 11)]);
        assert_eq!(step(&pair).population(), 0);
    }

    #[test]
    fn test_overpopulated_cell_dies() {
        // Center of a plus has four live neighbors
        let plus = grid_with(&[(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)]);
        let next = step(&plus);
        assert!(!next.is_alive(5, 5));
    }

    #[test]
    fn test_block_is_still_life() {
        let block = grid_with(&[(3, 3), (3, 4), (4, 3), (4, 4)]);
        let mut grid = block.clone();
        for _ in 0..5 {
            grid = step(&grid);
            assert_eq!(grid, block);
        }
    }

    #[test]
    fn test_block_in_corner_is_still_life() {
        let block = grid_with(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid::random(ROWS, COLS, 0.25, &mut rng);
        for (r, c) in [(0, 0), (ROWS - 1, COLS - 1), (12, 31)] {
            let (r, c) = (r as isize, c as isize);
            let twice = toggle_cell(&toggle_cell(&grid, r, c).unwrap(), r, c).unwrap();
            assert_eq!(twice, grid);
        }
    }

    #[test]
    fn test_operations_do_not_mutate_input() {
        let grid = grid_with(&[(1, 0), (1, 1), (1, 2), (7, 7)]);
        let saved = grid.clone();
        let _ = step(&grid);
        let _ = toggle_cell(&grid, 7, 7).unwrap();
        assert_eq!(grid, saved);
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let grid = create_empty_grid();
        let (rows, cols) = (ROWS as isize, COLS as isize);
        for (r, c) in [(rows, 0), (0, cols), (-1, 0), (0, -1), (-5, -5)] {
            assert_eq!(
                toggle_cell(&grid, r, c),
                Err(LifeError::OutOfBounds { row: r, col: c, rows: ROWS, cols: COLS })
            );
        }
    }

    #[test]
    fn test_seed_random_density_is_plausible() {
        // 1500 cells at p=0.25: mean 375, sd ~17; bounds are ~6 sd wide
        let grid = seed_random(DEFAULT_DENSITY);
        assert_eq!(grid.dimensions(), (ROWS, COLS));
        let population = grid.population();
        assert!((270..=480).contains(&population), "population {}", population);
    }

    #[test]
    fn test_engine_counts_generations() {
        let mut engine = SimulationEngine::default();
        engine.toggle_cell(0, 0).unwrap();
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 2);
        assert_eq!(engine.population(), 0);

        engine.seed_random_with(&mut StdRng::seed_from_u64(5), 0.5);
        assert_eq!(engine.generation(), 0);
        assert!(engine.population() > 0);

        engine.step();
        engine.clear();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid(), &engine.create_empty_grid());
    }

    #[test]
    fn test_engine_keeps_grid_on_failed_toggle() {
        let mut engine = SimulationEngine::default();
        engine.toggle_cell(2, 2).unwrap();
        let before = engine.snapshot();
        assert!(engine.toggle_cell(ROWS as isize, 0).is_err());
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn test_engine_snapshot_is_independent() {
        let mut engine = SimulationEngine::new(SimulationConfig::default().with_size(4, 4));
        let before = engine.snapshot();
        engine.toggle_cell(1, 1).unwrap();
        assert_eq!(before.population(), 0);
        assert_eq!(engine.population(), 1);
        assert_eq!(engine.dimensions(), (4, 4));
    }
}
