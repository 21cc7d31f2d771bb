mod cell;
mod error;
mod grid;
mod neighborhood;
pub mod engine;

pub use cell::Cell;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use neighborhood::{NEIGHBOR_OFFSETS, neighbors};
pub use engine::{SimulationEngine, create_empty_grid, seed_random, step, toggle_cell};
